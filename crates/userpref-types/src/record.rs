use serde::{Deserialize, Serialize};

/// The single user profile held by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub age: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub likes_subject: bool,
}

impl UserRecord {
    /// A record as it reads back from a store that was never written.
    pub fn blank() -> Self {
        Self {
            name: Some(String::new()),
            email: Some(String::new()),
            age: 0,
            phone_number: Some(String::new()),
            likes_subject: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.as_deref().map_or(true, str::is_empty)
    }

    pub fn form_mode(&self) -> FormMode {
        if self.is_empty() {
            FormMode::Add
        } else {
            FormMode::Edit
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    Add,
    Edit,
}

impl FormMode {
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Add => "Add new",
            FormMode::Edit => "Edit",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Add => "Save",
            FormMode::Edit => "Update",
        }
    }

    /// Label of the summary screen button that opens the form.
    pub fn action_label(&self) -> &'static str {
        match self {
            FormMode::Add => "Save",
            FormMode::Edit => "Change",
        }
    }
}
