use serde::Serialize;
use thiserror::Error;
use userpref_store::StoreError;
use userpref_types::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    FieldRequired,
    FieldInvalid,
    FieldNotNumeric,
}

impl ErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::FieldRequired => "Field must not be empty",
            ErrorKind::FieldInvalid => "Email is not valid",
            ErrorKind::FieldNotNumeric => "Only digits are allowed",
        }
    }
}

/// The first field that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{field}: {}", .kind.message())]
pub struct ValidationError {
    pub field: Field,
    pub kind: ErrorKind,
}

impl ValidationError {
    pub fn required(field: Field) -> Self {
        Self {
            field,
            kind: ErrorKind::FieldRequired,
        }
    }

    pub fn invalid(field: Field) -> Self {
        Self {
            field,
            kind: ErrorKind::FieldInvalid,
        }
    }

    pub fn not_numeric(field: Field) -> Self {
        Self {
            field,
            kind: ErrorKind::FieldNotNumeric,
        }
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
