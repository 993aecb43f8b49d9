use userpref_form::{FormInput, ValidationError};
use userpref_types::*;

const MISSING: &str = "None";

fn or_missing(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => MISSING,
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn format_rows(rows: &[(&str, &str)]) -> Vec<String> {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| format!("{:<width$}  {}", label, value, width = width))
        .collect()
}

pub fn format_summary(record: &UserRecord) -> String {
    let age = record.age.to_string();
    let mut lines = format_rows(&[
        ("Name", or_missing(record.name.as_deref())),
        ("Email", or_missing(record.email.as_deref())),
        ("Age", age.as_str()),
        ("Phone", or_missing(record.phone_number.as_deref())),
        ("Likes subject", yes_no(record.likes_subject)),
    ]);
    lines.push(String::new());
    lines.push(format!("[{}]", record.form_mode().action_label()));
    lines.join("\n")
}

pub fn format_form(mode: FormMode, input: &FormInput) -> String {
    let mut lines = vec![mode.title().to_string(), String::new()];
    lines.extend(format_rows(&[
        ("Name", input.name.as_str()),
        ("Email", input.email.as_str()),
        ("Age", input.age.as_str()),
        ("Phone", input.phone.as_str()),
        ("Likes subject", yes_no(input.likes_subject)),
    ]));
    lines.push(String::new());
    lines.push(format!("[{}]", mode.submit_label()));
    lines.join("\n")
}

pub fn format_saved(record: &UserRecord) -> String {
    format!("Data saved\n\n{}", format_summary(record))
}

pub fn format_validation_error(error: &ValidationError) -> String {
    format!("{}: {}", error.field, error.message())
}
