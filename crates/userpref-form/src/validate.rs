use std::sync::OnceLock;

use regex::Regex;
use userpref_types::{Field, UserRecord};

use crate::ValidationError;

// Same shape as the email pattern shipped with mobile platforms: a local
// part, then a domain of at least two dot-separated labels.
const EMAIL_PATTERN: &str = concat!(
    r"^[a-zA-Z0-9+._%\-]{1,256}",
    r"@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}",
    r"(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
);

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

pub fn is_digits_only(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Raw, unvalidated form contents as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub age: String,
    pub phone: String,
    pub likes_subject: bool,
}

impl FormInput {
    /// Pre-fills the form from an existing record, as the edit screen does.
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone().unwrap_or_default(),
            email: record.email.clone().unwrap_or_default(),
            age: record.age.to_string(),
            phone: record.phone_number.clone().unwrap_or_default(),
            likes_subject: record.likes_subject,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedForm {
    pub name: String,
    pub email: String,
    pub age: u32,
    pub phone: String,
    pub likes_subject: bool,
}

impl ValidatedForm {
    pub fn apply_to(self, record: &mut UserRecord) {
        record.name = Some(self.name);
        record.email = Some(self.email);
        record.age = self.age;
        record.phone_number = Some(self.phone);
        record.likes_subject = self.likes_subject;
    }

    pub fn into_record(self) -> UserRecord {
        let mut record = UserRecord::default();
        self.apply_to(&mut record);
        record
    }
}

/// Checks the form field by field and stops at the first failure.
///
/// Order is fixed: name, email, age, phone.
pub fn validate(input: &FormInput) -> Result<ValidatedForm, ValidationError> {
    let name = input.name.trim();
    let email = input.email.trim();
    let age = input.age.trim();
    let phone = input.phone.trim();

    if name.is_empty() {
        return Err(ValidationError::required(Field::Name));
    }

    if email.is_empty() {
        return Err(ValidationError::required(Field::Email));
    }
    if !is_valid_email(email) {
        return Err(ValidationError::invalid(Field::Email));
    }

    if age.is_empty() {
        return Err(ValidationError::required(Field::Age));
    }
    if !is_digits_only(age) {
        return Err(ValidationError::not_numeric(Field::Age));
    }
    let age: u32 = age
        .parse()
        .map_err(|_| ValidationError::not_numeric(Field::Age))?;

    if phone.is_empty() {
        return Err(ValidationError::required(Field::Phone));
    }
    if !is_digits_only(phone) {
        return Err(ValidationError::not_numeric(Field::Phone));
    }

    Ok(ValidatedForm {
        name: name.to_string(),
        email: email.to_string(),
        age,
        phone: phone.to_string(),
        likes_subject: input.likes_subject,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn valid_input() -> FormInput {
        FormInput {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            age: "36".to_string(),
            phone: "5550100".to_string(),
            likes_subject: true,
        }
    }

    #[test]
    fn test_valid_input_keeps_values() {
        let form = validate(&valid_input()).unwrap();
        assert_eq!(form.name, "Ada");
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.age, 36);
        assert_eq!(form.phone, "5550100");
        assert!(form.likes_subject);
    }

    #[test]
    fn test_inputs_are_trimmed() {
        let input = FormInput {
            name: "  Ada ".to_string(),
            age: " 7 ".to_string(),
            ..valid_input()
        };
        let form = validate(&input).unwrap();
        assert_eq!(form.name, "Ada");
        assert_eq!(form.age, 7);

        let blank = FormInput {
            name: "   ".to_string(),
            ..valid_input()
        };
        assert_eq!(
            validate(&blank).unwrap_err(),
            ValidationError::required(Field::Name)
        );
    }

    #[test]
    fn test_all_empty_reports_name_first() {
        let err = validate(&FormInput::default()).unwrap_err();
        assert_eq!(err.field, Field::Name);
        assert_eq!(err.kind, ErrorKind::FieldRequired);
    }

    #[test]
    fn test_field_order() {
        let mut input = FormInput {
            name: String::new(),
            email: "bad".to_string(),
            age: "x".to_string(),
            phone: "y".to_string(),
            likes_subject: false,
        };
        assert_eq!(validate(&input).unwrap_err().field, Field::Name);

        input.name = "Ada".to_string();
        assert_eq!(
            validate(&input).unwrap_err(),
            ValidationError::invalid(Field::Email)
        );

        input.email = "a@b.com".to_string();
        assert_eq!(
            validate(&input).unwrap_err(),
            ValidationError::not_numeric(Field::Age)
        );

        input.age = "3".to_string();
        assert_eq!(
            validate(&input).unwrap_err(),
            ValidationError::not_numeric(Field::Phone)
        );
    }

    #[test]
    fn test_missing_fields() {
        let cases = [
            (
                FormInput {
                    email: String::new(),
                    ..valid_input()
                },
                Field::Email,
            ),
            (
                FormInput {
                    age: String::new(),
                    ..valid_input()
                },
                Field::Age,
            ),
            (
                FormInput {
                    phone: String::new(),
                    ..valid_input()
                },
                Field::Phone,
            ),
        ];
        for (input, field) in cases {
            assert_eq!(
                validate(&input).unwrap_err(),
                ValidationError::required(field)
            );
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@b.com"));
    }

    #[test]
    fn test_phone_must_be_digits() {
        let input = FormInput {
            phone: "12a34".to_string(),
            ..valid_input()
        };
        assert_eq!(
            validate(&input).unwrap_err(),
            ValidationError::not_numeric(Field::Phone)
        );

        let input = FormInput {
            phone: "12345".to_string(),
            ..valid_input()
        };
        assert_eq!(validate(&input).unwrap().phone, "12345");
    }

    #[test]
    fn test_age_must_fit() {
        for age in ["-1", "3.5", "99999999999"] {
            let input = FormInput {
                age: age.to_string(),
                ..valid_input()
            };
            assert_eq!(
                validate(&input).unwrap_err(),
                ValidationError::not_numeric(Field::Age),
                "age {:?}",
                age
            );
        }
    }

    #[test]
    fn test_error_message() {
        let err = ValidationError::invalid(Field::Email);
        assert_eq!(err.to_string(), "email: Email is not valid");
        assert_eq!(
            ValidationError::required(Field::Phone).message(),
            "Field must not be empty"
        );
    }

    #[test]
    fn test_prefill_round_trips_through_validation() {
        let record = validate(&valid_input()).unwrap().into_record();
        let again = validate(&FormInput::from_record(&record)).unwrap();
        assert_eq!(again.into_record(), record);
    }
}
