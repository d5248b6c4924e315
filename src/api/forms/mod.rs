//! Form parsing and validation. Field rules are declared with `garde`; each
//! form's `clean` normalizes the raw input, runs the rules and turns a failed
//! report into a `FormErrors` map the template renders inline.

pub mod contact;
pub mod event_plan;
pub mod signup;

use std::collections::BTreeMap;
use garde::{Report, Validate};
use serde::Serialize;

#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }
}

impl From<Report> for FormErrors {
    /// A blank required field reports only that it is required.
    fn from(report: Report) -> Self {
        let mut errors = FormErrors::new();
        for (path, error) in report.into_inner() {
            errors.add(&path.to_string(), error.message());
        }
        for messages in errors.0.values_mut() {
            if messages.iter().any(|m| m == REQUIRED) {
                messages.retain(|m| m == REQUIRED);
                messages.dedup();
            }
        }
        errors
    }
}

pub const REQUIRED: &str = "This field is required.";

/// Runs the declared rules of an already-normalized form.
pub fn check<T>(form: &T) -> Result<(), FormErrors>
where
    T: Validate,
    T::Context: Default,
{
    form.validate().map_err(FormErrors::from)
}

pub fn required(value: &str, _: &()) -> garde::Result {
    if value.trim().is_empty() {
        return Err(garde::Error::new(REQUIRED));
    }
    Ok(())
}

pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[garde(custom(required), length(chars, max = 10))]
        name: String,
        #[garde(custom(required), email)]
        email: String,
    }

    #[test]
    fn test_report_maps_to_fields() {
        let ok = Sample { name: "Bob".into(), email: "bob@example.com".into() };
        assert!(check(&ok).is_ok());

        let bad = Sample { name: "abcdefghijk".into(), email: "bob".into() };
        let errors = check(&bad).unwrap_err();
        assert!(errors.has("name"));
        assert!(errors.has("email"));
    }

    #[test]
    fn test_blank_field_reports_required_only() {
        let blank = Sample { name: "x".into(), email: String::new() };
        let errors = check(&blank).unwrap_err();
        assert_eq!(errors.0.get("email"), Some(&vec![REQUIRED.to_string()]));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email(" Alice@Example.COM "), "alice@example.com");
    }
}
