use garde::Validate;
use serde::{Deserialize, Serialize};
use super::{check, normalize_email, required, FormErrors, REQUIRED};

pub const MIN_PASSWORD_LEN: usize = 8;

const COMMON_PASSWORDS: &[&str] = &[
    "password", "password1", "12345678", "123456789", "1234567890", "qwerty123",
    "iloveyou", "sunshine", "princess", "football", "baseball", "welcome1",
    "letmein1", "abc12345", "11111111", "00000000", "passw0rd", "trustno1",
];

#[derive(Debug, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct SignupForm {
    #[garde(custom(required), length(chars, max = 254), email)]
    pub email: String,
    #[garde(length(chars, max = 30))]
    pub first_name: String,
    #[garde(length(chars, max = 30))]
    pub last_name: String,
    #[serde(skip_serializing)]
    #[garde(custom(strong_password(&self.email)))]
    pub password1: String,
    #[serde(skip_serializing)]
    #[garde(custom(confirms(&self.password1)))]
    pub password2: String,
}

#[derive(Debug)]
pub struct SignupData {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl SignupForm {
    pub fn clean(&self) -> Result<SignupData, FormErrors> {
        let form = Self {
            email: normalize_email(&self.email),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            password1: self.password1.clone(),
            password2: self.password2.clone(),
        };
        check(&form)?;

        Ok(SignupData {
            email: form.email,
            first_name: form.first_name,
            last_name: form.last_name,
            password: form.password1,
        })
    }
}

fn strong_password(email: &str) -> impl FnOnce(&str, &()) -> garde::Result + '_ {
    move |password, _| {
        if password.is_empty() {
            return Err(garde::Error::new(REQUIRED));
        }
        let problems = password_policy_errors(password, email);
        if problems.is_empty() { Ok(()) } else { Err(garde::Error::new(problems.join(" "))) }
    }
}

fn confirms(password1: &str) -> impl FnOnce(&str, &()) -> garde::Result + '_ {
    move |password2, _| {
        if password2.is_empty() {
            Err(garde::Error::new(REQUIRED))
        } else if password2 != password1 {
            Err(garde::Error::new("The two password fields didn't match."))
        } else {
            Ok(())
        }
    }
}

/// Strength checks applied to a new password.
pub fn password_policy_errors(password: &str, email: &str) -> Vec<String> {
    let mut problems = Vec::new();
    let lowered = password.to_lowercase();

    if password.chars().count() < MIN_PASSWORD_LEN {
        problems.push(format!(
            "This password is too short. It must contain at least {} characters.", MIN_PASSWORD_LEN
        ));
    }
    if !password.is_empty() && password.chars().all(|c| c.is_ascii_digit()) {
        problems.push("This password is entirely numeric.".to_string());
    }
    if COMMON_PASSWORDS.contains(&lowered.as_str()) {
        problems.push("This password is too common.".to_string());
    }

    let local_part = email.split('@').next().unwrap_or_default();
    if !email.is_empty() && (lowered == email || (local_part.len() >= 3 && lowered.contains(local_part))) {
        problems.push("The password is too similar to the email address.".to_string());
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, p1: &str, p2: &str) -> SignupForm {
        SignupForm {
            email: email.into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            password1: p1.into(),
            password2: p2.into(),
        }
    }

    #[test]
    fn test_valid_signup() {
        let data = form("Ada@Example.com", "analytical-engine-42", "analytical-engine-42").clean().unwrap();
        assert_eq!(data.email, "ada@example.com");
        assert_eq!(data.first_name, "Ada");
    }

    #[test]
    fn test_password_mismatch() {
        let errors = form("ada@example.com", "analytical-engine-42", "different-pass-99").clean().unwrap_err();
        assert!(errors.has("password2"));
        assert!(!errors.has("password1"));
        assert!(!errors.has("email"));
    }

    #[test]
    fn test_password_policy() {
        assert!(!password_policy_errors("short1", "x@example.com").is_empty());
        assert!(!password_policy_errors("1234567890123", "x@example.com").is_empty());
        assert!(!password_policy_errors("Password1", "x@example.com").is_empty());
        assert!(!password_policy_errors("gracehopper2024", "gracehopper@example.com").is_empty());
        assert!(password_policy_errors("correct-horse-battery", "x@example.com").is_empty());
    }

    #[test]
    fn test_missing_fields() {
        let errors = SignupForm::default().clean().unwrap_err();
        assert!(errors.has("email"));
        assert!(errors.has("password1"));
        assert!(errors.has("password2"));
        assert!(!errors.has("first_name"));
    }

    #[test]
    fn test_weak_password_is_reported_on_first_field() {
        let errors = form("ada@example.com", "12345678", "12345678").clean().unwrap_err();
        assert!(errors.has("password1"));
        assert!(!errors.has("password2"));
    }
}
