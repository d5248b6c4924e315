use garde::Validate;
use serde::{Deserialize, Serialize};
use crate::domain::models::contact::ContactMessage;
use super::{check, normalize_email, required, FormErrors};

#[derive(Debug, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct ContactForm {
    #[garde(custom(required), length(chars, max = 100))]
    pub name: String,
    #[garde(custom(required), length(chars, max = 254), email)]
    pub email: String,
    #[garde(custom(required), length(chars, max = 200))]
    pub subject: String,
    #[garde(custom(required))]
    pub message: String,
}

impl ContactForm {
    pub fn clean(&self) -> Result<ContactMessage, FormErrors> {
        let form = Self {
            name: self.name.trim().to_string(),
            email: normalize_email(&self.email),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        };
        check(&form)?;

        Ok(ContactMessage::new(form.name, form.email, form.subject, form.message))
    }
}
