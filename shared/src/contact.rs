use serde::{Deserialize, Serialize};

use crate::error::ContactError;

/// What the contact form hands to its submission backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// First empty field, if any. Format checks are left to the browser.
    pub fn check_required(&self) -> Result<(), ContactError> {
        if self.name.is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if self.email.is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if self.message.is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_fields() {
        let submission = ContactSubmission::new("  Ada ", "ada@example.com\n", " Hi ");
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.message, "Hi");
        assert!(submission.check_required().is_ok());
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            ContactSubmission::new("", "a@b.c", "hello").check_required(),
            Err(ContactError::MissingField("name"))
        );
        assert_eq!(
            ContactSubmission::new("Ada", "   ", "hello").check_required(),
            Err(ContactError::MissingField("email"))
        );
        assert_eq!(
            ContactSubmission::new("Ada", "a@b.c", "").check_required(),
            Err(ContactError::MissingField("message"))
        );
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let json = serde_json::to_value(ContactSubmission::new("Ada", "a@b.c", "hi")).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Ada", "email": "a@b.c", "message": "hi"}));
    }
}
