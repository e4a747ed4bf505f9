use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_MESSAGE_LEN: usize = 5000;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern should compile")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter your name")]
    EmptyName,
    #[error("Name must be at most {MAX_NAME_LEN} characters")]
    NameTooLong,
    #[error("Please enter your email")]
    EmptyEmail,
    #[error("Email must be at most {MAX_EMAIL_LEN} characters")]
    EmailTooLong,
    #[error("That doesn't look like an email address")]
    InvalidEmail,
    #[error("Please enter a message")]
    EmptyMessage,
    #[error("Message must be at most {MAX_MESSAGE_LEN} characters")]
    MessageTooLong,
}

/// Unsubmitted form contents, kept in local storage between visits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() {
            return Err(ContactError::EmptyName);
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(ContactError::NameTooLong);
        }
        if self.email.is_empty() {
            return Err(ContactError::EmptyEmail);
        }
        if self.email.chars().count() > MAX_EMAIL_LEN {
            return Err(ContactError::EmailTooLong);
        }
        if !EMAIL_RE.is_match(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.is_empty() {
            return Err(ContactError::EmptyMessage);
        }
        if self.message.chars().count() > MAX_MESSAGE_LEN {
            return Err(ContactError::MessageTooLong);
        }
        Ok(())
    }
}

impl From<&ContactDraft> for ContactMessage {
    fn from(draft: &ContactDraft) -> Self {
        Self::new(&draft.name, &draft.email, &draft.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Invalid(String),
    Sending,
    Sent,
    Failed(String),
}

impl FormStatus {
    /// Status after the visitor presses submit. `Ok` means the message should be sent.
    pub fn on_submit(&self, msg: &ContactMessage) -> Result<FormStatus, FormStatus> {
        if *self == FormStatus::Sending {
            // already in flight
            return Err(FormStatus::Sending);
        }
        match msg.validate() {
            Ok(()) => Ok(FormStatus::Sending),
            Err(e) => Err(FormStatus::Invalid(e.to_string())),
        }
    }

    pub fn on_response<E: std::fmt::Display>(res: Result<(), E>) -> FormStatus {
        match res {
            Ok(()) => FormStatus::Sent,
            Err(e) => FormStatus::Failed(e.to_string()),
        }
    }

    pub fn is_sending(&self) -> bool {
        *self == FormStatus::Sending
    }

    pub fn text(&self) -> Option<String> {
        match self {
            FormStatus::Idle | FormStatus::Sending => None,
            FormStatus::Invalid(s) => Some(s.clone()),
            FormStatus::Sent => Some("Thanks! Your message is on its way.".to_string()),
            FormStatus::Failed(s) => Some(format!("Couldn't send message: {s}")),
        }
    }

    pub fn is_err(&self) -> bool {
        matches!(self, FormStatus::Invalid(_) | FormStatus::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactMessage {
        ContactMessage::new("Ada", "ada@example.com", "Hello there")
    }

    #[test]
    fn test_trims_fields() {
        let msg = ContactMessage::new("  Ada ", " ada@example.com\n", "\thi ");
        assert_eq!(msg.name, "Ada");
        assert_eq!(msg.email, "ada@example.com");
        assert_eq!(msg.message, "hi");
        assert_eq!(msg.validate(), Ok(()));
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(
            ContactMessage::new("  ", "a@b.co", "hi").validate(),
            Err(ContactError::EmptyName)
        );
        assert_eq!(
            ContactMessage::new("Ada", "", "hi").validate(),
            Err(ContactError::EmptyEmail)
        );
        assert_eq!(
            ContactMessage::new("Ada", "not-an-email", "hi").validate(),
            Err(ContactError::InvalidEmail)
        );
        assert_eq!(
            ContactMessage::new("Ada", "a@b", "hi").validate(),
            Err(ContactError::InvalidEmail)
        );
        assert_eq!(
            ContactMessage::new("Ada", "a@b.co", "").validate(),
            Err(ContactError::EmptyMessage)
        );
    }

    #[test]
    fn test_length_limits() {
        let long_name = "a".repeat(MAX_NAME_LEN + 1);
        assert_eq!(
            ContactMessage::new(&long_name, "a@b.co", "hi").validate(),
            Err(ContactError::NameTooLong)
        );
        let long_email = format!("{}@b.co", "a".repeat(MAX_EMAIL_LEN));
        assert_eq!(
            ContactMessage::new("Ada", &long_email, "hi").validate(),
            Err(ContactError::EmailTooLong)
        );
        let long_msg = "a".repeat(MAX_MESSAGE_LEN + 1);
        assert_eq!(
            ContactMessage::new("Ada", "a@b.co", &long_msg).validate(),
            Err(ContactError::MessageTooLong)
        );
        let max_msg = "a".repeat(MAX_MESSAGE_LEN);
        assert_eq!(
            ContactMessage::new("Ada", "a@b.co", &max_msg).validate(),
            Ok(())
        );
    }

    #[test]
    fn test_draft_conversion() {
        let draft = ContactDraft {
            name: " Ada".to_string(),
            email: "ada@example.com ".to_string(),
            message: "hi".to_string(),
        };
        assert_eq!(
            ContactMessage::from(&draft),
            ContactMessage::new("Ada", "ada@example.com", "hi")
        );
    }

    #[test]
    fn test_status_transitions() {
        let idle = FormStatus::Idle;
        assert_eq!(idle.on_submit(&valid()), Ok(FormStatus::Sending));

        let invalid = ContactMessage::new("", "ada@example.com", "hi");
        let next = idle.on_submit(&invalid).unwrap_err();
        assert_eq!(next, FormStatus::Invalid("Please enter your name".to_string()));
        assert!(next.is_err());

        // a second submit while sending is ignored
        assert_eq!(
            FormStatus::Sending.on_submit(&valid()),
            Err(FormStatus::Sending)
        );

        // retrying after failure or success is allowed
        assert_eq!(
            FormStatus::Failed("x".to_string()).on_submit(&valid()),
            Ok(FormStatus::Sending)
        );
        assert_eq!(FormStatus::Sent.on_submit(&valid()), Ok(FormStatus::Sending));
    }

    #[test]
    fn test_status_on_response() {
        assert_eq!(FormStatus::on_response::<String>(Ok(())), FormStatus::Sent);
        let failed = FormStatus::on_response(Err("offline"));
        assert_eq!(failed, FormStatus::Failed("offline".to_string()));
        assert_eq!(
            failed.text(),
            Some("Couldn't send message: offline".to_string())
        );
        assert!(FormStatus::Sent.text().is_some());
        assert!(!FormStatus::Sent.is_err());
        assert_eq!(FormStatus::Sending.text(), None);
        assert!(FormStatus::Sending.is_sending());
    }
}
