use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your email")]
    MissingEmail,
    #[error("That email address doesn't look right")]
    InvalidEmail,
    #[error("Please write a message")]
    MissingMessage,
    #[error("Your message is already on its way")]
    AlreadySending,
}

/// Raw form input as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Validated, trimmed submission ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        let message = self.message.trim();
        if message.is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

impl From<ContactMessage> for ContactFields {
    fn from(value: ContactMessage) -> Self {
        Self {
            name: value.name,
            email: value.email,
            message: value.message,
        }
    }
}

fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Form contents plus where the last submission got to.
///
/// Input survives a failed send; only a confirmed delivery clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Message => self.fields.message = value,
        }
        if !self.is_sending() {
            self.status = SubmitStatus::Idle;
        }
    }

    pub fn begin_submit(&mut self) -> Result<ContactMessage, ContactError> {
        if self.is_sending() {
            return Err(ContactError::AlreadySending);
        }
        match self.fields.validate() {
            Ok(msg) => {
                self.status = SubmitStatus::Sending;
                Ok(msg)
            }
            Err(e) => {
                self.status = SubmitStatus::Failed(e.to_string());
                Err(e)
            }
        }
    }

    pub fn finish(&mut self, res: Result<(), String>) {
        match res {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.status = SubmitStatus::Sent;
            }
            Err(reason) => self.status = SubmitStatus::Failed(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ada Lovelace".to_string());
        form.set(Field::Email, "ada@example.com".to_string());
        form.set(Field::Message, "Let's build an engine.".to_string());
        form
    }

    #[test]
    fn test_validate_trims() {
        let fields = ContactFields {
            name: "  Ada ".to_string(),
            email: " ada@example.com\n".to_string(),
            message: "\thi\n".to_string(),
        };
        let msg = fields.validate().unwrap();
        assert_eq!(msg.name, "Ada");
        assert_eq!(msg.email, "ada@example.com");
        assert_eq!(msg.message, "hi");
    }

    #[test]
    fn test_validate_errors_in_field_order() {
        let mut fields = ContactFields::default();
        assert_eq!(fields.validate(), Err(ContactError::MissingName));
        fields.name = "Ada".to_string();
        assert_eq!(fields.validate(), Err(ContactError::MissingEmail));
        fields.email = "ada".to_string();
        assert_eq!(fields.validate(), Err(ContactError::InvalidEmail));
        fields.email = "ada@example.com".to_string();
        fields.message = "   ".to_string();
        assert_eq!(fields.validate(), Err(ContactError::MissingMessage));
    }

    #[test]
    fn test_validated_message_round_trips_to_fields() {
        let msg = ContactFields {
            name: " Ada ".to_string(),
            email: "ada@example.com".to_string(),
            message: "hi".to_string(),
        }
        .validate()
        .unwrap();
        let fields = ContactFields::from(msg.clone());
        assert_eq!(fields.name, "Ada");
        assert_eq!(fields.validate(), Ok(msg));
    }

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email("first.last+tag@mail.example.org"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("a@.co"));
        assert!(!looks_like_email("a@b."));
        assert!(!looks_like_email("a@b@c.co"));
        assert!(!looks_like_email("a b@c.co"));
    }

    #[test]
    fn test_success_clears_fields() {
        let mut form = filled();
        let msg = form.begin_submit().unwrap();
        assert_eq!(msg.name, "Ada Lovelace");
        assert!(form.is_sending());

        form.finish(Ok(()));
        assert_eq!(form.status(), &SubmitStatus::Sent);
        assert!(form.fields().is_blank());
    }

    #[test]
    fn test_failure_preserves_fields() {
        let mut form = filled();
        let before = form.fields().clone();
        form.begin_submit().unwrap();
        form.finish(Err("service unavailable".to_string()));
        assert_eq!(
            form.status(),
            &SubmitStatus::Failed("service unavailable".to_string())
        );
        assert_eq!(form.fields(), &before);
    }

    #[test]
    fn test_invalid_submit_keeps_input() {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ada".to_string());
        assert_eq!(form.begin_submit(), Err(ContactError::MissingEmail));
        assert_eq!(
            form.status(),
            &SubmitStatus::Failed(ContactError::MissingEmail.to_string())
        );
        assert_eq!(form.fields().name, "Ada");
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(ContactError::AlreadySending));
        assert!(form.is_sending());
    }

    #[test]
    fn test_editing_resets_status() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish(Err("nope".to_string()));
        form.set(Field::Message, "second try".to_string());
        assert_eq!(form.status(), &SubmitStatus::Idle);

        // typing while a send is in flight doesn't hide the spinner
        form.begin_submit().unwrap();
        form.set(Field::Message, "third".to_string());
        assert!(form.is_sending());
    }
}
