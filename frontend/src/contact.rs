use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    Missing(ContactField),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl ContactError {
    pub fn field(&self) -> ContactField {
        match self {
            ContactError::Missing(field) => *field,
            ContactError::InvalidEmail => ContactField::Email,
        }
    }
}

/// Field values of the contact form, as handed to a [`ContactSubmitter`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactPayload {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Every problem with the current values, in field order.
    pub fn validate(&self) -> Result<(), Vec<ContactError>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(ContactError::Missing(ContactField::Name));
        }
        if self.email.trim().is_empty() {
            errors.push(ContactError::Missing(ContactField::Email));
        } else if !looks_like_email(self.email.trim()) {
            errors.push(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            errors.push(ContactError::Missing(ContactField::Message));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn trimmed(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("your message could not be sent: {0}")]
pub struct SubmitError(pub String);

pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), SubmitError>>>>;

/// Delivers a validated contact form somewhere. The site ships without a
/// delivery backend; hosts inject their own implementation.
pub trait ContactSubmitter {
    fn submit(&self, payload: ContactPayload) -> SubmitFuture;
}

/// Logs the payload and reports success.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingSubmitter;

impl ContactSubmitter for LoggingSubmitter {
    fn submit(&self, payload: ContactPayload) -> SubmitFuture {
        let result = serde_json::to_string(&payload)
            .map(|json| log::info!("contact form submitted: {json}"))
            .map_err(|err| SubmitError(err.to_string()));
        Box::pin(async move { result })
    }
}

/// Shared handle so a submitter can travel through component properties.
#[derive(Clone)]
pub struct Submitter(pub Rc<dyn ContactSubmitter>);

impl Default for Submitter {
    fn default() -> Self {
        Submitter(Rc::new(LoggingSubmitter))
    }
}

impl PartialEq for Submitter {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactPayload {
        ContactPayload {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            message: "We need a new storefront.".into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn blank_fields_are_reported_in_order() {
        let payload = ContactPayload {
            name: "   ".into(),
            email: String::new(),
            message: "\n".into(),
        };
        assert_eq!(
            payload.validate(),
            Err(vec![
                ContactError::Missing(ContactField::Name),
                ContactError::Missing(ContactField::Email),
                ContactError::Missing(ContactField::Message),
            ])
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["asha", "asha@", "@example.com", "asha@example", "a b@example.com", "a@b@c.com", "asha@.com", "asha@example."] {
            let mut payload = filled();
            payload.set(ContactField::Email, email.into());
            assert_eq!(payload.validate(), Err(vec![ContactError::InvalidEmail]), "{email}");
        }
    }

    #[test]
    fn surrounding_whitespace_is_tolerated_and_trimmed() {
        let mut payload = filled();
        payload.set(ContactField::Email, "  asha@example.com ".into());
        assert_eq!(payload.validate(), Ok(()));
        assert_eq!(payload.trimmed().email, "asha@example.com");
    }

    #[test]
    fn errors_know_their_field() {
        assert_eq!(ContactError::InvalidEmail.field(), ContactField::Email);
        assert_eq!(ContactError::Missing(ContactField::Message).field(), ContactField::Message);
        assert_eq!(ContactError::Missing(ContactField::Name).to_string(), "Name is required");
    }

    #[test]
    fn payload_serializes_field_names() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["name"], "Asha Rao");
        assert_eq!(json["email"], "asha@example.com");
        assert_eq!(json["message"], "We need a new storefront.");
    }
}
