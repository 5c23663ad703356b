use log::info;
use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ContactError {
    #[error("missing required fields: {}", join(.0))]
    Missing(Vec<ContactField>),
    #[error("email address is not valid")]
    InvalidEmail,
}

fn join(fields: &[ContactField]) -> String {
    fields.iter().map(|f| f.label()).collect::<Vec<_>>().join(", ")
}

/// What the contact form holds while the visitor types.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactFormDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ContactError::Missing(missing));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

// Same shape the browser enforces for type="email": local@domain, no spaces.
fn looks_like_email(value: &str) -> bool {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !domain.is_empty()
                && !value.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}

/// Destination for submitted messages. Nothing is sent anywhere yet; a real
/// transport plugs in here.
pub trait ContactSink {
    fn record(&self, draft: &ContactFormDraft);
}

/// Writes submissions to the browser console.
pub struct ConsoleSink;

impl ContactSink for ConsoleSink {
    fn record(&self, draft: &ContactFormDraft) {
        info!("Form submitted: name={} email={}", draft.name, draft.email);
        match serde_wasm_bindgen::to_value(draft) {
            Ok(payload) => gloo_console::log!("Form submitted:", payload),
            Err(e) => log::warn!("Could not convert form payload: {}", e),
        }
    }
}

/// Validates and records the draft. On success returns the cleared draft the
/// form should hold next; on failure nothing is recorded.
pub fn submit(draft: &ContactFormDraft, sink: &dyn ContactSink) -> Result<ContactFormDraft, ContactError> {
    draft.validate()?;
    sink.record(draft);
    Ok(ContactFormDraft::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        seen: RefCell<Vec<ContactFormDraft>>,
    }

    impl ContactSink for RecordingSink {
        fn record(&self, draft: &ContactFormDraft) {
            self.seen.borrow_mut().push(draft.clone());
        }
    }

    fn asha() -> ContactFormDraft {
        ContactFormDraft {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn submit_records_and_resets() {
        let sink = RecordingSink::default();
        let next = submit(&asha(), &sink).unwrap();

        assert_eq!(next, ContactFormDraft::default());
        assert_eq!(next.name, "");
        assert_eq!(next.email, "");
        assert_eq!(next.message, "");
        assert_eq!(sink.seen.borrow().as_slice(), &[asha()]);
    }

    #[test]
    fn missing_email_blocks_submission() {
        let sink = RecordingSink::default();
        let mut draft = asha();
        draft.set(ContactField::Email, "");

        let err = submit(&draft, &sink).unwrap_err();
        assert_eq!(err, ContactError::Missing(vec![ContactField::Email]));
        assert!(sink.seen.borrow().is_empty());
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut draft = asha();
        draft.set(ContactField::Name, "   ");
        draft.set(ContactField::Message, "\n");
        assert_eq!(
            draft.missing_fields(),
            vec![ContactField::Name, ContactField::Message]
        );
    }

    #[test]
    fn empty_draft_reports_every_field() {
        let err = ContactFormDraft::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "missing required fields: Name, Email, Message");
    }

    #[test]
    fn rejects_malformed_email() {
        for bad in ["asha", "@example.com", "asha@", "a@b@c", "asha @example.com"] {
            let mut draft = asha();
            draft.set(ContactField::Email, bad);
            assert_eq!(draft.validate(), Err(ContactError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn set_and_get_address_the_same_field() {
        let mut draft = ContactFormDraft::default();
        draft.set(ContactField::Message, "Need 2L daily");
        assert_eq!(draft.get(ContactField::Message), "Need 2L daily");
        assert_eq!(draft.message, "Need 2L daily");
        assert_eq!(draft.missing_fields(), vec![ContactField::Name, ContactField::Email]);
    }
}
