//! Form Payloads
//!
//! `application/x-www-form-urlencoded` bodies for the add and done endpoints,
//! plus the rules deciding what the add form does with a response.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::Strings;
use crate::error::ClientError;
use crate::message::MessageKind;
use crate::models::IdeaKey;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

/// Bytes left untouched by the urlencoded serializer. Space is kept in the
/// set so it can be rewritten to `+` afterwards.
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'*').remove(b'-').remove(b'.').remove(b'_');

fn encode(raw: &str) -> String {
    utf8_percent_encode(raw, FORM_VALUE).to_string().replace("%20", "+")
}

/// Ordered list of form fields
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormBody {
    fields: Vec<(String, String)>,
}

impl FormBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push((name.to_string(), value.into()));
        self
    }

    pub fn encode(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| format!("{}={}", encode(name), encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Fields of the add form
#[derive(Debug, Clone, PartialEq)]
pub struct NewIdea {
    pub idea: String,
    pub date: String,
}

impl NewIdea {
    /// Trimmed idea text; `None` when nothing is left to submit
    pub fn from_input(idea: &str, date: &str) -> Option<Self> {
        let idea = idea.trim();
        if idea.is_empty() {
            return None;
        }
        Some(Self {
            idea: idea.to_string(),
            date: date.trim().to_string(),
        })
    }

    pub fn to_form(&self) -> FormBody {
        FormBody::new()
            .field("idea", self.idea.as_str())
            .field("date", self.date.as_str())
    }
}

pub fn done_form(key: IdeaKey) -> FormBody {
    let (name, value) = key.form_field();
    FormBody::new().field(name, value)
}

/// Everything the add form does once a submission settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOutcome {
    pub message: &'static str,
    pub kind: MessageKind,
    /// Clear the idea text
    pub reset_fields: bool,
    /// Put the date input back to today
    pub reset_date: bool,
    /// Re-fetch the list
    pub reload: bool,
}

impl AddOutcome {
    pub fn from_result(result: &Result<(), ClientError>, strings: &'static Strings) -> Self {
        match result {
            Ok(()) => Self {
                message: strings.added,
                kind: MessageKind::Success,
                reset_fields: true,
                reset_date: true,
                reload: true,
            },
            Err(_) => Self {
                message: strings.add_failed,
                kind: MessageKind::Error,
                reset_fields: false,
                reset_date: true,
                reload: true,
            },
        }
    }

    /// Blank input: nothing is sent, the rest of the cycle still runs
    pub fn rejected(strings: &'static Strings) -> Self {
        Self {
            message: strings.idea_required,
            kind: MessageKind::Error,
            reset_fields: false,
            reset_date: true,
            reload: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EN;

    #[test]
    fn test_encode_add_form() {
        let idea = NewIdea::from_input("  Buy milk & eggs ", "2024-01-01").unwrap();
        assert_eq!(idea.to_form().encode(), "idea=Buy+milk+%26+eggs&date=2024-01-01");
    }

    #[test]
    fn test_encode_non_ascii_and_reserved() {
        let body = FormBody::new().field("idea", "咖啡 100%+more*_-.").encode();
        assert_eq!(body, "idea=%E5%92%96%E5%95%A1+100%25%2Bmore*_-.");
    }

    #[test]
    fn test_blank_idea_is_rejected() {
        assert_eq!(NewIdea::from_input("   ", "2024-01-01"), None);
        assert_eq!(NewIdea::from_input("", ""), None);
    }

    #[test]
    fn test_done_form_uses_key_field() {
        assert_eq!(done_form(IdeaKey::Index(2)).encode(), "idx=2");
        assert_eq!(done_form(IdeaKey::Id(17)).encode(), "id=17");
    }

    #[test]
    fn test_successful_add_resets_form() {
        let outcome = AddOutcome::from_result(&Ok(()), &EN);
        assert_eq!(outcome.kind, MessageKind::Success);
        assert_eq!(outcome.message, EN.added);
        assert!(outcome.reset_fields);
        assert!(outcome.reset_date);
        assert!(outcome.reload);
    }

    #[test]
    fn test_failed_add_keeps_form() {
        let outcome = AddOutcome::from_result(&Err(ClientError::Status(503)), &EN);
        assert_eq!(outcome.kind, MessageKind::Error);
        assert_eq!(outcome.message, EN.add_failed);
        assert!(!outcome.reset_fields);
        assert!(outcome.reset_date);
        assert!(outcome.reload);

        let outcome = AddOutcome::from_result(&Err(ClientError::Network("offline".into())), &EN);
        assert!(!outcome.reset_fields);
        assert!(outcome.reset_date);
        assert!(outcome.reload);
    }

    #[test]
    fn test_blank_submission_still_resets_date_and_reloads() {
        let outcome = AddOutcome::rejected(&EN);
        assert_eq!(outcome.kind, MessageKind::Error);
        assert_eq!(outcome.message, EN.idea_required);
        assert!(!outcome.reset_fields);
        assert!(outcome.reset_date);
        assert!(outcome.reload);
    }
}
