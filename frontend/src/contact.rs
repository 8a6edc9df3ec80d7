use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::contact::{RESET_MS, SENDING_MS};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// A contact request that passed validation, with surrounding whitespace
/// stripped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Checks every field and reports all problems at once.
pub fn validate(name: &str, email: &str, message: &str) -> Result<ContactMessage, Vec<FieldError>> {
    let (name, email, message) = (name.trim(), email.trim(), message.trim());
    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push(FieldError::new(Field::Name, "Name is required"));
    }

    if email.is_empty() {
        errors.push(FieldError::new(Field::Email, "Email is required"));
    } else if !is_valid_email(email) {
        errors.push(FieldError::new(Field::Email, "Please enter a valid email"));
    }

    if message.is_empty() {
        errors.push(FieldError::new(Field::Message, "Message is required"));
    }

    if errors.is_empty() {
        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    } else {
        Err(errors)
    }
}

pub fn error_for(errors: &[FieldError], field: Field) -> Option<&'static str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message)
}

pub const SUBMIT_LABEL: &str = "Send Message";

/// Simulated submission: nothing leaves the browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl SubmitPhase {
    /// How long this phase lasts and what follows it. Idle waits for the user.
    pub fn next(self) -> Option<(u32, SubmitPhase)> {
        match self {
            SubmitPhase::Idle => None,
            SubmitPhase::Sending => Some((SENDING_MS, SubmitPhase::Sent)),
            SubmitPhase::Sent => Some((RESET_MS, SubmitPhase::Idle)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SubmitPhase::Idle => SUBMIT_LABEL,
            SubmitPhase::Sending => "Sending...",
            SubmitPhase::Sent => "Message Sent!",
        }
    }

    pub fn disabled(self) -> bool {
        self != SubmitPhase::Idle
    }

    pub fn button_style(self) -> &'static str {
        match self {
            SubmitPhase::Idle => "",
            SubmitPhase::Sending => "opacity: 0.7;",
            SubmitPhase::Sent => "opacity: 1; background: #10b981;",
        }
    }
}
