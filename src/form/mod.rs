//! Contact form model, validation and submission state.
//!
//! - `FormValues`: the three user-entered fields, also the JSON request payload
//! - `ErrorMap`: current per-field and submit-level failures
//! - `validate`: pure local validation rules
//! - `FormController`: the submission state machine

mod controller;
mod validate;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use controller::{FormController, SubmissionStatus, SubmissionTicket, SubmitOutcome};
pub use validate::validate;

/// A single editable field of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Message,
}

impl Field {
    /// All fields in display order
    pub fn all() -> &'static [Field] {
        &[Field::Name, Field::Phone, Field::Message]
    }

    /// Wire name of the field (JSON key)
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }
}

/// Values entered by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub phone: String,
    pub message: String,
}

impl FormValues {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// True when every field is an empty string
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        Field::all().iter().all(|f| self.get(*f).is_empty())
    }
}

/// Key of an entry in the error map: one per field plus the submit-level slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKey {
    Name,
    Phone,
    Message,
    Submit,
}

impl ErrorKey {
    /// Parse a key as sent by the server; unknown keys yield `None`
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "name" => Some(ErrorKey::Name),
            "phone" => Some(ErrorKey::Phone),
            "message" => Some(ErrorKey::Message),
            "submit" => Some(ErrorKey::Submit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKey::Name => "name",
            ErrorKey::Phone => "phone",
            ErrorKey::Message => "message",
            ErrorKey::Submit => "submit",
        }
    }
}

impl From<Field> for ErrorKey {
    fn from(field: Field) -> Self {
        match field {
            Field::Name => ErrorKey::Name,
            Field::Phone => ErrorKey::Phone,
            Field::Message => ErrorKey::Message,
        }
    }
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current failures keyed by field (or `submit`).
///
/// An empty map means "no errors known", not "known valid": edits clear it
/// without re-validating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<ErrorKey, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: ErrorKey, message: impl Into<String>) {
        self.0.insert(key, message.into());
    }

    pub fn get(&self, key: ErrorKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    #[cfg(test)]
    pub fn contains(&self, key: ErrorKey) -> bool {
        self.0.contains_key(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (ErrorKey, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl FromIterator<(ErrorKey, String)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (ErrorKey, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, message)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", key, message)?;
        }
        Ok(())
    }
}
