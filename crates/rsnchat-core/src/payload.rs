//! Flat JSON request bodies.
//!
//! Every RsnChat endpoint takes a single JSON object whose values are strings.
//! [`Payload`] collects those fields and serializes as that object.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Display;

/// Builder for a flat string-keyed request body.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Payload {
    fields: BTreeMap<&'static str, String>,
}

impl Payload {
    /// Create a new, empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Create a payload holding only a `prompt` field.
    #[must_use]
    pub fn prompt(prompt: impl Display) -> Self {
        let mut payload = Self::new();
        payload.push("prompt", prompt);
        payload
    }

    /// Append a required field. A later push of the same key replaces it.
    pub fn push<T>(&mut self, key: &'static str, value: T)
    where
        T: Display,
    {
        self.fields.insert(key, value.to_string());
    }

    /// Append a field when the value is present.
    pub fn push_opt<T>(&mut self, key: &'static str, value: Option<T>)
    where
        T: Display,
    {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Look up a field value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
