//! Field-error maps and their `error` query parameter encoding.
//!
//! On the wire the map is a JSON object `{field: message}`, percent-encoded
//! once before being placed in the query string (where it is form-encoded
//! again). Decoding reverses both steps and treats anything malformed as
//! "no errors".

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field name → first validation message for that field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(IndexMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message; the first message recorded for a field wins
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Fold another map in, keeping messages already present
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, message) in other.0 {
            self.add(field, message);
        }
    }

    /// `Ok(value)` when no errors were recorded
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// Encode as the value of the `error` query parameter
    pub fn encode(&self) -> String {
        let json = serde_json::to_string(&self.0).unwrap_or_else(|_| "{}".to_string());
        urlencoding::encode(&json).into_owned()
    }

    /// Decode an `error` query parameter value.
    ///
    /// Message arrays (one list of messages per field) are also accepted;
    /// the first message is kept.
    pub fn decode(param: &str) -> Self {
        let Ok(json) = urlencoding::decode(param) else {
            tracing::debug!("error parameter is not valid percent-encoding");
            return Self::default();
        };

        let raw: IndexMap<String, Value> = match serde_json::from_str(&json) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!(error = %e, "ignoring malformed error parameter");
                return Self::default();
            }
        };

        let mut errors = Self::default();
        for (field, value) in raw {
            let message = match value {
                Value::String(s) => Some(s),
                Value::Array(items) => items.into_iter().find_map(|v| match v {
                    Value::String(s) => Some(s),
                    _ => None,
                }),
                _ => None,
            };
            if let Some(message) = message {
                errors.add(field, message);
            }
        }
        errors
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut errors = Self::default();
        for (field, message) in iter {
            errors.add(field, message);
        }
        errors
    }
}
