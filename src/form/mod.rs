//! Form state carried through the query string.
//!
//! The registration form keeps no server-side session: every request
//! receives the full set of field values as query or body parameters and
//! every redirect hands them back. [`FormState`] is that parameter map.

pub mod errors;
pub mod flow;
pub mod phone;
pub mod redirect;
pub mod schema;

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use errors::FieldErrors;
pub use schema::{BusinessInfo, CompanyRegistration, ContactInfo};

/// Query parameter names
pub mod fields {
    pub const STEP: &str = "step";
    pub const TYPE: &str = "type";
    pub const MESSAGE: &str = "message";
    pub const ERROR: &str = "error";

    pub const BUSINESS_NAME: &str = "businessName";
    pub const COMPANY_TYPE: &str = "companyType";
    pub const ADDRESS_LINE1: &str = "adressLine1";
    pub const ADDRESS_LINE2: &str = "adressLine2";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const ZIP: &str = "zip";

    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const COUNTRY: &str = "country";

    /// Keys only ever written by a redirect, never by the form itself
    pub const FEEDBACK: &[&str] = &[TYPE, MESSAGE, ERROR];
}

/// One of the three stages of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Business = 1,
    Contact = 2,
    Review = 3,
}

impl Step {
    /// All steps in order
    pub fn all() -> &'static [Step] {
        &[Step::Business, Step::Contact, Step::Review]
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Title shown in the progress indicator
    pub fn label(self) -> &'static str {
        match self {
            Step::Business => "Business structure",
            Step::Contact => "Contact person",
            Step::Review => "Review & submit",
        }
    }

    /// The following step; the review step is last
    pub fn next(self) -> Step {
        match self {
            Step::Business => Step::Contact,
            Step::Contact | Step::Review => Step::Review,
        }
    }

    pub fn from_number(n: u8) -> Option<Step> {
        match n {
            1 => Some(Step::Business),
            2 => Some(Step::Contact),
            3 => Some(Step::Review),
            _ => None,
        }
    }

    /// Parse the `step` parameter. Missing or unusable values mean step 1.
    pub fn from_param(value: Option<&str>) -> Step {
        value
            .and_then(|v| v.trim().parse::<u8>().ok())
            .and_then(Step::from_number)
            .unwrap_or(Step::Business)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Ordered field name → value map for one request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState(IndexMap<String, String>);

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build state from a submitted form body, dropping any stale feedback
    /// parameters so they are never carried into the next redirect.
    pub fn from_submission(params: IndexMap<String, String>) -> Self {
        let mut state = Self(params);
        for key in fields::FEEDBACK {
            state.0.shift_remove(*key);
        }
        state
    }

    /// Raw value, including empty strings
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Value if present and not empty
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Value or the empty string
    pub fn value(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// Set a parameter, keeping its position if it already exists
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn with_step(self, step: Step) -> Self {
        self.with(fields::STEP, step.to_string())
    }

    pub fn step(&self) -> Step {
        Step::from_param(self.get(fields::STEP))
    }

    /// Field errors decoded from the `error` parameter
    pub fn field_errors(&self) -> FieldErrors {
        self.get(fields::ERROR)
            .map(FieldErrors::decode)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `application/x-www-form-urlencoded` rendering of all parameters
    pub fn to_query_string(&self) -> String {
        let pairs: Vec<(&str, &str)> = self.iter().collect();
        // string pairs always serialize
        serde_urlencoded::to_string(pairs).unwrap_or_default()
    }

    /// Same-page URL carrying this state
    pub fn location(&self) -> String {
        format!("/?{}", self.to_query_string())
    }
}

impl From<IndexMap<String, String>> for FormState {
    fn from(params: IndexMap<String, String>) -> Self {
        Self(params)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormState {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
