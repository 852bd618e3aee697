//! The field mapping extracted from one incoming request

use std::collections::HashMap;

use clap::Parser;

/// Names of the request fields that carry the subject and the body of the email
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
pub struct FieldNames {
    /// The request field holding the email subject
    #[arg(long = "subject-field", env = "SUBJECT_FIELD", default_value = "subject")]
    pub subject: String,

    /// The request field holding the email text
    #[arg(long = "body-field", env = "BODY_FIELD", default_value = "body")]
    pub body: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            subject: "subject".to_string(),
            body: "body".to_string(),
        }
    }
}

/// Field name to value mapping of a single request.
///
/// Lives for one request/response cycle and is consumed by the mail service.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailRequest {
    fields: HashMap<String, String>,
}

impl EmailRequest {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any earlier value with the same name
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Returns the raw value of a field
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Returns the value of a field only if it is present and non-empty
    pub fn truthy(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }

    /// True if at least one of the subject or body fields carries a value
    pub fn has_content(&self, names: &FieldNames) -> bool {
        self.truthy(&names.subject).is_some() || self.truthy(&names.body).is_some()
    }

    /// Number of extracted fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when nothing was extracted
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EmailRequest
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
