use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Field name -> rule name -> message.
pub type FieldErrors = BTreeMap<String, BTreeMap<String, String>>;

/// Rule key used for locally raised field errors.
pub const REASON_KEY: &str = "reason";

/// Field-scoped validation failure, raised locally or decoded from a Sirius 400 response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    #[serde(default)]
    pub detail: String,
    #[serde(
        rename = "validation_errors",
        default,
        deserialize_with = "deserialize_field_errors"
    )]
    pub field: FieldErrors,
}

impl ValidationError {
    pub fn any(&self) -> bool {
        !self.detail.is_empty() || !self.field.is_empty()
    }

    /// Record a message under the field's `reason` rule, replacing any earlier one.
    pub fn insert(&mut self, field: &str, message: &str) {
        let mut rules = BTreeMap::new();
        rules.insert(REASON_KEY.to_string(), message.to_string());
        self.field.insert(field.to_string(), rules);
    }

    pub fn reason(&self, field: &str) -> Option<&str> {
        self.field
            .get(field)
            .and_then(|rules| rules.get(REASON_KEY))
            .map(String::as_str)
    }

    pub fn merge(&mut self, other: ValidationError) {
        if self.detail.is_empty() {
            self.detail = other.detail;
        }
        self.field.extend(other.field);
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.detail.is_empty() {
            write!(f, "validation error")
        } else {
            write!(f, "{}", self.detail)
        }
    }
}

impl std::error::Error for ValidationError {}

// Sirius reports either `{"field": {"rule": "message"}}` or `{"field": ["message", ...]}`.
fn deserialize_field_errors<'de, D>(deserializer: D) -> Result<FieldErrors, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    let raw = Option::<BTreeMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
    let mut errors = FieldErrors::new();

    for (field, value) in raw {
        let invalid = || D::Error::custom(format!("could not parse validation_errors for '{field}'"));
        let rules = match value {
            Value::Array(items) => {
                let mut joined = String::new();
                for item in items {
                    joined.push_str(item.as_str().ok_or_else(invalid)?);
                }
                BTreeMap::from([(String::new(), joined)])
            }
            Value::Object(map) => {
                let mut rules = BTreeMap::new();
                for (rule, message) in map {
                    let message = message.as_str().ok_or_else(invalid)?.to_string();
                    rules.insert(rule, message);
                }
                rules
            }
            _ => return Err(invalid()),
        };
        errors.insert(field, rules);
    }

    Ok(errors)
}

/// Unexpected HTTP status returned by Sirius.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusError {
    pub code: u16,
    pub method: String,
    pub url: String,
    pub correlation_id: Option<String>,
}

impl StatusError {
    pub fn is_unauthorized(&self) -> bool {
        self.code == 401
    }

    pub fn is_not_found(&self) -> bool {
        self.code == 404
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} returned {}", self.method, self.url, self.code)
    }
}

impl std::error::Error for StatusError {}

/// Error raised by calls to the Sirius case API.
#[derive(Debug, thiserror::Error)]
pub enum SiriusError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Status(#[from] StatusError),
    #[error("sirius request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("could not decode sirius response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("sirius base url '{0}' cannot carry a path")]
    InvalidBaseUrl(String),
}
