use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Failure to turn a request body into form fields.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("expected a {FORM_CONTENT_TYPE} body, got '{0}'")]
    UnsupportedContentType(String),
    #[error("form field '{0}' accepts a single value")]
    AmbiguousField(String),
}

/// Decoded `application/x-www-form-urlencoded` pairs, in submission order.
///
/// Repeated keys are kept, so multi-select checkboxes come through intact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    pub fn parse(body: &[u8]) -> Self {
        Self {
            pairs: url::form_urlencoded::parse(body).into_owned().collect(),
        }
    }

    /// Parse a request body, rejecting anything that was not posted as a form.
    pub fn from_request(headers: &HeaderMap, body: &[u8]) -> Result<Self, FormError> {
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim();

        if mime.eq_ignore_ascii_case(FORM_CONTENT_TYPE) || (mime.is_empty() && body.is_empty()) {
            Ok(Self::parse(body))
        } else {
            Err(FormError::UnsupportedContentType(content_type.to_string()))
        }
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.pairs.iter().any(|(key, _)| key == name)
    }

    /// The field's single value, or an empty string when absent.
    pub fn value(&self, name: &str) -> Result<String, FormError> {
        let mut found = self
            .pairs
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.as_str());

        let first = found.next().unwrap_or_default();
        if found.any(|other| other != first) {
            return Err(FormError::AmbiguousField(name.to_string()));
        }
        Ok(first.to_string())
    }

    /// Every non-empty value submitted under `name`.
    pub fn values(&self, name: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(key, value)| key == name && !value.is_empty())
            .map(|(_, value)| value.clone())
            .collect()
    }

    pub fn checkbox_checked(&self, name: &str, checked_value: &str) -> bool {
        self.pairs
            .iter()
            .any(|(key, value)| key == name && value == checked_value)
    }
}

impl FromIterator<(String, String)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}
