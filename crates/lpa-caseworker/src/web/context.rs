use axum::http::header::COOKIE;
use axum::http::HeaderMap;

use super::form::FormFields;
use crate::sirius::Context;

pub const XSRF_COOKIE: &str = "XSRF-TOKEN";
pub const XSRF_FIELD: &str = "xsrfToken";

/// All cookies sent with the request, joined the way a single `Cookie` header carries them.
pub fn cookie_header(headers: &HeaderMap) -> Option<String> {
    let joined = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join("; ");

    (!joined.is_empty()).then_some(joined)
}

pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
}

/// Builds the caller context for outbound Sirius calls.
///
/// Reads take the XSRF token from the session cookie; form posts carry it in the body.
pub fn sirius_context(headers: &HeaderMap, form: Option<&FormFields>) -> Context {
    let xsrf_token = match form {
        Some(fields) => fields.value(XSRF_FIELD).unwrap_or_default(),
        None => cookie_value(headers, XSRF_COOKIE)
            .map(|raw| unescape(&raw))
            .unwrap_or_default(),
    };

    Context {
        cookie_header: cookie_header(headers),
        xsrf_token,
    }
}

fn unescape(raw: &str) -> String {
    let escaped = raw.replace('&', "%26").replace('=', "%3D");
    url::form_urlencoded::parse(escaped.as_bytes())
        .next()
        .map(|(key, _)| key.into_owned())
        .unwrap_or_default()
}
