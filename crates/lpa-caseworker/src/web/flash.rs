use axum::http::HeaderMap;
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use super::context::cookie_value;

pub const FLASH_COOKIE: &str = "flash-lpa-frontend";

/// One-time notification shown on the next page the caseworker lands on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashNotification {
    #[serde(rename = "name")]
    pub title: String,
}

impl FlashNotification {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// `Set-Cookie` value carrying the notification.
pub fn flash_cookie(notification: &FlashNotification, secure: bool) -> String {
    let payload = serde_json::json!({ "name": notification.title }).to_string();
    let mut cookie = format!(
        "{FLASH_COOKIE}={}; Path=/; HttpOnly",
        URL_SAFE.encode(payload)
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Reads the pending notification, if any, along with the `Set-Cookie` value that clears it.
pub fn take_flash(
    headers: &HeaderMap,
    secure: bool,
) -> Option<(Option<FlashNotification>, String)> {
    let raw = cookie_value(headers, FLASH_COOKIE)?;
    let notification = URL_SAFE
        .decode(raw.as_bytes())
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok());

    let mut expired = format!("{FLASH_COOKIE}=; Path=/; Max-Age=0; HttpOnly");
    if secure {
        expired.push_str("; Secure");
    }
    Some((notification, expired))
}
