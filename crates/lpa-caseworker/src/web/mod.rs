//! Request plumbing shared by every caseworker page: form bodies, session cookies, flash
//! notifications and template rendering.

pub mod context;
pub mod flash;
pub mod form;
pub mod render;

pub use context::{cookie_header, cookie_value, sirius_context, XSRF_COOKIE, XSRF_FIELD};
pub use flash::{flash_cookie, take_flash, FlashNotification, FLASH_COOKIE};
pub use form::{FormError, FormFields, FORM_CONTENT_TYPE};
pub use render::{JsonRenderer, Page, Template, TemplateError, TemplateRenderer};

use crate::config::AppConfig;

/// Deployment details the HTTP layer needs when building responses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebSettings {
    /// Prepended to every redirect, e.g. `/lpa-frontend`.
    pub prefix: String,
    pub secure_cookies: bool,
}

impl From<&AppConfig> for WebSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            prefix: config.server.prefix.clone(),
            secure_cookies: config.cookies.secure,
        }
    }
}
