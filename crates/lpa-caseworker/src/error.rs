use crate::config::ConfigError;
use crate::sirius::SiriusError;
use crate::telemetry::TelemetryError;
use crate::web::{FormError, TemplateError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;
use tracing::{error, warn};

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Sirius(SiriusError),
    Template(TemplateError),
    Form(FormError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Sirius(SiriusError::Status(status)) if status.is_unauthorized() => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Sirius(SiriusError::Status(status)) if status.is_not_found() => {
                StatusCode::NOT_FOUND
            }
            AppError::Form(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Sirius(_)
            | AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Sirius(err) => write!(f, "sirius error: {}", err),
            AppError::Template(err) => write!(f, "template error: {}", err),
            AppError::Form(err) => write!(f, "form error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Sirius(err) => Some(err),
            AppError::Template(err) => Some(err),
            AppError::Form(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(error = %self, %status, "request rejected");
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<SiriusError> for AppError {
    fn from(value: SiriusError) -> Self {
        Self::Sirius(value)
    }
}

impl From<TemplateError> for AppError {
    fn from(value: TemplateError) -> Self {
        Self::Template(value)
    }
}

impl From<FormError> for AppError {
    fn from(value: FormError) -> Self {
        Self::Form(value)
    }
}
