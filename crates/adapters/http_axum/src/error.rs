//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use thermohub_domain::error::{ThermostatError, ValidationError};

/// Maps domain and request-decoding failures to plain-text HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// A failure reported by the application layer.
    Domain(ThermostatError),
    /// The request body is not valid JSON.
    InvalidJson,
    /// A path segment does not have the shape the route requires.
    UnmatchedRoute,
}

impl From<ThermostatError> for ApiError {
    fn from(err: ThermostatError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Domain(err.into())
    }
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Domain(ThermostatError::NotFound(_)) | Self::UnmatchedRoute => {
                (StatusCode::NOT_FOUND, "not found".to_owned())
            }
            Self::Domain(ThermostatError::Validation(err)) => match err {
                ValidationError::UnknownField(name) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    format!("invalid field {name}"),
                ),
                ValidationError::TypeMismatch(field) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    format!("invalid type for field {field}"),
                ),
                ValidationError::InvalidValue { field, .. } => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    format!("invalid value for field {field}"),
                ),
                ValidationError::MalformedInput => {
                    (StatusCode::BAD_REQUEST, "invalid JSON".to_owned())
                }
            },
            Self::InvalidJson => (StatusCode::BAD_REQUEST, "invalid JSON".to_owned()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        tracing::debug!(status = status.as_u16(), body = %message, "request rejected");
        (status, message).into_response()
    }
}
