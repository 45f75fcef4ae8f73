use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use shortly_resolver::ResolveError;
use shortly_shortener::ShortenError;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Errors a handler surfaces to the client as a JSON body.
#[derive(Debug)]
pub enum AppError {
    /// Malformed input (invalid URL, bad body).
    Validation(String),
    /// Two distinct URLs truncated to the same short code.
    Collision(String),
    /// The record store faulted.
    Store(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::Collision(message) => (StatusCode::CONFLICT, message),
            AppError::Store(message) => {
                error!(error = %message, "store fault");
                // Store internals stay out of client responses.
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ShortenError> for AppError {
    fn from(value: ShortenError) -> Self {
        match value {
            ShortenError::InvalidUrl(message) => Self::Validation(message),
            ShortenError::CodeCollision(code) => Self::Collision(format!(
                "short code '{code}' is already assigned to a different url"
            )),
            ShortenError::Store(e) => Self::Store(e.to_string()),
        }
    }
}

impl From<ResolveError> for AppError {
    fn from(value: ResolveError) -> Self {
        match value {
            ResolveError::Store(e) => Self::Store(e.to_string()),
        }
    }
}
