use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;
use tracing::error;

/// Error taxonomy for the whole API surface. Every handler failure maps onto
/// exactly one of these, which in turn maps onto one status code.
#[derive(Debug, Display)]
pub enum ApiError {
    /// Missing or malformed required field.
    #[display(fmt = "{}", _0)]
    Validation(String),

    /// Unknown record identifier on update/delete/fetch.
    #[display(fmt = "{} not found", _0)]
    NotFound(&'static str),

    /// Email already registered.
    #[display(fmt = "{}", _0)]
    Duplicate(String),

    /// Bad credentials.
    #[display(fmt = "{}", _0)]
    Auth(String),

    /// Missing or invalid bearer token.
    #[display(fmt = "{}", _0)]
    Forbidden(String),

    /// Underlying persistence failure.
    #[display(fmt = "Internal server error")]
    Store(sqlx::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Duplicate(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Store(e) = self {
            error!(error = %e, "Store error surfaced to client");
        }
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.to_string()
        }))
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_unique_violation() {
                return ApiError::Duplicate("Email already in use".to_string());
            }
        }
        ApiError::Store(e)
    }
}
