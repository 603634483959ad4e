//! Unified error handling
//!
//! Application error type and its HTTP rendering:
//! - [`AppError`] - application error enum
//! - [`ErrorBody`] - the `{"error": ...}` JSON body every failing route returns
//!
//! # Taxonomy
//!
//! | Variant | HTTP | Client message |
//! |---------|------|----------------|
//! | Unauthorized | 401 | Non autorisé |
//! | InvalidCredentials | 401 | Email ou mot de passe invalide |
//! | BadRequest | 400 | as constructed |
//! | NotFound | 404 | as constructed |
//! | Database / Internal | 500 | Erreur interne du serveur |
//!
//! 5xx details are logged server-side and never leak into the body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::store::StoreError;

/// Error body of every failing API route
///
/// ```json
/// { "error": "Non autorisé" }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Authentication errors (401) ==========
    #[error("Authentication required")]
    /// Missing, invalid, expired or non-admin session
    Unauthorized,

    #[error("Invalid credentials")]
    /// Sign-in with a wrong email/password pair
    InvalidCredentials,

    // ========== Request errors (4xx) ==========
    #[error("Bad request: {0}")]
    /// Malformed payload, missing or unknown status value (400)
    BadRequest(String),

    #[error("Resource not found: {0}")]
    /// Unknown order identifier (404)
    NotFound(String),

    // ========== System errors (5xx) ==========
    #[error("Database error: {0}")]
    /// Store failure (500)
    Database(String),

    #[error("Internal server error: {0}")]
    /// Anything else unexpected (500)
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Non autorisé".to_string()),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Email ou mot de passe invalide".to_string(),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erreur interne du serveur".to_string(),
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erreur interne du serveur".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Database(e.to_string())
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    /// Uniform sign-in failure, same message for unknown email and wrong
    /// password to prevent account enumeration
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Application result alias
pub type AppResult<T> = Result<T, AppError>;
