//! Session extractor
//!
//! Handlers that require an admin session take [`AdminSession`] as an
//! argument; the session is re-derived from the token on every request and
//! never trusted from the UI layer.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::core::AppState;
use crate::security_log;
use crate::utils::AppError;

use super::jwt::AdminSession;
use super::session;

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Reuse a session another extractor already validated on this request
        if let Some(session) = parts.extensions.get::<AdminSession>() {
            return Ok(session.clone());
        }

        let Some(token) = session::token_from_headers(&parts.headers) else {
            security_log!("WARN", "api_auth_missing", uri = format!("{:?}", parts.uri));
            return Err(AppError::unauthorized());
        };

        // Uniform rejection: expired, malformed and non-admin tokens are all
        // answered with the same 401 body.
        let claims = match state.jwt().validate_token(token) {
            Ok(claims) => claims,
            Err(e) => {
                security_log!(
                    "WARN",
                    "api_auth_failed",
                    error = format!("{}", e),
                    uri = format!("{:?}", parts.uri)
                );
                return Err(AppError::unauthorized());
            }
        };

        if !claims.is_admin {
            security_log!(
                "WARN",
                "api_admin_required",
                email = claims.email.clone(),
                uri = format!("{:?}", parts.uri)
            );
            return Err(AppError::unauthorized());
        }

        let session = AdminSession::from(claims);
        parts.extensions.insert(session.clone());
        Ok(session)
    }
}
