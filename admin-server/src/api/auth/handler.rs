//! Authentication Handlers
//!
//! Sign-in, session info and sign-out.

use std::time::Duration;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Redirect, Response},
};
use http::{HeaderValue, header::SET_COOKIE};

use crate::auth::{AdminSession, authenticate, clear_session_cookie, session_cookie};
use crate::core::AppState;
use crate::utils::AppError;

use shared::client::{LoginRequest, LoginResponse, SessionInfo};

/// Fixed delay for the credential check to keep response timing flat
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Sign-in handler
///
/// Checks the credential pair against the configured admin identity and
/// installs the session: a signed token, set as an HttpOnly cookie and
/// returned in the body for header-based clients.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(req) = body.map_err(|_| AppError::bad_request("Requête invalide"))?;

    // Flat delay before the verdict, whatever the outcome
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let Some(identity) = authenticate(&state.config, &req.email, &req.password) else {
        tracing::warn!(email = %req.email, "Sign-in failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    };

    let token = state
        .jwt()
        .issue_session(&identity)
        .map_err(|e| AppError::internal(format!("Failed to issue session: {e}")))?;

    let cookie = session_cookie(&token, state.jwt().session_max_age_secs());
    let cookie = HeaderValue::from_str(&cookie)
        .map_err(|e| AppError::internal(format!("Invalid session cookie: {e}")))?;

    tracing::info!(email = %identity.email, "Admin signed in");

    let body = LoginResponse {
        token,
        user: SessionInfo {
            email: identity.email,
            is_admin: identity.is_admin,
        },
    };

    let mut response = Json(body).into_response();
    response.headers_mut().append(SET_COOKIE, cookie);
    Ok(response)
}

/// Current session info
pub async fn me(session: AdminSession) -> Json<SessionInfo> {
    Json(SessionInfo {
        email: session.email,
        is_admin: session.is_admin,
    })
}

/// Sign-out handler
///
/// Clears the session cookie and sends the caller back to the public
/// landing page. The token itself stays valid until expiry (stateless
/// sessions have nothing to revoke server-side).
pub async fn logout() -> Result<Response, AppError> {
    let cookie = HeaderValue::from_str(&clear_session_cookie())
        .map_err(|e| AppError::internal(format!("Invalid session cookie: {e}")))?;

    let mut response = Redirect::to("/").into_response();
    response.headers_mut().append(SET_COOKIE, cookie);
    Ok(response)
}
