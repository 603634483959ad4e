//! Route guard
//!
//! Axum middleware protecting the `/admin` page prefix.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::core::AppState;
use crate::security_log;

use super::session;

/// The sign-in page, only path under the prefix left unguarded
pub const SIGN_IN_PATH: &str = "/admin/sign-in";

/// Page guard - requires a valid admin session
///
/// Verifies the session token (cookie or bearer) on every request under the
/// `/admin` prefix, except the sign-in page itself. Verification is purely a
/// function of the token and the shared secret; no per-request state is kept.
///
/// Every failure mode - absent token, expired token, bad signature, valid
/// token without the admin flag - yields the same redirect to the sign-in
/// page, so a caller learns nothing about why it was turned away.
pub async fn require_admin_page(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();

    // The sign-in page must stay reachable without a session
    if path.starts_with(SIGN_IN_PATH) {
        return next.run(req).await;
    }

    let is_admin = session::token_from_headers(req.headers())
        .and_then(|token| state.jwt().validate_token(token).ok())
        .map(|claims| claims.is_admin)
        .unwrap_or(false);

    if is_admin {
        next.run(req).await
    } else {
        security_log!("WARN", "page_guard_redirect", uri = format!("{:?}", req.uri()));
        Redirect::to(SIGN_IN_PATH).into_response()
    }
}
