//! Authentication Routes

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::AppState;

/// Build authentication router
/// - /api/auth/login: public (credential check is the gate)
/// - /api/auth/me: requires a session
/// - /api/auth/logout: public (clearing a cookie needs no proof)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(handler::login))
        .route("/api/auth/me", get(handler::me))
        .route("/api/auth/logout", post(handler::logout))
}
