//! Orders API Module
//!
//! Listing and status updates. Every handler re-derives the admin session
//! from the token; nothing is trusted from the UI layer.

mod handler;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::core::AppState;

/// Orders router
pub fn router() -> Router<AppState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{order_id}", patch(handler::update_status))
}
