//! Admin console pages
//!
//! Presentational shells only: the dashboard and sign-in markup carry no
//! business logic, they exist so the page guard has something real to
//! protect. The dashboard talks to `/api/orders` for everything it shows.

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_admin_page;
use crate::core::AppState;

/// Pages router
///
/// The guard layer covers everything under `/admin` - the wildcard route
/// keeps unknown sub-paths behind it too; the middleware itself lets
/// `/admin/sign-in` through. The landing page is registered after the
/// layer and stays public.
pub fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/admin", get(handler::dashboard))
        .route("/admin/sign-in", get(handler::sign_in))
        // The console is a single shell; every other admin path renders it
        .route("/admin/{*path}", get(handler::dashboard))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin_page,
        ))
        .route("/", get(handler::landing))
}
