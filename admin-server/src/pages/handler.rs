//! Page Handlers

use axum::{extract::State, response::Html};

use crate::core::AppState;

const DASHBOARD_HTML: &str = include_str!("../../static/dashboard.html");
const SIGN_IN_HTML: &str = include_str!("../../static/sign-in.html");
const LANDING_HTML: &str = include_str!("../../static/landing.html");

/// Marker replaced with the serialized order list at render time
const ORDERS_PLACEHOLDER: &str = "/*__INITIAL_ORDERS__*/[]";

/// Dashboard shell
///
/// Embeds the current order list so the console paints without a fetch. A
/// failing store read degrades to an empty list instead of failing the
/// whole page; the console re-fetches and surfaces the error itself.
pub async fn dashboard(State(state): State<AppState>) -> Html<String> {
    let orders = state.store.read_all().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Order store read failed, rendering empty dashboard");
        Vec::new()
    });

    let initial = serde_json::to_string(&orders).unwrap_or_else(|_| "[]".to_string());
    Html(DASHBOARD_HTML.replace(ORDERS_PLACEHOLDER, &initial))
}

/// Sign-in page (public)
pub async fn sign_in() -> Html<&'static str> {
    Html(SIGN_IN_HTML)
}

/// Public landing page, the sign-out redirect target
pub async fn landing() -> Html<&'static str> {
    Html(LANDING_HTML)
}
