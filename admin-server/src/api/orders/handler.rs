//! Orders API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::auth::AdminSession;
use crate::core::AppState;
use crate::utils::AppError;

use shared::client::{OrderResponse, OrdersResponse};
use shared::models::order::OrderStatus;

/// List all orders
///
/// Returns the full store snapshot in stored order; the console filters
/// client-side.
pub async fn list(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<OrdersResponse>, AppError> {
    let orders = state.store.read_all()?;
    Ok(Json(OrdersResponse { orders }))
}

/// Update the status of one order
///
/// Validation runs in a fixed sequence so the caller always gets the most
/// specific error: admin session, parseable body, `status` present, known
/// status value - all before the store is consulted. An unknown status is
/// therefore rejected even when the order does not exist.
pub async fn update_status(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<OrderResponse>, AppError> {
    let Json(body) = body.map_err(|_| AppError::bad_request("Requête invalide"))?;

    let status = match body.get("status") {
        None | Some(serde_json::Value::Null) => {
            return Err(AppError::bad_request("Statut requis"));
        }
        Some(value) => value,
    };

    let status: OrderStatus = serde_json::from_value(status.clone())
        .map_err(|_| AppError::bad_request("Statut inconnu"))?;

    let order = state
        .store
        .update_status(&order_id, status)?
        .ok_or_else(|| AppError::not_found("Commande introuvable"))?;

    tracing::info!(order_id = %order.id, status = %order.status, "Order status updated");

    Ok(Json(OrderResponse { order }))
}
