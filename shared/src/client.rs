//! Request/response types of the admin API
//!
//! Shared between the server and any console client driving it.

use serde::{Deserialize, Serialize};

use crate::models::order::{Order, OrderStatus};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Sign-in request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Authenticated identity as exposed to the console
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub email: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

/// Sign-in response
///
/// The token is also set as an HttpOnly cookie; it is returned in the body
/// for clients that prefer an `Authorization: Bearer` header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionInfo,
}

// =============================================================================
// Orders API DTOs
// =============================================================================

/// Response of `GET /api/orders`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
}

/// Response of `PATCH /api/orders/{order_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub order: Order,
}

/// Body of `PATCH /api/orders/{order_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

/// Error body returned by every failing API route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
