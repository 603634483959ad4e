//! Shared types for the DigiShop admin backend
//!
//! Common types used across crates: the order model and the
//! request/response DTOs of the admin API.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::order::{Order, OrderItem, OrderStatus};
