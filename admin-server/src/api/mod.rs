//! API route modules
//!
//! # Structure
//!
//! - [`auth`] - sign-in, session info, sign-out
//! - [`orders`] - order listing and status updates
//! - [`health`] - liveness probe

pub mod auth;
pub mod health;
pub mod orders;
