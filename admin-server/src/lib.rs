//! DigiShop Admin Server - backend of the e-commerce administration console
//!
//! # Architecture
//!
//! - **Authentication** (`auth`): credential check against the configured
//!   admin identity, stateless JWT sessions, page guard over `/admin`
//! - **Order store** (`store`): embedded redb storage, sole authority for
//!   order records
//! - **HTTP API** (`api`): sign-in/sign-out, order listing, status updates
//! - **Pages** (`pages`): static console shells served behind the guard
//!
//! # Module structure
//!
//! ```text
//! admin-server/src/
//! ├── core/          # configuration, state, server
//! ├── auth/          # credential check, JWT, guard
//! ├── api/           # HTTP routes and handlers
//! ├── pages/         # console page shells
//! ├── store/         # order store (redb)
//! └── utils/         # errors, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod pages;
pub mod store;
pub mod utils;

// Re-export public types
pub use auth::{AdminIdentity, AdminSession, JwtService, authenticate};
pub use core::{AppState, Config, Server, build_app};
pub use store::OrderStore;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - structured WARN events on the auth paths
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env` and initialize logging
///
/// Called once at startup, before configuration is read.
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_dir = std::env::var("WORK_DIR")
        .map(|dir| format!("{dir}/logs"))
        .ok();
    init_logger_with_file(Some(&level), log_dir.as_deref());

    Ok(())
}
