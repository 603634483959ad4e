//! Application state

use std::sync::Arc;

use crate::auth::JwtService;
use crate::core::Config;
use crate::store::{OrderStore, seed};
use crate::utils::{AppError, AppResult};

/// Application state - shared handles for every request
///
/// Cloning is cheap: the store and the JWT service are behind `Arc`.
///
/// | Field | Purpose |
/// |-------|---------|
/// | config | immutable configuration |
/// | store | order store (sole authority for order records) |
/// | jwt | session token signing/verification |
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Config,
    /// Order store
    pub store: OrderStore,
    /// JWT session service
    jwt: Arc<JwtService>,
}

impl AppState {
    /// Initialize the application state
    ///
    /// Creates the working directory, opens the order store at
    /// `<work_dir>/database/orders.redb` and seeds it with demo data on
    /// first run.
    pub fn initialize(config: &Config) -> AppResult<Self> {
        let database_dir = std::path::Path::new(&config.work_dir).join("database");
        std::fs::create_dir_all(&database_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work dir: {e}")))?;

        let store = OrderStore::open(database_dir.join("orders.redb"))?;
        seed::seed_if_empty(&store)?;

        let jwt = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self {
            config: config.clone(),
            store,
            jwt,
        })
    }

    /// Build a state around an existing store, bypassing seeding
    pub fn with_store(config: Config, store: OrderStore) -> Self {
        let jwt = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self { config, store, jwt }
    }

    /// The JWT session service
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }
}
