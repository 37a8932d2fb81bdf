use std::sync::Arc;

use catalog_db::catalog::CatalogService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: catalog_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Product catalog bound to the configured lifecycle policy.
    pub catalog: CatalogService,
}

impl AppState {
    /// Build state from a pool, wiring the catalog to the configured policy.
    pub fn new(pool: catalog_db::DbPool, config: ServerConfig) -> Self {
        let catalog = CatalogService::new(pool.clone(), config.catalog_policy);
        Self {
            pool,
            config: Arc::new(config),
            catalog,
        }
    }
}
