use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable (the pool is an `Arc` internally, the config is behind
/// one here).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: eventsphere_db::DbPool,
    /// Server configuration (JWT secret/expiry, CORS, timeouts).
    pub config: Arc<ServerConfig>,
}
