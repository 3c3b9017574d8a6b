use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The pool and configuration are constructed once in `main` and injected;
/// nothing in the application reads process-wide mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: clinica_db::DbPool,
    /// Server configuration (CORS origins, JWT settings, timeouts).
    pub config: Arc<ServerConfig>,
}
