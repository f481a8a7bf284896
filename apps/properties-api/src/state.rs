//! Shared application state.

/// Cloned into every handler that needs it (the pool is an `Arc` inside).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL connection pool
    pub db: database::postgres::DatabaseConnection,
}
