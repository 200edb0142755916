use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use trackside_core::error::CoreError;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: trackside_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Cancelled when graceful shutdown begins.
    pub shutdown: CancellationToken,
}

impl AppState {
    /// Short-circuit requests observed after shutdown has begun.
    ///
    /// Called at the top of every handler, before validation or storage work.
    pub fn ensure_accepting(&self) -> Result<(), CoreError> {
        if self.shutdown.is_cancelled() {
            return Err(CoreError::Cancelled);
        }
        Ok(())
    }
}
