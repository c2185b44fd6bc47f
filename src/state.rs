use crate::config::Config;
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
    /// Serializes every read-check-write sequence against the sheet. Without
    /// it two submissions could both pass the clash check and both persist.
    pub sheet_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        Self { pool, config, sheet_lock: Arc::new(Mutex::new(())) }
    }
}
