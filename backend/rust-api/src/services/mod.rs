use crate::config::Config;
use std::sync::Arc;

use self::{sqlite_store::SqliteStore, store::TriviaStore};

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn TriviaStore>,
}

impl AppState {
    /// Connects to the configured database, applies migrations and seeds the
    /// stock data when enabled.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        tracing::info!("Connecting to database at {}", config.database_url);

        let store = SqliteStore::connect(&config.database_url, config.max_connections).await?;
        store.migrate().await?;
        tracing::info!("Database migrations applied");

        if config.seed_database && seed::seed_if_empty(store.pool()).await? {
            tracing::info!("Stock trivia data loaded");
        }

        Ok(Self::with_store(config, Arc::new(store)))
    }

    pub fn with_store(config: Config, store: Arc<dyn TriviaStore>) -> Self {
        Self { config, store }
    }
}

pub mod question_service;
pub mod quiz_service;
pub mod seed;
pub mod sqlite_store;
pub mod store;
