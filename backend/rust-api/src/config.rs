use serde::Deserialize;
use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite://trivia.db?mode=rwc";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    /// Load the stock categories and questions into an empty database on startup
    pub seed_database: bool,
    pub listen_addr: String,
    /// Shift quiz category ids by one before filtering (compatibility with the
    /// stock frontend, which sends zero-based category indexes)
    pub legacy_category_offset: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            seed_database: true,
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            legacy_category_offset: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        // Local .env is optional; real deployments inject the environment directly
        dotenvy::dotenv().ok();

        // Determine environment (defaults to dev)
        let env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // Build configuration from config/*.toml + ENV overrides
        let settings = config::Config::builder()
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            // Override with environment variables (prefix: APP_)
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Self::from_settings(&settings)
    }

    fn from_settings(settings: &config::Config) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        let database_url = settings
            .get_string("database.url")
            .or_else(|_| env::var("DATABASE_URL"))
            .unwrap_or(defaults.database_url);

        let max_connections = match settings.get_int("database.max_connections") {
            Ok(value) => u32::try_from(value)
                .ok()
                .filter(|connections| *connections > 0)
                .ok_or_else(|| {
                    config::ConfigError::Message(format!(
                        "database.max_connections must be a positive integer, got {}",
                        value
                    ))
                })?,
            Err(config::ConfigError::NotFound(_)) => defaults.max_connections,
            Err(e) => return Err(e),
        };

        let seed_database =
            optional_bool(settings, "database.seed")?.unwrap_or(defaults.seed_database);

        let listen_addr = settings
            .get_string("server.listen_addr")
            .or_else(|_| env::var("LISTEN_ADDR"))
            .unwrap_or(defaults.listen_addr);

        let legacy_category_offset = optional_bool(settings, "quiz.legacy_category_offset")?
            .unwrap_or(defaults.legacy_category_offset);

        if legacy_category_offset {
            tracing::warn!("Quiz category ids are shifted by one (legacy compatibility mode)");
        }

        Ok(Config {
            database_url,
            max_connections,
            seed_database,
            listen_addr,
            legacy_category_offset,
        })
    }
}

fn optional_bool(
    settings: &config::Config,
    key: &str,
) -> Result<Option<bool>, config::ConfigError> {
    match settings.get_bool(key) {
        Ok(value) => Ok(Some(value)),
        Err(config::ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
