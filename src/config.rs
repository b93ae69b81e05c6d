use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;

/// Connection settings for the backing SQLite database. The path is a plain
/// filesystem path, or `:memory:` for an ephemeral database.
#[derive(Debug)]
pub struct DatabaseConfig {
    pub path: String,
}

impl DatabaseConfig {
    fn from_env() -> Self {
        Self {
            path: env::var("SQLITE_DATABASE").unwrap_or_else(|_| ":memory:".to_string()),
        }
    }

    /// The sqlx connection URL for the configured path.
    pub fn url(&self) -> String {
        format!("sqlite:{}", self.path)
    }

    pub fn is_memory(&self) -> bool {
        self.path == ":memory:"
    }
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub log_level: String,
    pub database: DatabaseConfig,
}

impl Config {
    fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(3000),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            database: DatabaseConfig::from_env(),
        }
    }
}

/// Process-wide settings, read once on first access. A `.env` file, if
/// present, is loaded before the environment is consulted.
pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok();
    Config::from_env()
});
