use std::env;

use crate::cli::Cli;

/// Application configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    /// Database connection URL
    /// Format: sqlite://PATH or sqlite::memory:
    pub database_url: String,

    /// Address the HTTP server binds to
    pub host: String,

    /// Port the HTTP server listens on
    pub port: u16,

    /// Maximum number of pooled database connections
    pub max_db_connections: u32,

    /// Maximum form payload size (in bytes)
    /// Default: 256KB
    pub max_payload_size: usize,

    /// Directory for rolling log files
    pub log_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: "sqlite://tiger_temp.db".to_string(),
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_db_connections: 5,
            max_payload_size: 256 * 1024,
            log_dir: "logs".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// All variables are optional:
    /// - DATABASE_URL: SQLite connection string (default: sqlite://tiger_temp.db)
    /// - HOST: bind address (default: 127.0.0.1)
    /// - PORT: listening port (default: 3000)
    /// - MAX_DB_CONNECTIONS: pool size (default: 5)
    /// - MAX_PAYLOAD_SIZE: maximum form body size in bytes (default: 262144)
    /// - LOG_DIR: log directory (default: logs)
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Config {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(lookup("PORT"), defaults.port),
            max_db_connections: parse_or(lookup("MAX_DB_CONNECTIONS"), defaults.max_db_connections),
            max_payload_size: parse_or(lookup("MAX_PAYLOAD_SIZE"), defaults.max_payload_size),
            log_dir: lookup("LOG_DIR").unwrap_or(defaults.log_dir),
        }
    }

    /// Apply command-line overrides on top of the environment
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(url) = &cli.database_url {
            self.database_url = url.clone();
        }
        if let Some(host) = &cli.host {
            self.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        self
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|s| s.parse().ok()).unwrap_or(default)
}
