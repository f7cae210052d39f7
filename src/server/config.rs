//! Environment based configuration.

use crate::server::error::config::ConfigError;

/// Database used when `DATABASE_URL` is not set.
pub static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holocron.db?mode=rwc";
/// Address the server binds to when `HOST` is not set.
pub static DEFAULT_HOST: &str = "0.0.0.0";
/// Port the server listens on when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Connection string for the catalog database (SQLite or PostgreSQL).
    pub database_url: String,
    /// Address to bind the HTTP listener to.
    pub host: String,
    /// Port to bind the HTTP listener to.
    pub port: u16,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads configuration using `lookup` to resolve each variable.
    ///
    /// Every variable is optional, unset variables fall back to their defaults.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration resolved
    /// - `Err(ConfigError::InvalidEnvValue)` - `PORT` is set but is not a valid port number
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(port) => port.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                }
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    /// The `host:port` address to listen on.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
