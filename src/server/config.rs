//! Environment-based server configuration.

use crate::server::error::config::ConfigError;

static DEFAULT_DATABASE_URL: &str = "sqlite://app.db?mode=rwc";
static DEFAULT_HOST: &str = "127.0.0.1";
static DEFAULT_PORT: u16 = 5555;

pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads configuration from the process environment
    ///
    /// Every variable is optional:
    /// - `DATABASE_URL` - defaults to a SQLite database file `app.db` in the working directory
    /// - `HOST` - defaults to `127.0.0.1`
    /// - `PORT` - defaults to `5555`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds configuration using `lookup` to resolve each environment variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        if database_url.trim().is_empty() {
            return Err(ConfigError::InvalidEnvValue {
                var: "DATABASE_URL".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    /// Address the HTTP listener binds to, as `host:port`
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
