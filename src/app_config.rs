// Centralized configuration management for the job tracker backend.
// All environment variables are loaded ONCE at startup into a static CONFIG.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Global application configuration loaded once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    // For tests, load .env file first
    #[cfg(test)]
    dotenv::dotenv().ok();

    AppConfig::from_env().expect("Failed to load configuration")
});

/// Accessor used across the crate so call sites read `config()` rather
/// than touching the Lazy directly.
pub fn config() -> &'static AppConfig {
    &CONFIG
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    // Server
    pub bind_address: String,
    pub port: u16,
    pub environment: Environment,
    pub rust_log: String,

    // Database
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_min_connections: u32,
    pub database_connect_timeout: u64,
    pub database_idle_timeout: u64,
    pub database_max_lifetime: u64,

    // Sessions (issued by the external auth service, looked up here)
    pub session_cookie_name: String,

    // Security
    pub cors_allowed_origins: Vec<String>,

    // Features
    pub disable_embedded_migrations: bool,
}

/// Environment type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl From<String> for Environment {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_address: get_env_or("BIND_ADDRESS", "0.0.0.0"),
            port: parse_env_or("PORT", 8080)?,
            environment: Environment::from(get_env_or("ENVIRONMENT", "development")),
            rust_log: get_env_or("RUST_LOG", "jobtrack_backend_core=debug,tower_http=info"),

            database_url: database_url_from_env()?,
            database_max_connections: parse_env_or("DATABASE_MAX_CONNECTIONS", 10)?,
            database_min_connections: parse_env_or("DATABASE_MIN_CONNECTIONS", 1)?,
            database_connect_timeout: parse_env_or("DATABASE_CONNECT_TIMEOUT", 30)?,
            database_idle_timeout: parse_env_or("DATABASE_IDLE_TIMEOUT", 600)?,
            database_max_lifetime: parse_env_or("DATABASE_MAX_LIFETIME", 1800)?,

            session_cookie_name: get_env_or("SESSION_COOKIE_NAME", "better-auth.session_token"),

            cors_allowed_origins: get_env_or("CORS_ALLOWED_ORIGINS", "*")
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),

            disable_embedded_migrations: get_env_or("DISABLE_EMBEDDED_MIGRATIONS", "false")
                .parse()
                .unwrap_or(false),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

/// Resolve the database URL. `DATABASE_URL` wins; otherwise the URL is
/// composed from the discrete `POSTGRES_*` connection parameters the
/// deployment supplies.
fn database_url_from_env() -> Result<String, ConfigError> {
    if let Ok(url) = env::var("DATABASE_URL") {
        if !url.is_empty() {
            return Ok(url);
        }
    }

    let db = env::var("POSTGRES_DB")
        .map_err(|_| ConfigError::MissingVar("DATABASE_URL or POSTGRES_DB".to_string()))?;
    let host = get_env_or("POSTGRES_HOST", "localhost");
    let port = get_env_or("POSTGRES_PORT", "5432");
    let user = get_env_or("POSTGRES_USER", "postgres");
    let password = env::var("POSTGRES_PASSWORD").unwrap_or_default();

    if password.is_empty() {
        Ok(format!("postgres://{}@{}:{}/{}", user, host, port, db))
    } else {
        Ok(format!(
            "postgres://{}:{}@{}:{}/{}",
            user, password, host, port, db
        ))
    }
}

fn get_env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(val) => val
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string(), val)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parses_aliases() {
        assert_eq!(Environment::from("prod".to_string()), Environment::Production);
        assert_eq!(Environment::from("dev".to_string()), Environment::Development);
        assert_eq!(Environment::from("garbage".to_string()), Environment::Development);
    }
}
