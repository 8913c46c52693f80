use crate::error::ConfigError;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

pub const SECRET_ENV_VAR: &str = "MY_SECRET_TOKEN";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct ServerConfig {
    /// Lookup table mapping creature name to `[id, type1, type2]`
    #[arg(long, default_value = "pokedex.json")]
    pub dex: PathBuf,

    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    /// When the lookup table is read from disk
    #[arg(long, value_enum, default_value_t = ReloadPolicy::PerRequest)]
    pub reload: ReloadPolicy,

    #[arg(long, default_value_t = 10)]
    pub request_timeout_secs: u64,

    #[arg(long, default_value_t = 64 * 1024)]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dex: PathBuf::from("pokedex.json"),
            port: 8080,
            reload: ReloadPolicy::PerRequest,
            request_timeout_secs: 10,
            max_body_bytes: 64 * 1024,
        }
    }
}

impl ServerConfig {
    pub fn limits(&self) -> HttpLimits {
        HttpLimits {
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_body_bytes: self.max_body_bytes,
        }
    }
}

/// Trades latency for always serving the file as it is on disk.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReloadPolicy {
    /// Re-read the table for every guess
    #[default]
    PerRequest,
    /// Read the table once before binding
    Startup,
}

#[derive(Debug, Clone, Copy)]
pub struct HttpLimits {
    pub request_timeout: Duration,
    pub max_body_bytes: usize,
}

impl Default for HttpLimits {
    fn default() -> Self {
        ServerConfig::default().limits()
    }
}

/// Kept off the command line so it never shows up in process listings.
pub fn secret_from_env() -> Result<String, ConfigError> {
    resolve_secret(std::env::var(SECRET_ENV_VAR).ok())
}

pub fn resolve_secret(raw: Option<String>) -> Result<String, ConfigError> {
    match raw {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ConfigError::MissingSecret),
    }
}
