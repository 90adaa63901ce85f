//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    /// Directory holding the persisted session, one file per key.
    pub session_dir: PathBuf,
    pub auth_latency: Duration,
    pub reading_latency: Duration,
    pub seed_demo_account: bool,
    /// Fixed seed for the reading generator. OS entropy when unset.
    pub rng_seed: Option<u64>,
    pub cors_origin: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address = parse_or(&lookup, "BIND_ADDRESS", "0.0.0.0:3000".parse::<SocketAddr>())?;

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let session_dir = lookup("SESSION_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./.astrology"));

        // --- Simulated latency ---
        let auth_latency = Duration::from_millis(parse_or(&lookup, "AUTH_LATENCY_MS", Ok(1000))?);
        let reading_latency =
            Duration::from_millis(parse_or(&lookup, "READING_LATENCY_MS", Ok(2000))?);

        let seed_demo_account = parse_or(&lookup, "SEED_DEMO_ACCOUNT", Ok(true))?;

        let rng_seed = match lookup("RNG_SEED") {
            Some(raw) => Some(raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidValue("RNG_SEED".to_string(), e.to_string())
            })?),
            None => None,
        };

        let cors_origin =
            lookup("CORS_ORIGIN").unwrap_or_else(|| "http://localhost:8080".to_string());

        Ok(Self {
            bind_address,
            log_level,
            session_dir,
            auth_latency,
            reading_latency,
            seed_demo_account,
            rng_seed,
            cors_origin,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: Result<T, T::Err>) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let parsed = match lookup(key) {
        Some(raw) => raw.trim().parse::<T>(),
        None => default,
    };
    parsed.map_err(|e| ConfigError::InvalidValue(key.to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_address.port(), 3000);
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.auth_latency, Duration::from_millis(1000));
        assert_eq!(config.reading_latency, Duration::from_millis(2000));
        assert!(config.seed_demo_account);
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn values_are_read_from_the_source() {
        let config = load(&[
            ("BIND_ADDRESS", "127.0.0.1:8081"),
            ("RUST_LOG", "debug"),
            ("SESSION_DIR", "/tmp/astro"),
            ("AUTH_LATENCY_MS", "0"),
            ("READING_LATENCY_MS", "5"),
            ("SEED_DEMO_ACCOUNT", "false"),
            ("RNG_SEED", "17"),
        ])
        .unwrap();
        assert_eq!(config.bind_address.port(), 8081);
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.session_dir, PathBuf::from("/tmp/astro"));
        assert_eq!(config.auth_latency, Duration::ZERO);
        assert_eq!(config.reading_latency, Duration::from_millis(5));
        assert!(!config.seed_demo_account);
        assert_eq!(config.rng_seed, Some(17));
    }

    #[test]
    fn bad_values_name_the_variable() {
        let err = load(&[("READING_LATENCY_MS", "soon")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key, _) if key == "READING_LATENCY_MS"));

        let err = load(&[("RUST_LOG", "loud")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key, _) if key == "RUST_LOG"));
    }
}
