//! Runtime settings for the classifier service.
//!
//! Values come from the process environment after `.env` has been applied.
//! [`AppConfig::from_lookup`] takes any key lookup so the parsing rules can be
//! exercised without touching the real environment.

use std::env;
use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

const MODELS_DIR: (&str, &str) = ("APP_MODELS_DIR", "models");
const HOST: (&str, &str) = ("APP_HOST", "127.0.0.1");
const PORT: (&str, &str) = ("APP_PORT", "3000");
const LOG_LEVEL: (&str, &str) = ("APP_LOG_LEVEL", "info");
const STAGE: (&str, &str) = ("APP_ENV", "development");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a port number, got '{0}'")]
    InvalidPort(String),
    #[error("APP_HOST must be an IPv4/IPv6 address or localhost, got '{host}'")]
    InvalidHost {
        host: String,
        #[source]
        source: AddrParseError,
    },
    #[error("APP_MODELS_DIR must not be empty")]
    EmptyModelsDir,
}

/// Deployment stage. Only reported in the startup log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Development,
    Test,
    Production,
}

impl Stage {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Host and port the HTTP listener binds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listen {
    pub host: String,
    pub port: u16,
}

impl Listen {
    pub fn resolve(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            self.host
                .parse()
                .map_err(|source| ConfigError::InvalidHost {
                    host: self.host.clone(),
                    source,
                })?
        };
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding one `rf_<slug>.json` per domain.
    pub models_dir: PathBuf,
    pub listen: Listen,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub stage: Stage,
}

impl AppConfig {
    /// Applies `.env` (if any) and reads the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Blank values count as unset, except for the models directory which
    /// must name a path when given.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |(key, default): (&str, &str)| -> String {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let models_dir = match lookup(MODELS_DIR.0) {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyModelsDir),
            Some(raw) => PathBuf::from(raw.trim()),
            None => PathBuf::from(MODELS_DIR.1),
        };

        let port = read(PORT);
        let port = port.parse::<u16>().map_err(|_| ConfigError::InvalidPort(port))?;

        Ok(Self {
            models_dir,
            listen: Listen {
                host: read(HOST),
                port,
            },
            log_level: read(LOG_LEVEL),
            stage: Stage::parse(&read(STAGE)),
        })
    }
}
