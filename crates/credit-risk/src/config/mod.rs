use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Deployment stage the service believes it is running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnvironment {
    #[default]
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Runtime configuration for the underwriting service, read from the
/// process environment (with `.env` overlay) at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = match env::var("APP_ENV") {
            Ok(value) => AppEnvironment::from_str(&value),
            Err(_) => AppEnvironment::default(),
        };

        let server = ServerConfig {
            host: env_or("APP_HOST", DEFAULT_HOST),
            port: match env::var("APP_PORT") {
                Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort { raw })?,
                Err(_) => DEFAULT_PORT,
            },
        };

        let telemetry = TelemetryConfig {
            log_level: env_or("APP_LOG_LEVEL", DEFAULT_LOG_LEVEL),
        };

        Ok(Self {
            environment,
            server,
            telemetry,
        })
    }
}

fn env_or(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_string())
}

/// Where the HTTP listener binds.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Resolves the configured host to a bindable address. `localhost` is
    /// accepted as a spelling of the loopback address; anything else must be
    /// a literal IP.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            self.host.parse().map_err(|source| ConfigError::InvalidHost {
                host: self.host.clone(),
                source,
            })?
        };

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log verbosity applied when `RUST_LOG` is not set.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("APP_PORT '{raw}' is not a valid port number")]
    InvalidPort { raw: String },
    #[error("APP_HOST '{host}' is neither 'localhost' nor an IP address")]
    InvalidHost {
        host: String,
        #[source]
        source: std::net::AddrParseError,
    },
}
