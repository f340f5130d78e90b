use thiserror::Error;

use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::underwriting::InvalidInput;

/// Failures surfaced by the service binary while bootstrapping or running a
/// command. HTTP handlers never return this; domain rejections stay inside
/// each tool's result record.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server error: {0}")]
    Server(#[from] axum::Error),
    #[error("profile error: {0}")]
    Profile(serde_json::Error),
    #[error("underwriting error: {0}")]
    Underwriting(#[from] InvalidInput),
}
