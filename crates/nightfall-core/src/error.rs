//! Error types for loading and validating run configuration.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A tuning value is outside its safe range.
    #[error("invalid tuning value {field} = {value}: {reason}")]
    Invalid {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
