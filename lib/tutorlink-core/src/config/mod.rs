pub mod core_config;

pub use core_config::{ApiConfig, CoreConfig, ValidationConfig};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Parsing(#[from] ConfigParsingError),
    #[error(transparent)]
    Validation(#[from] ConfigValidationError),
}

#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("config parsing error: {0}")]
    Figment(#[from] figment::Error),
}

#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("invalid API base url `{url}`: {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("request timeout must be non-zero")]
    ZeroTimeout,
}
