//! Error types for the NHL extract-and-load job

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, EtlError>;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file is not valid TOML: {0}")]
    ConfigFormat(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unexpected response shape from {endpoint}: {message}")]
    UnexpectedShape { endpoint: String, message: String },

    #[error("Invalid value for {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("{entity} {id} references missing {parent} {parent_id}")]
    MissingForeignKey {
        entity: &'static str,
        id: String,
        parent: &'static str,
        parent_id: String,
    },
}

impl EtlError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        EtlError::Config {
            message: message.into(),
        }
    }

    pub(crate) fn shape(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        EtlError::UnexpectedShape {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        EtlError::InvalidField {
            field,
            value: value.into(),
        }
    }
}
