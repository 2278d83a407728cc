//! Custom error types for the light node monitor
//!
//! Fetch errors never escape a node inspection; they are rendered into the
//! error field of the judgment they belong to.

use std::fmt;

/// Failure while fetching state from a reference or node endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Request construction, connection or timeout failure
    Network { url: String, reason: String },

    /// Endpoint answered with a non-success HTTP status
    Status { url: String, status: u16 },

    /// Response body did not have the expected shape
    Decode { url: String, reason: String },

    /// A string-encoded numeric field was not a valid integer
    NumericParse {
        url: String,
        field: &'static str,
        value: String,
    },
}

impl FetchError {
    /// True for failures that happened before a usable response arrived
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network { .. } | FetchError::Status { .. })
    }

    pub fn url(&self) -> &str {
        match self {
            FetchError::Network { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Decode { url, .. }
            | FetchError::NumericParse { url, .. } => url,
        }
    }
}

/// Configuration error variants
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to load configuration file
    LoadFailed { path: String, reason: String },

    /// Invalid configuration value
    InvalidValue { field: String, reason: String },

    /// Missing required configuration
    MissingRequired { field: String },

    /// Configuration parsing error
    ParseError { reason: String },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network { url, reason } => {
                write!(f, "Request to {} failed: {}", url, reason)
            }
            FetchError::Status { url, status } => {
                write!(f, "Request to {} returned HTTP {}", url, status)
            }
            FetchError::Decode { url, reason } => {
                write!(f, "Unexpected response from {}: {}", url, reason)
            }
            FetchError::NumericParse { url, field, value } => {
                write!(
                    f,
                    "Invalid {} '{}' in response from {}",
                    field, value, url
                )
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path, reason)
            }
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
            ConfigError::MissingRequired { field } => {
                write!(f, "Missing required field: {}", field)
            }
            ConfigError::ParseError { reason } => {
                write!(f, "Failed to parse config: {}", reason)
            }
        }
    }
}

impl std::error::Error for FetchError {}
impl std::error::Error for ConfigError {}
