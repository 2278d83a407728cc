pub mod manager;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;
pub use manager::ConfigManager;

use crate::constants::{alerts, defaults};
use crate::errors::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub node: NodeConfig,
    #[serde(default)]
    pub monitor: MonitorConfig,
    #[serde(default)]
    pub alert: AlertConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Trusted RPC used as the reference chain head
    pub standard_rpc: String,
    /// Light node API base URLs, checked in this order
    #[serde(default)]
    pub gateway_api: Vec<String>,
    /// Smallest currency unit, e.g. utia
    pub minimum_balance: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    #[serde(default = "default_check_interval")]
    pub check_interval_seconds: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    #[serde(default = "default_max_block_lag")]
    pub max_block_lag: u64,
    #[serde(default = "default_denom")]
    pub denom: String,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            check_interval_seconds: default_check_interval(),
            request_timeout_seconds: default_request_timeout(),
            max_block_lag: default_max_block_lag(),
            denom: default_denom(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertConfig {
    #[serde(default)]
    pub webhook_url: String,
    #[serde(default = "default_alert_username")]
    pub username: String,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            username: default_alert_username(),
        }
    }
}

fn default_check_interval() -> u64 {
    defaults::CHECK_INTERVAL_SECONDS
}

fn default_request_timeout() -> u64 {
    defaults::REQUEST_TIMEOUT_SECONDS
}

fn default_max_block_lag() -> u64 {
    defaults::MAX_BLOCK_LAG
}

fn default_denom() -> String {
    defaults::DENOM.to_string()
}

fn default_alert_username() -> String {
    alerts::DEFAULT_USERNAME.to_string()
}

impl Config {
    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.monitor.check_interval_seconds)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.monitor.request_timeout_seconds)
    }

    /// Reject values the monitor cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.node.standard_rpc.trim().is_empty() {
            return Err(ConfigError::MissingRequired {
                field: "node.standard_rpc".to_string(),
            });
        }
        validate_http_url("node.standard_rpc", &self.node.standard_rpc)?;

        for (index, gateway) in self.node.gateway_api.iter().enumerate() {
            validate_http_url(&format!("node.gateway_api[{}]", index), gateway)?;
        }

        if self.monitor.check_interval_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "monitor.check_interval_seconds".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.monitor.request_timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "monitor.request_timeout_seconds".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        if !self.alert.webhook_url.is_empty() {
            validate_http_url("alert.webhook_url", &self.alert.webhook_url)?;
        }

        Ok(())
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        field: field.to_string(),
        reason: format!("'{}' is not a valid URL: {}", value, e),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("unsupported scheme '{}', expected http or https", scheme),
        }),
    }
}
