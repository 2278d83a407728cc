use super::Config;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::constants::{alerts, defaults};
use crate::errors::ConfigError;

pub struct ConfigManager {
    current_config: Arc<Config>,
}

impl ConfigManager {
    /// Load `config_path` and the `.env` file that sits next to it
    pub async fn new(config_path: impl AsRef<Path>) -> Result<Self> {
        let process_webhook = std::env::var(alerts::WEBHOOK_URL_ENV).ok();
        Self::with_process_webhook(config_path, process_webhook).await
    }

    /// Same as [`ConfigManager::new`], with the webhook URL the process
    /// environment would have supplied passed in explicitly
    pub async fn with_process_webhook(
        config_path: impl AsRef<Path>,
        process_webhook: Option<String>,
    ) -> Result<Self> {
        let config_path = config_path.as_ref();
        let env_path = env_file_for(config_path);
        let config = Self::load_configuration(config_path, &env_path, process_webhook).await?;
        Ok(Self {
            current_config: Arc::new(config),
        })
    }

    pub fn get_current_config(&self) -> Arc<Config> {
        self.current_config.clone()
    }

    async fn load_configuration(
        config_path: &Path,
        env_path: &Path,
        process_webhook: Option<String>,
    ) -> Result<Config> {
        let content = fs::read_to_string(config_path).await.map_err(|e| {
            anyhow!(ConfigError::LoadFailed {
                path: config_path.display().to_string(),
                reason: e.to_string(),
            })
        })?;

        let mut config = parse_config(&content)?;

        let dotenv = read_env_file(env_path)?;
        apply_env_overrides(&mut config, process_webhook, &dotenv);

        config.validate()?;

        if config.node.gateway_api.is_empty() {
            warn!("No light nodes configured in {}", config_path.display());
        }

        info!(
            "Loaded config from {}: {} light nodes, check interval {}s",
            config_path.display(),
            config.node.gateway_api.len(),
            config.monitor.check_interval_seconds
        );

        Ok(config)
    }
}

pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError {
        reason: e.to_string(),
    })
}

/// Read KEY=VALUE pairs without touching the process environment.
/// A missing file yields an empty map.
pub fn read_env_file(env_path: &Path) -> Result<HashMap<String, String>> {
    if !env_path.exists() {
        debug!("No env file at {}", env_path.display());
        return Ok(HashMap::new());
    }

    let mut values = HashMap::new();
    let entries = dotenvy::from_path_iter(env_path)
        .map_err(|e| anyhow!("Failed to read {}: {}", env_path.display(), e))?;

    for entry in entries {
        let (key, value) =
            entry.map_err(|e| anyhow!("Failed to parse {}: {}", env_path.display(), e))?;
        values.insert(key, value);
    }

    debug!("Loaded {} values from {}", values.len(), env_path.display());
    Ok(values)
}

/// Process environment wins over the env file, which wins over the TOML value.
/// Blank values are ignored at every level.
pub fn apply_env_overrides(
    config: &mut Config,
    process_webhook: Option<String>,
    dotenv: &HashMap<String, String>,
) {
    let non_blank = |url: &String| !url.trim().is_empty();
    let webhook = process_webhook
        .filter(non_blank)
        .or_else(|| dotenv.get(alerts::WEBHOOK_URL_ENV).cloned().filter(non_blank));

    if let Some(url) = webhook {
        debug!("Using webhook URL from {}", alerts::WEBHOOK_URL_ENV);
        config.alert.webhook_url = url;
    }
}

fn env_file_for(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(|dir| dir.join(defaults::ENV_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(defaults::ENV_FILE_NAME))
}
