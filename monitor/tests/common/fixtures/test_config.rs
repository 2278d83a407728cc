//! Test configuration builder that writes config files to a temp directory

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestConfigBuilder {
    standard_rpc: String,
    gateway_api: Vec<String>,
    minimum_balance: u64,
    monitor_section: Option<String>,
    webhook_url: Option<String>,
    env_file: Option<String>,
}

impl TestConfigBuilder {
    pub fn new(standard_rpc: &str) -> Self {
        Self {
            standard_rpc: standard_rpc.to_string(),
            gateway_api: Vec::new(),
            minimum_balance: 1_000_000,
            monitor_section: None,
            webhook_url: None,
            env_file: None,
        }
    }

    pub fn with_node(mut self, url: &str) -> Self {
        self.gateway_api.push(url.to_string());
        self
    }

    pub fn with_minimum_balance(mut self, minimum_balance: u64) -> Self {
        self.minimum_balance = minimum_balance;
        self
    }

    /// Raw body of the `[monitor]` table
    pub fn with_monitor_section(mut self, body: &str) -> Self {
        self.monitor_section = Some(body.to_string());
        self
    }

    pub fn with_webhook_url(mut self, url: &str) -> Self {
        self.webhook_url = Some(url.to_string());
        self
    }

    /// Contents of the `.env` written next to config.toml
    pub fn with_env_file(mut self, contents: &str) -> Self {
        self.env_file = Some(contents.to_string());
        self
    }

    pub fn to_toml(&self) -> String {
        let nodes = self
            .gateway_api
            .iter()
            .map(|url| format!("\"{}\"", url))
            .collect::<Vec<_>>()
            .join(", ");

        let mut toml = format!(
            "[node]\nstandard_rpc = \"{}\"\ngateway_api = [{}]\nminimum_balance = {}\n",
            self.standard_rpc, nodes, self.minimum_balance
        );

        if let Some(body) = &self.monitor_section {
            toml.push_str(&format!("\n[monitor]\n{}\n", body));
        }

        if let Some(url) = &self.webhook_url {
            toml.push_str(&format!("\n[alert]\nwebhook_url = \"{}\"\n", url));
        }

        toml
    }

    pub fn build(self) -> TestConfig {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, self.to_toml()).expect("Failed to write config.toml");

        if let Some(contents) = &self.env_file {
            fs::write(temp_dir.path().join(".env"), contents).expect("Failed to write .env");
        }

        TestConfig {
            _temp_dir: temp_dir,
            config_path,
        }
    }
}

/// Written config; files are removed when this is dropped
pub struct TestConfig {
    _temp_dir: TempDir,
    pub config_path: PathBuf,
}
