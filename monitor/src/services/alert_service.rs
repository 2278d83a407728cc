use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};

use crate::constants::{alerts, defaults};
use crate::health::{FleetReport, NodeReport};

/// Destination for fleet reports
pub trait AlertSink: Send + Sync {
    fn dispatch(&self, report: &FleetReport) -> impl Future<Output = Result<()>> + Send;
}

/// Discord-compatible webhook body
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload {
    pub username: String,
    pub content: String,
}

/// Posts one message per tick listing every unhealthy node.
///
/// Keeps no memory between ticks: a node that stays broken is reported on
/// every tick until it recovers.
#[derive(Clone)]
pub struct AlertService {
    webhook_url: String,
    username: String,
    denom: String,
    client: Client,
}

impl AlertService {
    pub fn new(webhook_url: String, username: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(alerts::WEBHOOK_TIMEOUT_SECONDS))
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client for AlertService: {}", e))?;

        Ok(Self {
            webhook_url,
            username,
            denom: defaults::DENOM.to_string(),
            client,
        })
    }

    /// Denomination used when a node report carries none
    pub fn with_denom(mut self, denom: String) -> Self {
        self.denom = denom;
        self
    }

    pub fn is_enabled(&self) -> bool {
        !self.webhook_url.is_empty()
    }

    pub fn get_webhook_url(&self) -> &str {
        &self.webhook_url
    }

    /// Alert text for the report, or `None` when every node is healthy
    pub fn build_alert_message(&self, report: &FleetReport) -> Option<String> {
        let unhealthy: Vec<&NodeReport> = report.unhealthy().collect();
        if unhealthy.is_empty() {
            return None;
        }

        let mut lines = vec![format!(
            "⚠️ Light node alert: {} of {} nodes need attention",
            unhealthy.len(),
            report.len()
        )];

        for node in unhealthy {
            lines.extend(describe_problems(node, &self.denom));
        }

        Some(truncate_message(lines.join("\n"), alerts::MAX_MESSAGE_LENGTH))
    }

    async fn send_webhook(&self, payload: &WebhookPayload) -> Result<()> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to send alert: {}", e))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Alert webhook returned status: {}",
                response.status()
            ));
        }

        Ok(())
    }
}

impl AlertSink for AlertService {
    async fn dispatch(&self, report: &FleetReport) -> Result<()> {
        let Some(content) = self.build_alert_message(report) else {
            debug!("All {} nodes healthy, no alert needed", report.len());
            return Ok(());
        };

        if !self.is_enabled() {
            debug!("No webhook URL configured, skipping alert");
            return Ok(());
        }

        let payload = WebhookPayload {
            username: self.username.clone(),
            content,
        };

        self.send_webhook(&payload).await?;
        info!(tick_id = %report.tick_id, "Alert sent successfully");
        Ok(())
    }
}

fn describe_problems(node: &NodeReport, fallback_denom: &str) -> Vec<String> {
    let mut problems = Vec::new();
    let url = &node.node_url;

    if let Some(error) = &node.sync.error {
        problems.push(format!("- `{}` sync check failed: {}", url, error));
    } else if !node.sync.is_synced {
        let detail = match (node.sync.node_height, node.sync.reference_height) {
            (Some(node_height), Some(reference_height)) => format!(
                " (node height {}, standard RPC height {}, {} blocks behind)",
                node_height,
                reference_height,
                reference_height.saturating_sub(node_height)
            ),
            _ => String::new(),
        };
        problems.push(format!("- `{}` is not synced{}", url, detail));
    }

    let denom = node.balance.denom.as_deref().unwrap_or(fallback_denom);
    if let Some(error) = &node.balance.error {
        problems.push(format!(
            "- `{}` balance check failed (minimum {}{}): {}",
            url, node.balance.minimum_balance, denom, error
        ));
    } else if !node.balance.is_sufficient {
        let balance = node
            .balance
            .balance
            .map(|amount| amount.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        problems.push(format!(
            "- `{}` balance too low: {}{} (minimum {}{})",
            url, balance, denom, node.balance.minimum_balance, denom
        ));
    }

    problems
}

fn truncate_message(message: String, max_chars: usize) -> String {
    if message.chars().count() <= max_chars {
        return message;
    }

    let mut truncated: String = message.chars().take(max_chars.saturating_sub(3)).collect();
    truncated.push_str("...");
    truncated
}
