use anyhow::{anyhow, Result};
use futures::future::join_all;
use reqwest::Client as HttpClient;
use std::time::Duration;
use tracing::{error, info, info_span, warn, Instrument};

use super::evaluate::{evaluate_balance, evaluate_sync};
use super::fetch::{fetch_node_balance, fetch_node_height, fetch_reference_height};
use super::types::{BalanceJudgment, FleetReport, NodeReport, SyncJudgment};
use crate::config::Config;

/// Runs sync and balance checks against light nodes.
///
/// Holds no per-node state between calls: every inspection fetches fresh
/// readings and produces an independent [`NodeReport`].
#[derive(Clone)]
pub struct FleetChecker {
    client: HttpClient,
    request_timeout: Duration,
    max_block_lag: u64,
}

impl FleetChecker {
    pub fn new(request_timeout: Duration, max_block_lag: u64) -> Result<Self> {
        let client = HttpClient::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            request_timeout,
            max_block_lag,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.request_timeout(), config.monitor.max_block_lag)
    }

    /// Inspect every node concurrently. The report keeps input order and has
    /// exactly one entry per node.
    pub async fn check_fleet(
        &self,
        node_urls: &[String],
        reference_url: &str,
        minimum_balance: u64,
    ) -> FleetReport {
        let inspections = node_urls
            .iter()
            .map(|node_url| self.inspect(node_url, reference_url, minimum_balance));

        let nodes = join_all(inspections).await;
        FleetReport::new(nodes)
    }

    /// Inspect a single node. Sync and balance are judged independently so a
    /// failure on one never hides the other.
    pub async fn inspect(
        &self,
        node_url: &str,
        reference_url: &str,
        minimum_balance: u64,
    ) -> NodeReport {
        let span = info_span!("node", node_url = %node_url);

        async {
            info!("Checking node: {}", node_url);

            let (sync, balance) = tokio::join!(
                self.check_sync(node_url, reference_url),
                self.check_balance(node_url, minimum_balance),
            );

            NodeReport {
                node_url: node_url.to_string(),
                sync,
                balance,
            }
        }
        .instrument(span)
        .await
    }

    async fn check_sync(&self, node_url: &str, reference_url: &str) -> SyncJudgment {
        let (node_height, reference_height) = tokio::join!(
            fetch_node_height(&self.client, node_url, self.request_timeout),
            fetch_reference_height(&self.client, reference_url, self.request_timeout),
        );

        let node_height = match node_height {
            Ok(reading) => reading.height,
            Err(e) => {
                error!(endpoint = %e.url(), "Failed to check node {} sync status: {}", node_url, e);
                return SyncJudgment::failed(format!(
                    "failed to get latest block from node: {}",
                    e
                ));
            }
        };

        let reference_height = match reference_height {
            Ok(reading) => reading.height,
            Err(e) => {
                error!(endpoint = %e.url(), "Failed to check node {} sync status: {}", node_url, e);
                return SyncJudgment::failed(format!(
                    "failed to get latest block from standard RPC: {}",
                    e
                ));
            }
        };

        let judgment = evaluate_sync(reference_height, node_height, self.max_block_lag);
        if !judgment.is_synced {
            warn!(
                "Node {} is not synced, node height is {} standard RPC height is {}",
                node_url, node_height, reference_height
            );
        }
        judgment
    }

    async fn check_balance(&self, node_url: &str, minimum_balance: u64) -> BalanceJudgment {
        match fetch_node_balance(&self.client, node_url, self.request_timeout).await {
            Ok(reading) => {
                let mut judgment = evaluate_balance(reading.amount, minimum_balance);
                if !judgment.is_sufficient {
                    warn!(
                        "Node {} does not have enough balance, balance is {}{} minimum balance is {}",
                        node_url, reading.amount, reading.denom, minimum_balance
                    );
                }
                judgment.denom = Some(reading.denom);
                judgment
            }
            Err(e) => {
                error!(endpoint = %e.url(), "Failed to check node {} balance: {}", node_url, e);
                BalanceJudgment::failed(
                    format!("failed to get balance from node: {}", e),
                    minimum_balance,
                )
            }
        }
    }
}
