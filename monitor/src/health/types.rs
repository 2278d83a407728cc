//! Health check results and light node API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Block height reported by one endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightReading {
    pub height: u64,
    pub endpoint: String,
}

/// Wallet balance reported by one light node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceReading {
    pub amount: u64,
    pub denom: String,
    pub endpoint: String,
}

/// Sync status of one node for one tick
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncJudgment {
    pub is_synced: bool,
    pub error: Option<String>,
    pub reference_height: Option<u64>,
    pub node_height: Option<u64>,
}

impl SyncJudgment {
    /// Judgment for a sync check that could not be completed
    pub fn failed(error: impl ToString) -> Self {
        Self {
            is_synced: false,
            error: Some(error.to_string()),
            reference_height: None,
            node_height: None,
        }
    }

    /// Blocks the node trails the reference by, zero when it is ahead
    pub fn blocks_behind(&self) -> Option<u64> {
        match (self.reference_height, self.node_height) {
            (Some(reference), Some(node)) => Some(reference.saturating_sub(node)),
            _ => None,
        }
    }
}

/// Balance sufficiency of one node for one tick
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceJudgment {
    pub is_sufficient: bool,
    pub error: Option<String>,
    pub balance: Option<u64>,
    pub minimum_balance: u64,
    pub denom: Option<String>,
}

impl BalanceJudgment {
    /// Judgment for a balance check that could not be completed
    pub fn failed(error: impl ToString, minimum_balance: u64) -> Self {
        Self {
            is_sufficient: false,
            error: Some(error.to_string()),
            balance: None,
            minimum_balance,
            denom: None,
        }
    }
}

/// Result of inspecting one node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeReport {
    pub node_url: String,
    pub sync: SyncJudgment,
    pub balance: BalanceJudgment,
}

impl NodeReport {
    /// A node is healthy only when both checks passed without errors
    pub fn is_healthy(&self) -> bool {
        self.sync.is_synced
            && self.sync.error.is_none()
            && self.balance.is_sufficient
            && self.balance.error.is_none()
    }
}

/// All node reports of one tick, in configuration order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetReport {
    pub tick_id: Uuid,
    pub checked_at: DateTime<Utc>,
    pub nodes: Vec<NodeReport>,
}

impl FleetReport {
    pub fn new(nodes: Vec<NodeReport>) -> Self {
        Self {
            tick_id: Uuid::new_v4(),
            checked_at: Utc::now(),
            nodes,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn unhealthy(&self) -> impl Iterator<Item = &NodeReport> {
        self.nodes.iter().filter(|node| !node.is_healthy())
    }
}

// Response shapes below expose only the fields the monitor reads.

/// Reference RPC `/status` response
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub result: StatusResult,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusResult {
    pub sync_info: SyncInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SyncInfo {
    pub latest_block_height: String,
}

/// Light node `/head` response
#[derive(Debug, Clone, Deserialize)]
pub struct HeadResponse {
    pub header: Header,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Header {
    pub height: String,
}

/// Light node `/balance` response
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceResponse {
    pub denom: String,
    pub amount: String,
}
