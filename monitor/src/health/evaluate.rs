//! Pure pass/fail rules for sync lag and wallet balance

use super::types::{BalanceJudgment, SyncJudgment};

/// A node is synced while it trails the reference by at most `max_lag` blocks.
/// Nodes ahead of the reference are always synced.
pub fn evaluate_sync(reference_height: u64, node_height: u64, max_lag: u64) -> SyncJudgment {
    let blocks_behind = reference_height.saturating_sub(node_height);

    SyncJudgment {
        is_synced: blocks_behind <= max_lag,
        error: None,
        reference_height: Some(reference_height),
        node_height: Some(node_height),
    }
}

pub fn evaluate_balance(node_balance: u64, minimum_balance: u64) -> BalanceJudgment {
    BalanceJudgment {
        is_sufficient: node_balance >= minimum_balance,
        error: None,
        balance: Some(node_balance),
        minimum_balance,
        denom: None,
    }
}
