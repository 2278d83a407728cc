//! Health monitoring module
//!
//! This module fetches reference and light node state, judges sync lag and
//! wallet balance, and aggregates the results per tick.

pub mod evaluate;
pub mod fetch;
pub mod monitor;
pub mod types;

pub use evaluate::{evaluate_balance, evaluate_sync};
pub use monitor::FleetChecker;
pub use types::{BalanceJudgment, FleetReport, NodeReport, SyncJudgment};
