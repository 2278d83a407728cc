use std::sync::Arc;
use tracing::{error, info, info_span, Instrument};

use crate::config::Config;
use crate::health::{FleetChecker, FleetReport};
use crate::services::AlertSink;

/// One tick of work: check the fleet, then hand the report to the alert sink
pub struct MonitorService<A> {
    config: Arc<Config>,
    checker: FleetChecker,
    alert_sink: Arc<A>,
}

impl<A: AlertSink> MonitorService<A> {
    pub fn new(config: Arc<Config>, checker: FleetChecker, alert_sink: Arc<A>) -> Self {
        Self {
            config,
            checker,
            alert_sink,
        }
    }

    /// Never fails: dispatch errors are logged and the report is still returned
    pub async fn run_tick(&self, tick: u64) -> FleetReport {
        let node = &self.config.node;

        async {
            info!("Start to check node performance");
            let report = self
                .checker
                .check_fleet(&node.gateway_api, &node.standard_rpc, node.minimum_balance)
                .await;

            let unhealthy = report.unhealthy().count();
            info!(
                tick_id = %report.tick_id,
                "Checked {} nodes, {} unhealthy",
                report.len(),
                unhealthy
            );

            info!("Start to check and send alert");
            if let Err(e) = self.alert_sink.dispatch(&report).await {
                error!("Failed to send alert: {}", e);
            }

            report
        }
        .instrument(info_span!("tick", tick))
        .await
    }
}
