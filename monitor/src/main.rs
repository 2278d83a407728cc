use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use lightnode_monitor::constants::defaults;
use lightnode_monitor::{
    AlertService, ConfigManager, FleetChecker, MonitorScheduler, MonitorService,
};

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("lightnode_monitor=info".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    fmt().with_env_filter(env_filter).init();

    info!("Start light node monitor");

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| defaults::CONFIG_PATH.to_string());
    info!("Loading config from {}", config_path);

    let config_manager = ConfigManager::new(&config_path).await?;
    let config = config_manager.get_current_config();

    info!("Standard RPC is {}", config.node.standard_rpc);
    info!(
        "Light nodes to check: {}",
        config.node.gateway_api.join(", ")
    );
    info!(
        "Will alert when node balance is less than {} {}",
        config.node.minimum_balance, config.monitor.denom
    );
    info!(
        "Will check node performance every {}s",
        config.monitor.check_interval_seconds
    );

    let checker = FleetChecker::from_config(&config)?;
    let alert_service = Arc::new(AlertService::new(
        config.alert.webhook_url.clone(),
        config.alert.username.clone(),
    )?
    .with_denom(config.monitor.denom.clone()));

    if alert_service.is_enabled() {
        info!(
            "Alert service enabled with webhook: {}",
            alert_service.get_webhook_url()
        );
    } else {
        warn!("⚠️  ALERT SERVICE DISABLED ⚠️");
        warn!("No webhook URL configured in config file or .env");
        warn!("Set DISCORD_WEBHOOK_URL or [alert] webhook_url to enable alerts");
    }

    let service = MonitorService::new(config.clone(), checker, alert_service);
    let (scheduler, shutdown) = MonitorScheduler::new(config.check_interval());

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown signal received, stopping after the current check");
                shutdown.shutdown();
            }
            Err(e) => error!("Failed to listen for shutdown signal: {}", e),
        }
    });

    let service = &service;
    let ticks = scheduler.run(move |tick| service.run_tick(tick)).await;

    info!("Light node monitor stopped after {} checks", ticks);
    Ok(())
}
