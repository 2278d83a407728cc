pub mod alert_service;
pub mod monitor_service;

pub use alert_service::{AlertService, AlertSink, WebhookPayload};
pub use monitor_service::MonitorService;
