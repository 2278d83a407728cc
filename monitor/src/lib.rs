pub mod config;
pub mod constants;
pub mod errors;
pub mod health;
pub mod scheduler;
pub mod services;

// Re-export commonly used types
pub use config::{Config, ConfigManager};
pub use errors::{ConfigError, FetchError};
pub use health::{FleetChecker, FleetReport, NodeReport};
pub use scheduler::{MonitorScheduler, ShutdownHandle};
pub use services::{AlertService, AlertSink, MonitorService};
