//! Central repository for timeouts, intervals and thresholds
//!
//! Values here are the defaults used when the config file leaves a setting out.

/// Endpoint paths appended to configured base URLs
pub mod endpoints {
    /// Reference RPC status endpoint
    pub const STATUS_PATH: &str = "/status";

    /// Light node header endpoint
    pub const HEAD_PATH: &str = "/head";

    /// Light node wallet balance endpoint
    pub const BALANCE_PATH: &str = "/balance";
}

/// Default configuration values
pub mod defaults {
    /// Seconds between fleet checks
    pub const CHECK_INTERVAL_SECONDS: u64 = 300;

    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 5;

    /// Blocks a node may trail the reference and still count as synced
    pub const MAX_BLOCK_LAG: u64 = 5;

    /// Denomination used in log and alert text
    pub const DENOM: &str = "utia";

    /// Config file read when no path is given on the command line
    pub const CONFIG_PATH: &str = "config.toml";

    /// Secrets file name, resolved next to the config file
    pub const ENV_FILE_NAME: &str = ".env";
}

/// Alert delivery constants
pub mod alerts {
    /// Webhook request timeout
    pub const WEBHOOK_TIMEOUT_SECONDS: u64 = 10;

    /// Discord rejects message content longer than this
    pub const MAX_MESSAGE_LENGTH: usize = 2000;

    /// Environment variable overriding the configured webhook URL
    pub const WEBHOOK_URL_ENV: &str = "DISCORD_WEBHOOK_URL";

    /// Name shown as the webhook author
    pub const DEFAULT_USERNAME: &str = "lightnode-monitor";
}
