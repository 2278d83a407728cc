//! This module provides reusable test utilities:
//! - Mock HTTP servers (reference RPC, light node, webhook)
//! - Test configuration builders
//! - Common test data

// Not every test binary uses every fixture
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_lightnode;
pub mod mock_rpc;
pub mod mock_webhook;
pub mod test_config;

// Re-export commonly used items
pub use mock_lightnode::MockLightNode;
pub use mock_rpc::MockRpcServer;
pub use mock_webhook::MockWebhookServer;
pub use test_config::TestConfigBuilder;
pub use test_data::*;
