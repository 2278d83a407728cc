//! Mock reference RPC server
//!
//! Serves a CometBFT-style `/status` response without a real chain.

use serde_json::json;
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub struct MockRpcServer {
    pub server: MockServer,
    pub base_url: String,
}

impl MockRpcServer {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    fn status_body(latest_block_height: &str) -> serde_json::Value {
        json!({
            "jsonrpc": "2.0",
            "id": -1,
            "result": {
                "node_info": {
                    "network": "celestia",
                    "moniker": "reference-rpc"
                },
                "sync_info": {
                    "latest_block_hash": "8A2F9C",
                    "latest_block_height": latest_block_height,
                    "latest_block_time": "2024-01-15T10:30:00Z",
                    "catching_up": false
                },
                "validator_info": {
                    "address": "ABCDEF",
                    "voting_power": "0"
                }
            }
        })
    }

    /// Reference reports `height` as its latest block
    pub async fn mock_latest_height(&self, height: u64) {
        self.mock_raw_height(&height.to_string()).await;
    }

    /// Reference reports an arbitrary height string
    pub async fn mock_raw_height(&self, height: &str) {
        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Self::status_body(height)))
            .mount(&self.server)
            .await;
    }

    /// Reference answers only after `delay`
    pub async fn mock_slow(&self, height: u64, delay: Duration) {
        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(Self::status_body(&height.to_string()))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Reference returns an HTTP error
    pub async fn mock_unavailable(&self, status_code: u16) {
        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(status_code))
            .mount(&self.server)
            .await;
    }
}
