//! Mock light node API
//!
//! Serves `/head` and `/balance` independently so tests can break one
//! endpoint while the other stays healthy.

use serde_json::json;
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub struct MockLightNode {
    pub server: MockServer,
    pub base_url: String,
}

impl MockLightNode {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    fn head_body(height: &str) -> serde_json::Value {
        json!({
            "header": {
                "version": {"block": "11", "app": "1"},
                "chain_id": "celestia",
                "height": height,
                "time": "2024-01-15T10:30:00Z",
                "proposer_address": "ABCDEF"
            },
            "validator_set": {"validators": []},
            "commit": {"height": 1, "round": 0, "signatures": []},
            "dah": {"row_roots": [], "column_roots": []}
        })
    }

    /// Node reports `height` as its latest header
    pub async fn mock_head(&self, height: u64) {
        self.mock_head_raw(&height.to_string()).await;
    }

    pub async fn mock_head_raw(&self, height: &str) {
        Mock::given(method("GET"))
            .and(path("/head"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Self::head_body(height)))
            .mount(&self.server)
            .await;
    }

    /// `/head` answers only after `delay`
    pub async fn mock_head_slow(&self, height: u64, delay: Duration) {
        Mock::given(method("GET"))
            .and(path("/head"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(Self::head_body(&height.to_string()))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// `/head` returns a body without a header
    pub async fn mock_head_malformed(&self) {
        Mock::given(method("GET"))
            .and(path("/head"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_head_error(&self, status_code: u16) {
        Mock::given(method("GET"))
            .and(path("/head"))
            .respond_with(ResponseTemplate::new(status_code))
            .mount(&self.server)
            .await;
    }

    /// Node reports `amount` utia
    pub async fn mock_balance(&self, amount: u64) {
        self.mock_balance_raw(&amount.to_string()).await;
    }

    pub async fn mock_balance_raw(&self, amount: &str) {
        Mock::given(method("GET"))
            .and(path("/balance"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "denom": "utia",
                "amount": amount
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_balance_error(&self, status_code: u16) {
        Mock::given(method("GET"))
            .and(path("/balance"))
            .respond_with(ResponseTemplate::new(status_code))
            .mount(&self.server)
            .await;
    }

    /// Healthy node at `height` holding `amount`
    pub async fn mock_healthy(&self, height: u64, amount: u64) {
        self.mock_head(height).await;
        self.mock_balance(amount).await;
    }
}
