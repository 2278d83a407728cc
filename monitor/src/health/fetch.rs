//! HTTP fetchers for the reference RPC and light node APIs
//!
//! Every request is a bounded GET. Failures are returned as [`FetchError`]
//! and never retried here; the next tick is the retry.

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::types::{
    BalanceReading, BalanceResponse, HeadResponse, HeightReading, StatusResponse,
};
use crate::constants::endpoints::{BALANCE_PATH, HEAD_PATH, STATUS_PATH};
use crate::errors::FetchError;

/// Fetch the latest block height from the reference RPC `/status` endpoint
pub async fn fetch_reference_height(
    client: &Client,
    reference_url: &str,
    request_timeout: Duration,
) -> Result<HeightReading, FetchError> {
    let url = endpoint_url(reference_url, STATUS_PATH);
    let response: StatusResponse = get_json(client, &url, request_timeout).await?;

    let height = parse_numeric(
        &url,
        "latest_block_height",
        &response.result.sync_info.latest_block_height,
    )?;

    Ok(HeightReading {
        height,
        endpoint: reference_url.to_string(),
    })
}

/// Fetch the latest header height from a light node `/head` endpoint
pub async fn fetch_node_height(
    client: &Client,
    node_url: &str,
    request_timeout: Duration,
) -> Result<HeightReading, FetchError> {
    let url = endpoint_url(node_url, HEAD_PATH);
    let response: HeadResponse = get_json(client, &url, request_timeout).await?;

    let height = parse_numeric(&url, "header height", &response.header.height)?;

    Ok(HeightReading {
        height,
        endpoint: node_url.to_string(),
    })
}

/// Fetch the wallet balance from a light node `/balance` endpoint
pub async fn fetch_node_balance(
    client: &Client,
    node_url: &str,
    request_timeout: Duration,
) -> Result<BalanceReading, FetchError> {
    let url = endpoint_url(node_url, BALANCE_PATH);
    let response: BalanceResponse = get_json(client, &url, request_timeout).await?;

    let amount = parse_numeric(&url, "amount", &response.amount)?;

    Ok(BalanceReading {
        amount,
        denom: response.denom,
        endpoint: node_url.to_string(),
    })
}

async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    request_timeout: Duration,
) -> Result<T, FetchError> {
    debug!("GET {}", url);

    let response = client
        .get(url)
        .timeout(request_timeout)
        .send()
        .await
        .map_err(|e| network_error(url, e, request_timeout))?;

    if !response.status().is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    // Body read stays under the same request timeout
    let body = response
        .bytes()
        .await
        .map_err(|e| network_error(url, e, request_timeout))?;

    serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

fn network_error(url: &str, error: reqwest::Error, request_timeout: Duration) -> FetchError {
    let reason = if error.is_timeout() {
        format!("request timed out after {}s", request_timeout.as_secs())
    } else {
        error.to_string()
    };

    FetchError::Network {
        url: url.to_string(),
        reason,
    }
}

fn parse_numeric(url: &str, field: &'static str, value: &str) -> Result<u64, FetchError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| FetchError::NumericParse {
            url: url.to_string(),
            field,
            value: value.to_string(),
        })
}

fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
