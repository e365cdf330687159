use std::time::Duration;
use tokio::time::timeout;
use reqwest::Client;
use tracing::{debug, warn};

use crate::errors::RevenueMonitorError;
use crate::normalize;
use crate::types::RecordBody;
use crate::config::RelayConfig;
use super::RelayService;

/// Candidate data paths, tried in order. Relays usually expose the same
/// revenue under either endpoint, so the second is only consulted when the
/// first errors or comes back empty — this avoids double counting.
const CANDIDATE_PATHS: [&str; 2] = [
    "/relay/v1/data/bidtraces/proposer_payload_delivered",
    "/relay/v1/data/bidtraces/builder_blocks_received",
];

/// Field names that may carry a record's revenue figure, in priority order.
/// The first name present in a record wins, even if its value turns out to
/// be malformed.
const VALUE_FIELDS: [&str; 4] = ["value", "block_value", "builder_profit", "profit"];

pub struct RelayClient {
    base_url: String,
    client: Client,
    request_timeout: Duration,
}

/// Outcome of one candidate-path attempt. Only the collapsed numeric result
/// ever leaves the client; callers cannot tell a failed path from an empty
/// one.
enum AttemptOutcome {
    Success(f64),
    EmptyOrZero,
    Failed(RevenueMonitorError),
}

impl RelayClient {
    /// All clients share one transport: `client` clones share the underlying
    /// connection pool.
    pub fn new(config: RelayConfig, client: Client) -> Self {
        Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            client,
            request_timeout: config.request_timeout,
        }
    }

    async fn try_path(&self, path: &str, limit: u32) -> AttemptOutcome {
        let request_url = format!("{}{}?limit={}", self.base_url, path, limit);

        let response = match timeout(
            self.request_timeout,
            self.client
                .get(&request_url)
                .header("accept", "application/json")
                .send()
        ).await {
            Ok(response_result) => {
                match response_result {
                    Ok(response) => response,
                    Err(e) => {
                        return AttemptOutcome::Failed(RevenueMonitorError::RequestError(e));
                    }
                }
            },
            Err(_) => {
                return AttemptOutcome::Failed(RevenueMonitorError::TimeoutError(self.request_timeout));
            }
        };

        if !response.status().is_success() {
            return AttemptOutcome::Failed(RevenueMonitorError::RelayConnectionError(
                format!("Relay returned status: {}", response.status())
            ));
        }

        let body = match response.json::<serde_json::Value>().await {
            Ok(body) => body,
            Err(e) => {
                return AttemptOutcome::Failed(RevenueMonitorError::InvalidResponseError(
                    format!("Failed to parse JSON response: {}", e)
                ));
            }
        };

        let records = RecordBody::extract(body);

        let mut total_eth = 0.0;
        for record in &records {
            if let Some(raw) = VALUE_FIELDS.iter().find_map(|key| record.get(*key)) {
                total_eth += normalize::normalize(raw);
            }
        }

        if total_eth > 0.0 {
            AttemptOutcome::Success(total_eth)
        } else {
            AttemptOutcome::EmptyOrZero
        }
    }
}

#[async_trait::async_trait]
impl RelayService for RelayClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_revenue(&self, limit: u32) -> f64 {
        for path in CANDIDATE_PATHS {
            match self.try_path(path, limit).await {
                AttemptOutcome::Success(total_eth) => {
                    debug!(relay = %self.base_url, path, total_eth, "Path produced revenue");
                    return total_eth;
                }
                AttemptOutcome::EmptyOrZero => {
                    debug!(relay = %self.base_url, path, "No revenue on path, falling back");
                }
                AttemptOutcome::Failed(e) => {
                    warn!(relay = %self.base_url, path, error = %e, "Path attempt failed");
                }
            }
        }
        0.0
    }
}
