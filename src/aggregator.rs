use std::sync::Arc;

use futures::future::join_all;
use reqwest::Client;
use tracing::{debug, error, instrument};

use crate::{
    config::Config,
    errors::Result,
    relay::RelayService,
    relay::client::RelayClient,
    types::{AggregateReport, RelayRevenue},
};

/// Fans one revenue fetch out per configured relay and joins all of them
/// before building the report. The relay set is fixed at construction.
pub struct RevenueAggregator {
    relays: Vec<Arc<dyn RelayService + Send + Sync>>,
}

impl RevenueAggregator {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            relays: config
                .relays
                .iter()
                .map(|relay_config| {
                    Arc::new(RelayClient::new(relay_config.clone(), client.clone()))
                        as Arc<dyn RelayService + Send + Sync>
                })
                .collect(),
        })
    }

    pub fn with_services(relays: Vec<Arc<dyn RelayService + Send + Sync>>) -> Self {
        Self { relays }
    }

    /// Collects revenue from every configured relay concurrently. The report
    /// always carries one entry per relay, in configuration order, whatever
    /// the network did — a failed relay shows up as 0.0.
    #[instrument(skip(self), fields(relays = self.relays.len()))]
    pub async fn aggregate(&self, limit: u32) -> AggregateReport {
        let mut handles = Vec::with_capacity(self.relays.len());
        for relay in &self.relays {
            let relay = relay.clone();
            handles.push(tokio::spawn(async move { relay.fetch_revenue(limit).await }));
        }

        let results = join_all(handles).await;

        let mut items = Vec::with_capacity(self.relays.len());
        for (relay, result) in self.relays.iter().zip(results) {
            let eth = match result {
                Ok(eth) => eth,
                Err(e) => {
                    error!(relay = %relay.base_url(), error = ?e, "Error joining relay fetch task");
                    0.0
                }
            };
            debug!(relay = %relay.base_url(), eth, "Relay revenue collected");
            items.push(RelayRevenue::new(relay.base_url(), eth));
        }

        AggregateReport::from_items(items)
    }
}
