use serde::{Deserialize, Serialize};

/// One bid/payload record as returned by a relay data endpoint. Field shapes
/// vary between relays, so records stay as raw JSON maps until a revenue
/// field is selected.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// Relay data endpoints answer with either a bare array of records or an
/// object wrapping the array under a `data` key. Anything else is treated as
/// an empty record list rather than a hard failure.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RecordBody {
    Bare(Vec<RawRecord>),
    Wrapped { data: Vec<RawRecord> },
}

impl RecordBody {
    pub fn extract(body: serde_json::Value) -> Vec<RawRecord> {
        match serde_json::from_value::<RecordBody>(body) {
            Ok(RecordBody::Bare(records)) => records,
            Ok(RecordBody::Wrapped { data }) => data,
            Err(_) => Vec::new(),
        }
    }
}

/// Revenue estimate for a single relay. `usd` is reserved for an external
/// price-conversion collaborator and is always serialized as `null` here.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct RelayRevenue {
    pub relay: String,
    pub eth: f64,
    pub usd: Option<f64>,
}

impl RelayRevenue {
    pub fn new(relay: impl Into<String>, eth: f64) -> Self {
        Self {
            relay: relay.into(),
            eth,
            usd: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct AggregateReport {
    pub items: Vec<RelayRevenue>,
    pub total_eth: f64,
}

impl AggregateReport {
    /// Builds the report from per-relay entries; `total_eth` is derived from
    /// the entries themselves so the two can never disagree.
    pub fn from_items(items: Vec<RelayRevenue>) -> Self {
        let total_eth = items.iter().map(|item| item.eth).sum();
        Self { items, total_eth }
    }
}
