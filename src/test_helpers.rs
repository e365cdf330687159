use async_trait::async_trait;

use crate::relay::RelayService;

/// Relay stub reporting a fixed revenue figure, for exercising the
/// aggregator without a network.
pub struct StaticRelayService {
    base_url: String,
    eth: f64,
}

impl StaticRelayService {
    pub fn new(base_url: impl Into<String>, eth: f64) -> Self {
        Self {
            base_url: base_url.into(),
            eth,
        }
    }
}

#[async_trait]
impl RelayService for StaticRelayService {
    async fn fetch_revenue(&self, _limit: u32) -> f64 {
        self.eth
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
