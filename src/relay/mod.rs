use async_trait::async_trait;

#[async_trait]
pub trait RelayService: Send + Sync {
    /// Estimates recent revenue for this relay in ETH. Infallible: a dead or
    /// misbehaving relay reports 0.0, indistinguishable from a relay that
    /// genuinely delivered nothing in the requested window.
    async fn fetch_revenue(&self, limit: u32) -> f64;
    /// Returns the base URL of the relay service
    fn base_url(&self) -> &str;
}

pub mod client;
