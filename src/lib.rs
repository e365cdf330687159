pub mod aggregator;
pub mod config;
pub mod errors;
pub mod normalize;
pub mod relay;
pub mod test_helpers;
pub mod types;
