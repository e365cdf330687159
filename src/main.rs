use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use mev_revenue_monitor::{
    aggregator::RevenueAggregator,
    config::{Config, RelayConfig},
    errors::Result,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Number of records to request per relay endpoint
    #[arg(short, long)]
    limit: Option<u32>,

    /// Comma-separated relay base URLs, overriding the configured list
    #[arg(short, long)]
    relays: Option<String>,
}

// Helper function to initialize tracing
fn init_tracing() {
    // Filter logs based on the RUST_LOG environment variable, defaulting to "info"
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    // Load configuration from file if specified, otherwise from environment
    let mut config = match args.config {
        Some(path) => Config::from_file(path.into())?,
        None => Config::from_env()?,
    };

    // Override config with command line arguments
    if let Some(limit) = args.limit {
        config.record_limit = limit;
    }

    if let Some(relays) = args.relays {
        config.relays = relays
            .split(',')
            .map(|url| RelayConfig::new(url.trim()))
            .collect();
    }

    config.validate()?;

    info!(relays = config.relays.len(), limit = config.record_limit, "Starting relay revenue aggregation");

    let aggregator = RevenueAggregator::new(&config)?;
    let report = aggregator.aggregate(config.record_limit).await;

    info!(total_eth = report.total_eth, "Aggregation complete");
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
