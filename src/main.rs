use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use xivseed::cli::Cli;
use xivseed::{Fetcher, XivApiClient};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Cli::parse().into_config()?;

    info!("Seeding {} jobs into {}", config.jobs.len(), config.out_dir.display());

    let client = XivApiClient::new(Duration::from_secs(config.timeout_secs))?;
    Fetcher::new(config).run(&client).await?;

    Ok(())
}
