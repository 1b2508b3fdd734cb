use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod ui;

use filmrust::{ProviderConfig, StreamProvider};

#[derive(Parser)]
#[command(name = "filmrust", version, about = "Extract streaming links from movie and series pages")]
struct Cli {
    /// Movie or series page URL
    url: Option<String>,

    /// Request timeout in seconds
    #[arg(
        long,
        default_value_t = filmrust::config::DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// Session cookie sent to the player-data endpoint
    #[arg(long)]
    cookie: Option<String>,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG if set, otherwise info (debug with --verbose)
    let default_filter = if cli.verbose { "filmrust=debug" } else { "filmrust=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let url = match &cli.url {
        Some(u) => u.clone(),
        None => ui::prompt_url("Enter movie or series URL")?,
    };

    let mut config = ProviderConfig::default().with_timeout(cli.timeout);
    if let Some(cookie) = &cli.cookie {
        config = config.with_session_cookie(cookie.clone());
    }

    let provider = StreamProvider::with_config(&url, config)
        .with_context(|| format!("Cannot extract links from {}", url))?;

    tracing::info!(
        kind = if provider.is_movie() { "Film" } else { "Serial" },
        id = provider.content_id(),
        "Fetching player data"
    );

    let spinner = ui::spinner("Fetching player data...");
    let data = provider.get_stream_data().await;
    spinner.finish_and_clear();
    let data = data.context("Failed to fetch stream data")?;

    let json = if cli.compact {
        serde_json::to_string(&data)?
    } else {
        serde_json::to_string_pretty(&data)?
    };
    println!("{}", json);

    Ok(())
}
