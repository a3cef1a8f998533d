//! Pokedex - An interactive explorer for the PokeAPI
//!
//! Reads commands from stdin and prints results to stdout. Logs go to stderr.

use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{run, Config, PokeApiClient, Repl};

/// Main entry point for the Pokedex.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the API client, which starts the cache reaper
/// 4. Run the command loop until `exit` or end of input
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to warnings only so logs stay out of the way of the prompt,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: api_url={}, cache_ttl={}s, http_timeout={}s, catch_threshold={}",
        config.api_url, config.cache_ttl, config.http_timeout, config.catch_threshold
    );

    let client = PokeApiClient::new(&config)?;
    let mut repl = Repl::new(client, config.catch_threshold);
    info!("Pokedex ready");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run(&mut repl, stdin, &mut stdout).await?;

    info!("Pokedex shutdown complete");
    Ok(())
}
