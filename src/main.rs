use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::runtime::Handle;

use tabstore::config::{Config, FactSource, FactsConfig};
use tabstore::console;
use tabstore::effects::{Clock, EffectRunner, SystemClock};
use tabstore::facts::{FactClient, LiveFactClient, MockFactClient, StaticFactClient};
use tabstore::logging::init_tracing;
use tabstore::store::Store;
use tabstore::ui::app::AppState;

#[derive(Debug, Parser)]
#[command(name = "tabstore", version, about = "Counter and profile tabs driven from the terminal")]
struct Cli {
    /// Config file (defaults to ~/.config/tabstore/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where number facts come from
    #[arg(long, value_enum)]
    facts: Option<FactSource>,

    /// Log every intent and state change
    #[arg(long)]
    print_changes: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    if let Some(source) = cli.facts {
        config.facts.source = source;
        config.validate()?;
    }
    if cli.print_changes {
        config.logging.print_changes = true;
    }

    init_tracing(&config.logging);
    tracing::info!(config = %path.display(), source = ?config.facts.source, "Starting");

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let facts = build_fact_client(&config.facts, Arc::clone(&clock))?;
    let runner = EffectRunner::new(Handle::current(), clock, facts);
    let store = Store::new(AppState::default(), runner)
        .with_change_logging(config.logging.print_changes);

    console::run(store).await.context("console I/O failed")?;
    Ok(())
}

fn build_fact_client(
    config: &FactsConfig,
    clock: Arc<dyn Clock>,
) -> anyhow::Result<Arc<dyn FactClient>> {
    let client: Arc<dyn FactClient> = match config.source {
        FactSource::Live => {
            let client =
                LiveFactClient::new(config).context("building HTTP client for fact lookups")?;
            tracing::debug!(base_url = client.base_url(), "Using live fact service");
            Arc::new(client)
        }
        FactSource::Mock => Arc::new(MockFactClient::new(
            clock,
            Duration::from_millis(config.mock_latency_ms),
        )),
        FactSource::Static => Arc::new(StaticFactClient),
    };
    Ok(client)
}
