use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Initialize tracing on stderr.
///
/// `RUST_LOG` takes precedence over the configured filter. Output goes to
/// stderr so stdout stays reserved for the console. `print_changes` raises
/// the store's target to debug so change lines show up without touching
/// the global filter.
pub fn init_tracing(config: &LoggingConfig) {
    let mut filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));

    if config.print_changes {
        if let Ok(directive) = "tabstore::store=debug".parse() {
            filter = filter.add_directive(directive);
        }
    }

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    // A subscriber may already be installed (tests, embedding apps).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
