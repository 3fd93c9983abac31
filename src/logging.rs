use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Sends `tracing` output to stderr, filtered by `RUST_LOG` (default `warn`).
///
/// Stdout is left alone because command results are printed there.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(err) = installed {
        debug!(%err, "log subscriber already installed");
    }
}
