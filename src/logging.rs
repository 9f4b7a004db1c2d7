use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Reports go to stdout, so all logging is routed to stderr. The default
/// filter stays quiet unless `--verbose` or `RUST_LOG` says otherwise.
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_filter = if verbose { "sheet_inspector=debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}
