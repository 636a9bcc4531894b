//! Log filter setup

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Filter for the CLI: INFO, or DEBUG when verbose, unless `RUST_LOG` is set
pub fn log_filter(verbose: bool) -> EnvFilter {
    filter_for(verbose, std::env::var("RUST_LOG").ok().as_deref())
}

fn filter_for(verbose: bool, directives: Option<&str>) -> EnvFilter {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(directives.unwrap_or_default())
}
