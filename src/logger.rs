pub use tracing::{debug, error, info, instrument, trace, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

const DEFAULT_FILTER: &str = "info";

fn build_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Close events for pipeline spans are only worth the noise at debug level.
fn span_events(filter: &EnvFilter) -> FmtSpan {
    let verbose = filter.to_string().contains("debug") || filter.to_string().contains("trace");
    if verbose {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    }
}

/// Install the global subscriber, honouring `RUST_LOG`.
///
/// Panics if a global subscriber is already set; see [`try_init`].
pub fn init() {
    init_with_default(DEFAULT_FILTER);
}

/// Like [`init`], with a fallback filter for when `RUST_LOG` is unset.
pub fn init_with_default(default: &str) {
    if let Err(e) = try_init_with_default(default) {
        panic!("failed to install tracing subscriber: {e}");
    }
}

/// Non-panicking variant of [`init`] for tests and embedders.
pub fn try_init() -> Result<(), TryInitError> {
    try_init_with_default(DEFAULT_FILTER)
}

fn try_init_with_default(default: &str) -> Result<(), TryInitError> {
    let env_filter = build_filter(default);
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(span_events(&env_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
}
