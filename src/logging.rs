use tracing_subscriber::EnvFilter;

/// Initialize tracing output for the binary.
///
/// Defaults to warnings from this crate only; the `RUST_LOG` env var
/// overrides the default filter if set.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("evcal=warn"));
    // stdout carries the rendered calendar; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
