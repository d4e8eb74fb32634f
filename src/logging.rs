// Logging setup - tracing events to stderr, filtered by RUST_LOG
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins unless `verbose` is set; the fallback level is `warn`.
pub fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("pdfvocab=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second init is a no-op
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init();
}
