use tracing_subscriber::EnvFilter;

/// Initialize tracing and bridge `log` records into `tracing`.
/// Calling this more than once is safe; later attempts are ignored.
pub fn init_tracing(verbose: bool) {
    let _ = tracing_log::LogTracer::init();

    // Explicit verbose flag wins, otherwise RUST_LOG, otherwise info
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .ok();
}
