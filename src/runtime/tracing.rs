/// Initializes structured logging for the process.
///
/// Verbosity is driven by the `RUST_LOG` environment variable:
/// - `RUST_LOG=info` — lifecycle events and order activity
/// - `RUST_LOG=debug` — plus cart changes, refreshes, and no-op transitions
/// - `RUST_LOG=gourmet_pos=debug` — debug for this crate only
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
