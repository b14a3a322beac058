use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Filtering follows `RUST_LOG`; events go to
/// stderr so stdout stays clean for `--stdout`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
