use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "signup=info";

/// Install the global subscriber.
///
/// Logs go to stderr so they never interleave with the form on stdout.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
