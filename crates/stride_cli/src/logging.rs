//! Log filter selection and subscriber setup.

pub const LOG_LEVEL_ENV: &str = "STRIDE_LOG_LEVEL";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// `STRIDE_LOG_LEVEL`, falling back to `RUST_LOG`, then `info`.
pub fn log_filter_with<F>(mut get: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    get(LOG_LEVEL_ENV)
        .or_else(|| get("RUST_LOG"))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

pub fn env_filter(log_env: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_new(log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber, logging to stderr so stdout stays clean for
/// rendered summaries. Returns the filter in effect.
pub fn init() -> String {
    let log_env = log_filter_with(|k| std::env::var(k).ok());
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter(&log_env))
        .init();
    log_env
}
