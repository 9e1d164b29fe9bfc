use tracing_subscriber::{fmt, EnvFilter};

/// Installs the stderr diagnostics subscriber.
///
/// `RUST_LOG` wins over `default_filter`. Set `PATTERNS_LOG_JSON=1` for
/// JSON lines. Calling this more than once is harmless.
pub fn init_logging(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let use_json = std::env::var("PATTERNS_LOG_JSON")
        .map(|value| value == "1")
        .unwrap_or(false);

    if use_json {
        let _ = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .json()
            .with_writer(std::io::stderr)
            .try_init();
    } else {
        let _ = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }
}
