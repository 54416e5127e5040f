use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Install the stderr subscriber; `RUST_LOG` overrides the default `warn` level
pub fn register_logger() {
    let log_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        .with_writer(std::io::stderr)
        .init();
}
