use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test tracing
/// This function sets up tracing for tests with a consistent format.
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_test_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dbconn_core=debug,dbconn=debug"));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_test_writer()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
