//! Test logging — tracing subscriber setup for tests.

use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber that writes through the test harness.
///
/// The filter defaults to `info` and honors `RUST_LOG`. Safe to call from
/// every test; only the first call installs a subscriber.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}
