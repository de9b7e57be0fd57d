//! Test logging initialization shared across test binaries.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install the test tracing subscriber once per process.
///
/// Safe to call from every test; later calls are no-ops. The filter is
/// taken from `TEST_LOG`, then `RUST_LOG`, then defaults to `warn` so
/// passing runs stay quiet. Output goes through the test writer so cargo
/// and nextest capture it per test.
pub fn init() {
    INIT.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
