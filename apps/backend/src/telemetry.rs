use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the process-wide tracing subscriber: JSON lines on stdout,
/// filtered by `RUST_LOG` with an `info` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json_layer = fmt::layer()
        .json()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .init();
}
