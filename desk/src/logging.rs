//! Logging setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a stderr subscriber so notices on stdout stay readable.
///
/// `RUST_LOG` overrides the default filter.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("item_desk=info,item_core=warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .init();
}
