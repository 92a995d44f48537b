use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes console logging for binaries and tests embedding this
/// crate. Libraries should not install a subscriber on their own, so
/// nothing here runs unless the embedder calls it.
pub fn init_logging() {
    let console_layer = fmt::layer().with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("wikilist=info".parse().unwrap()))
        .with(console_layer)
        .init();
}
