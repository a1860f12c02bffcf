//! Tracing setup and span constructors.

use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to `info`. Calling this
/// twice is harmless: the second install is ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .try_init();
}

/// Standardized span constructors.
pub mod spans {
    use tracing::{Span, info_span};

    /// Span for one SILC session, keyed by `host:port`.
    pub fn bridge(server: &str) -> Span {
        info_span!("bridge", server = %server)
    }
}
