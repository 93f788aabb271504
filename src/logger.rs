//! Logging setup for the `pkgviz` binary.
//!
//! Logs always go to stderr so stdout carries only the rendered graph.
//! `RUST_LOG` overrides the default filter unless `--verbose` is given.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pkgviz=debug,pkgviz_core=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("pkgviz=warn,pkgviz_core=warn"))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
