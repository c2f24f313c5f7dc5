//! Opt-in log output for embedding applications and tests.
//!
//! The evaluator only emits `tracing` events; it never installs a
//! subscriber on its own. Embedders that already run a subscriber get the
//! events there. Everyone else can call [`init_tracing`].

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Print evaluator events to stderr, filtered by `RUST_LOG`.
///
/// - `RUST_LOG=kon_eval=debug`: function/member dispatch spans, context
///   forks and function registration
/// - `RUST_LOG=kon_eval=trace`: adds variable bindings and signals
///   crossing block boundaries
///
/// Without `RUST_LOG` nothing is installed. The first call decides; later
/// calls return immediately. A global subscriber installed by the host
/// beforehand is kept.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var_os("RUST_LOG").is_none() {
            return;
        }
        let installed = tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .try_init();
        if installed.is_err() {
            tracing::debug!("keeping the host's tracing subscriber");
        }
    });
}
