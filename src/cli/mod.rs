//! CLI infrastructure for the arcade
//!
//! Commands for playing tic-tac-toe and connect-four interactively against
//! the remote AI services, or letting two AI seats play each other.

pub mod commands;
pub mod config;
pub mod output;

use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` for this crate with
/// `verbose`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,arcade=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A second install (e.g. from tests) keeps the first subscriber
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
