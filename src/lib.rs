//! DevOps tutor: a client controller for the `/api/tutor` endpoints and a
//! small demo HTTP responder.

pub mod client;
pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod server;

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber on stderr, keeping stdout for program
/// output. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
