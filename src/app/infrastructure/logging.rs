//! Tracing subscriber setup
//!
//! Shared between the binary and tests so both filter the same way.

use std::io;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Default directive when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber. Returns false if one was already set.
pub fn init() -> bool {
    tracing::subscriber::set_global_default(build_subscriber(io::stderr)).is_ok()
}

/// Build a subscriber honouring `RUST_LOG` that formats events to `writer`.
pub fn build_subscriber<W>(writer: W) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'a> fmt::MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_target(false))
        .with(env_filter)
}
