//! Observability setup for applications that render Block Kit layouts.
//!
//! The builders in `blockkit-core` only emit `tracing` events; this crate
//! installs the subscriber that collects them.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, shutdown_tracing};
