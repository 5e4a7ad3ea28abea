//! # aura-observability
//!
//! Structured logging for the Aura core: subscriber setup, span macros,
//! and one event helper per notable pipeline occurrence.

pub mod tracing_setup;

pub use tracing_setup::events;
pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};

#[doc(hidden)]
pub use tracing;
