//! Storage-facing models and runtime configuration.

#[cfg(feature = "server")]
pub mod config;
pub mod vehicle;
