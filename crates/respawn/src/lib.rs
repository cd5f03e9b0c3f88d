//! The shared library for Respawn, a Rust/WASM gaming discussion forum.
//!
//! This library holds everything the frontend needs that is not rendering:
//! the HTTP client and forum API, data structures, sentiment bucketing, form
//! validation, per-view load state, configuration, logging and macros.

pub mod api;
pub mod client;
pub mod config;
pub mod data;
pub mod draft;
pub mod errors;
pub mod id;
pub mod load;
pub mod log;
pub mod macros;
pub mod sentiment;
pub mod theme;

#[cfg(test)]
pub(crate) mod testing;

pub use serde;
pub use serde_json;
pub use tracing;
