//! Fleet configuration for gen-slaves.
//!
//! This module defines the Config struct that holds everything a generation
//! run needs as explicit inputs: the template path, the output directory and
//! the ordered worker list. It supports forward-compatible YAML parsing
//! (unknown fields are ignored) and falls back to the built-in fleet.

mod model;
mod operations;


// Re-export public API
pub use model::{Config, DEFAULT_OUTPUT_DIR, DEFAULT_TEMPLATE};
