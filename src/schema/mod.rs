//! # Schema Module
//!
//! Expands internal `$ref` pointers in schema fragments into inline trees.

pub mod resolver;

pub use resolver::{MAX_RESOLVE_DEPTH, SchemaResolver};
