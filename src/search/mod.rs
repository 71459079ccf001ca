//! # Search Module
//!
//! Keyword search over every operation of the loaded document.
//!
//! Matching is case-insensitive substring containment. A query containing
//! whitespace is split into tokens and every token has to match. Results are
//! returned in document order without scoring.
//!
//! ## Key Components
//!
//! - [`engine`] - Builds searchable text per operation and filters
//! - [`tokenizer`] - Query normalization and matching
//! - [`tools`] - MCP tool implementations for search operations
//! - [`outputs`] - Output types for search operations

pub mod engine;
pub mod outputs;
pub mod tokenizer;
pub mod tools;

pub use engine::search;
pub use outputs::SearchResult;
pub use tools::SearchTools;
