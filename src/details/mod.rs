//! # Details Module
//!
//! Expands a single (path, method) pair into parameters, request body and
//! responses, with response schemas dereferenced.
//!
//! ## Key Components
//!
//! - [`expander`] - Normalization of one operation
//! - [`raw`] - Typed projections of operation objects
//! - [`tools`] - MCP tool implementations for endpoint details
//! - [`outputs`] - Output types for detail operations

pub mod expander;
pub mod outputs;
pub mod raw;
pub mod tools;

pub use expander::expand;
pub use tools::DetailsTools;
