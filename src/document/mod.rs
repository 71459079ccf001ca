//! # Document Module
//!
//! Holds the parsed API description and exposes structural access to it.
//!
//! ## Key Components
//!
//! - [`ApiDocument`] - Read-only view over a parsed OpenAPI/Swagger document
//! - [`store`] - Snapshot holder that swaps whole documents atomically
//! - [`loader`] - Fetches documents from URLs or local files

pub mod loader;
pub mod store;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use loader::{DocumentLoader, DocumentSource};
pub use store::{DocumentStatus, DocumentStore};

/// HTTP verbs that may appear as operation keys inside a path item
pub const HTTP_METHODS: &[&str] = &[
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Which API-description convention a document follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// Swagger 2.0: schemas under `definitions`, response `schema` inline
    Swagger2,
    /// OpenAPI 3.x: schemas under `components.schemas`, `content` maps
    #[serde(rename = "openapi3")]
    OpenApi3,
    Unknown,
}

/// Title and version block of a document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub title: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One operation reached through a (path, method) pair
#[derive(Debug, Clone, Copy)]
pub struct OperationRef<'a> {
    pub path: &'a str,
    pub method: &'a str,
    pub operation: &'a Map<String, Value>,
}

/// A parsed API description.
///
/// The document is kept as a generic JSON tree so `$ref` pointers can be
/// walked without knowing the shape of their targets. Key order is the
/// declared order.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiDocument {
    root: Value,
}

impl ApiDocument {
    /// Wrap a parsed JSON value. Returns `None` unless the root is an object.
    pub fn from_value(root: Value) -> Option<Self> {
        root.is_object().then_some(Self { root })
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn dialect(&self) -> Dialect {
        if self.root.get("swagger").is_some() {
            Dialect::Swagger2
        } else if self.root.get("openapi").is_some() {
            Dialect::OpenApi3
        } else {
            Dialect::Unknown
        }
    }

    pub fn info(&self) -> DocumentInfo {
        let info = self.root.get("info");
        let field = |name: &str| {
            info.and_then(|i| i.get(name))
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        DocumentInfo {
            title: field("title").unwrap_or_default(),
            version: field("version").unwrap_or_default(),
            description: field("description"),
        }
    }

    fn paths(&self) -> Option<&Map<String, Value>> {
        self.root.get("paths").and_then(Value::as_object)
    }

    pub fn path_count(&self) -> usize {
        self.paths().map_or(0, Map::len)
    }

    /// Iterate every operation in declared path order, then declared method order.
    pub fn operations(&self) -> impl Iterator<Item = OperationRef<'_>> {
        self.paths()
            .into_iter()
            .flat_map(|paths| paths.iter())
            .filter_map(|(path, item)| item.as_object().map(|item| (path, item)))
            .flat_map(|(path, item)| {
                item.iter().filter_map(move |(method, operation)| {
                    if !is_http_method(method) {
                        return None;
                    }
                    operation.as_object().map(|operation| OperationRef {
                        path: path.as_str(),
                        method: method.as_str(),
                        operation,
                    })
                })
            })
    }

    /// Look up one operation. `path` is matched exactly, `method` case-insensitively.
    pub fn operation(&self, path: &str, method: &str) -> Option<OperationRef<'_>> {
        let (path, item) = self.paths()?.get_key_value(path)?;
        let method = method.to_lowercase();
        if !is_http_method(&method) {
            return None;
        }
        let (method, operation) = item.as_object()?.get_key_value(&method)?;

        Some(OperationRef {
            path: path.as_str(),
            method: method.as_str(),
            operation: operation.as_object()?,
        })
    }
}

fn is_http_method(key: &str) -> bool {
    HTTP_METHODS.contains(&key)
}
