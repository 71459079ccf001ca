//! Query entry points over one document snapshot.
//!
//! [`ApiIndex`] composes search, detail expansion and schema resolution.
//! Without a loaded document every query yields an empty or absent result.

use std::sync::Arc;

use serde_json::Value;

use crate::details::expander;
use crate::details::outputs::ExpandedEndpoint;
use crate::document::ApiDocument;
use crate::schema::SchemaResolver;
use crate::search::{engine, outputs::SearchResult};

/// Number of endpoints expanded by `search_with_details` when no limit is given
pub const DEFAULT_DETAILS_LIMIT: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct ApiIndex {
    document: Option<Arc<ApiDocument>>,
}

impl ApiIndex {
    pub fn new(document: Option<Arc<ApiDocument>>) -> Self {
        Self { document }
    }

    pub fn document(&self) -> Option<&ApiDocument> {
        self.document.as_deref()
    }

    pub fn search(&self, keyword: &str) -> Vec<SearchResult> {
        match self.document() {
            Some(document) => engine::search(document, keyword),
            None => Vec::new(),
        }
    }

    pub fn get_endpoint_details(&self, path: &str, method: &str) -> Option<ExpandedEndpoint> {
        expander::expand(self.document()?, path, method)
    }

    /// Search, then expand the first `limit` matches.
    ///
    /// `None` or a non-positive limit falls back to [`DEFAULT_DETAILS_LIMIT`].
    pub fn search_with_details(&self, keyword: &str, limit: Option<i64>) -> Vec<ExpandedEndpoint> {
        let limit = match limit {
            Some(limit) if limit > 0 => limit as usize,
            _ => DEFAULT_DETAILS_LIMIT,
        };

        self.search(keyword)
            .into_iter()
            .take(limit)
            .filter_map(|result| self.get_endpoint_details(&result.path, &result.method))
            .collect()
    }

    /// Resolve a schema fragment against the loaded document
    pub fn resolve_schema(&self, fragment: &Value, depth: usize) -> Value {
        match self.document() {
            Some(document) => SchemaResolver::new(document).resolve_at(fragment, depth),
            None => fragment.clone(),
        }
    }
}
