use rmcp::schemars;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::document::DocumentStore;
use crate::util::to_pretty_json;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchApiParams {
    #[schemars(
        description = "The keyword to search for (e.g., \"user\", \"order\", \"getHotDisplayList\")"
    )]
    pub keyword: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchApiWithDetailsParams {
    #[schemars(
        description = "The keyword to search for (e.g., \"user list\", \"getHotDisplayList\", \"order\"). Multiple words must all match"
    )]
    pub keyword: String,
    #[schemars(description = "Maximum number of results to return (default: 5)")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct SearchTools {
    store: DocumentStore,
}

impl SearchTools {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// List matching endpoints without details
    pub async fn search_api(&self, params: SearchApiParams) -> String {
        let index = self.store.index().await;
        let results = index.search(&params.keyword);
        tracing::debug!(
            "search_api '{}' matched {} endpoints",
            params.keyword,
            results.len()
        );

        to_pretty_json(&results)
    }

    /// Search and expand the first matches in one call
    pub async fn search_api_with_details(&self, params: SearchApiWithDetailsParams) -> String {
        let index = self.store.index().await;
        let endpoints = index.search_with_details(&params.keyword, params.limit);
        tracing::debug!(
            "search_api_with_details '{}' expanded {} endpoints",
            params.keyword,
            endpoints.len()
        );

        if endpoints.is_empty() {
            return format!(
                "No API endpoints found matching keyword: \"{}\"",
                params.keyword
            );
        }

        to_pretty_json(&endpoints)
    }
}
