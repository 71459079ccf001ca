use rmcp::schemars;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::details::outputs::ApiInfoOutput;
use crate::document::DocumentStore;
use crate::util::{ErrorOutput, to_pretty_json};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetApiDetailsParams {
    #[schemars(description = "The API path (e.g., \"/bi/getHotDisplayList\")")]
    pub path: String,
    #[schemars(description = "The HTTP method (e.g., \"get\", \"post\")")]
    pub method: String,
}

#[derive(Debug, Clone)]
pub struct DetailsTools {
    store: DocumentStore,
}

impl DetailsTools {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    pub async fn get_api_details(&self, params: GetApiDetailsParams) -> String {
        let index = self.store.index().await;

        match index.get_endpoint_details(&params.path, &params.method) {
            Some(endpoint) => to_pretty_json(&endpoint),
            None => ErrorOutput::new(format!(
                "Endpoint not found: {} {}",
                params.method.to_uppercase(),
                params.path
            ))
            .to_json(),
        }
    }

    pub async fn get_api_info(&self) -> String {
        let Some((document, status)) = self.store.snapshot_with_status().await else {
            return ErrorOutput::new("API document is not loaded yet").to_json();
        };

        let info = document.info();
        let output = ApiInfoOutput {
            title: info.title,
            version: info.version,
            description: info.description,
            dialect: document.dialect(),
            path_count: document.path_count(),
            operation_count: document.operations().count(),
            source: status.source,
            loaded_at: status.loaded_at,
        };

        to_pretty_json(&output)
    }
}
