use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::details::tools::{DetailsTools, GetApiDetailsParams};
use crate::document::DocumentStore;
use crate::search::tools::{SearchApiParams, SearchApiWithDetailsParams, SearchTools};

#[derive(Debug, Clone)]
pub struct SwaggerService {
    store: DocumentStore,
    search_tools: SearchTools,
    details_tools: DetailsTools,
    tool_router: ToolRouter<Self>,
}

impl SwaggerService {
    pub fn new(store: DocumentStore) -> Self {
        Self {
            search_tools: SearchTools::new(store.clone()),
            details_tools: DetailsTools::new(store.clone()),
            store,
            tool_router: Self::tool_router(),
        }
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }
}

#[tool_router]
impl SwaggerService {
    // Search tools
    #[tool(
        description = "Search for API endpoints using a keyword and get FULL DETAILS (parameters, request body, response schema) for all matching endpoints in ONE call. This is the RECOMMENDED tool for most queries about internal API documentation. Use this instead of search_api + get_api_details to save time."
    )]
    pub async fn search_api_with_details(
        &self,
        params: Parameters<SearchApiWithDetailsParams>,
    ) -> String {
        self.search_tools.search_api_with_details(params.0).await
    }

    #[tool(
        description = "Search for API endpoints using a keyword. Returns ONLY a list of matching paths and methods WITHOUT details. Use search_api_with_details instead if you need full information."
    )]
    pub async fn search_api(&self, params: Parameters<SearchApiParams>) -> String {
        self.search_tools.search_api(params.0).await
    }

    // Details tools
    #[tool(
        description = "Get detailed information about a SPECIFIC API endpoint when you already know the exact path and method. If you are searching by keyword, use search_api_with_details instead."
    )]
    pub async fn get_api_details(&self, params: Parameters<GetApiDetailsParams>) -> String {
        self.details_tools.get_api_details(params.0).await
    }

    #[tool(
        description = "Get the title, version and size of the loaded API documentation, and where and when it was loaded. Use to check that documentation is available before searching."
    )]
    pub async fn get_api_info(&self) -> String {
        self.details_tools.get_api_info().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for SwaggerService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation::from_build_env(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "MCP server for searching OpenAPI/Swagger API documentation. Use search_api_with_details to find endpoints by keyword and get their parameters, request body and fully resolved response schemas in one call. Multi-word keywords must all match. Use get_api_details when you already know the exact path and method, and get_api_info to check which documentation is loaded.".to_string(),
            ),
            ..Default::default()
        }
    }
}
