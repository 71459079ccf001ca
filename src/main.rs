use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use tracing_subscriber::EnvFilter;

use swagger_mcp::SwaggerService;
use swagger_mcp::document::{DocumentLoader, DocumentSource, DocumentStore};

/// MCP server for searching OpenAPI/Swagger documentation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL or local path of the OpenAPI/Swagger JSON document
    #[arg(long, env = "SWAGGER_URL")]
    swagger_url: String,

    /// Timeout for fetching the document, in seconds
    #[arg(long, env = "SWAGGER_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing to stderr to avoid conflicts with stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting Swagger MCP server on stdio...");

    let store = DocumentStore::new();
    let loader = DocumentLoader::new(
        DocumentSource::detect(&args.swagger_url),
        Duration::from_secs(args.timeout_secs),
    )?;

    // Queries answer with empty results until the document arrives.
    // A failed load is logged by the loader.
    let background_store = store.clone();
    tokio::spawn(async move {
        let _ = loader.load_into(&background_store).await;
    });

    let service = SwaggerService::new(store)
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("serving error: {:?}", e);
        })?;

    service.waiting().await?;
    Ok(())
}
