//! Document fetching
//!
//! Loads an API description from a remote URL or a local file, parses it
//! and hands it to a [`DocumentStore`].

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::document::{ApiDocument, DocumentStore};

/// Where a document comes from
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentSource {
    Url(String),
    LocalPath(PathBuf),
}

impl DocumentSource {
    /// Detect the source kind from a URL or path string
    pub fn detect(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            Self::Url(source.to_string())
        } else if let Some(path) = source.strip_prefix("file://") {
            Self::LocalPath(PathBuf::from(path))
        } else {
            Self::LocalPath(PathBuf::from(source))
        }
    }
}

impl std::fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::LocalPath(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetches and parses API documents
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    source: DocumentSource,
    client: reqwest::Client,
}

impl DocumentLoader {
    pub fn new(source: DocumentSource, timeout: Duration) -> Result<Self> {
        let client = Self::build_http_client(timeout)?;
        Ok(Self { source, client })
    }

    fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
        let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        tracing::debug!("Creating HTTP client with User-Agent: {}", user_agent);

        reqwest::Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")
    }

    pub fn source(&self) -> &DocumentSource {
        &self.source
    }

    /// Fetch and parse the document
    pub async fn load(&self) -> Result<ApiDocument> {
        let body = match &self.source {
            DocumentSource::Url(url) => self.fetch(url).await?,
            DocumentSource::LocalPath(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read API document from {}", path.display()))?,
        };

        parse_document(&body)
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("Fetching API document from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch API documentation from {url}"))?;

        if !response.status().is_success() {
            bail!(
                "Failed to fetch API documentation from {}: HTTP {}",
                url,
                response.status()
            );
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {url}"))
    }

    /// Load the document and swap it into `store`.
    ///
    /// On failure the store keeps whatever snapshot it already had.
    pub async fn load_into(&self, store: &DocumentStore) -> Result<()> {
        match self.load().await {
            Ok(document) => {
                let operations = document.operations().count();
                let info = document.info();
                store.replace(document, self.source.to_string()).await;
                tracing::info!(
                    "Loaded API document '{}' {} from {} ({} operations)",
                    info.title,
                    info.version,
                    self.source,
                    operations
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to load API document from {}: {:?}", self.source, e);
                Err(e)
            }
        }
    }
}

/// Parse a JSON API description
pub fn parse_document(body: &str) -> Result<ApiDocument> {
    let value: Value = serde_json::from_str(body).context("Failed to parse API document")?;

    match ApiDocument::from_value(value) {
        Some(document) => Ok(document),
        None => bail!("API document root must be a JSON object"),
    }
}
