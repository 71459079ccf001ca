use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::document::ApiDocument;
use crate::index::ApiIndex;

#[derive(Debug)]
struct LoadedDocument {
    document: Arc<ApiDocument>,
    source: String,
    loaded_at: DateTime<Utc>,
}

/// Load state of the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentStatus {
    pub loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<DateTime<Utc>>,
}

/// Shared holder for the current document snapshot.
///
/// Readers clone the inner `Arc` and work on that snapshot; a reload
/// replaces the whole document under the write lock.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    current: Arc<RwLock<Option<LoadedDocument>>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `document`
    pub fn with_document(document: ApiDocument, source: impl Into<String>) -> Self {
        Self {
            current: Arc::new(RwLock::new(Some(LoadedDocument {
                document: Arc::new(document),
                source: source.into(),
                loaded_at: Utc::now(),
            }))),
        }
    }

    /// Swap in a new document
    pub async fn replace(&self, document: ApiDocument, source: impl Into<String>) {
        let loaded = LoadedDocument {
            document: Arc::new(document),
            source: source.into(),
            loaded_at: Utc::now(),
        };
        *self.current.write().await = Some(loaded);
    }

    /// The current document, or `None` before the first successful load
    pub async fn snapshot(&self) -> Option<Arc<ApiDocument>> {
        self.current
            .read()
            .await
            .as_ref()
            .map(|loaded| loaded.document.clone())
    }

    /// Query entry point over the current snapshot
    pub async fn index(&self) -> ApiIndex {
        ApiIndex::new(self.snapshot().await)
    }

    /// The current document together with the status it was loaded under
    pub async fn snapshot_with_status(&self) -> Option<(Arc<ApiDocument>, DocumentStatus)> {
        self.current.read().await.as_ref().map(|loaded| {
            (
                loaded.document.clone(),
                DocumentStatus {
                    loaded: true,
                    source: Some(loaded.source.clone()),
                    loaded_at: Some(loaded.loaded_at),
                },
            )
        })
    }

    pub async fn status(&self) -> DocumentStatus {
        match self.snapshot_with_status().await {
            Some((_, status)) => status,
            None => DocumentStatus {
                loaded: false,
                source: None,
                loaded_at: None,
            },
        }
    }
}
