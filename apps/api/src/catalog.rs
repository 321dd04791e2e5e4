//! Offerings catalog: the one injected data source of the drafting pipeline.
//!
//! Sources are pluggable behind `CatalogSource`, carried in `AppState` as
//! `Arc<dyn CatalogSource>`. File and HTTP sources cache the parsed catalog
//! after the first successful load; the catalog is immutable for the process
//! lifetime, so the cache can never go stale.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::errors::AppError;

/// A single catalog entry: an offering and the keywords that make it relevant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offering {
    pub name: String,
    /// Benefit description rendered into the pitch bullet.
    pub value: String,
    /// Lowercase keywords; compared case-insensitively against extracted keywords.
    pub triggers: Vec<String>,
}

/// The catalog source trait. Implement this to swap backends without touching
/// the pipeline, handlers, or caller code.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Arc<Vec<Offering>>, AppError>;
}

/// Reads the catalog from a local JSON file. The default source.
pub struct FileCatalogSource {
    path: PathBuf,
    cached: RwLock<Option<Arc<Vec<Offering>>>>,
}

impl FileCatalogSource {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            cached: RwLock::new(None),
        }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn load(&self) -> Result<Arc<Vec<Offering>>, AppError> {
        if let Some(catalog) = self.cached.read().await.clone() {
            return Ok(catalog);
        }

        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            AppError::CatalogLoad(format!("failed to read {}: {e}", self.path.display()))
        })?;
        let offerings: Vec<Offering> = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::CatalogLoad(format!("failed to parse {}: {e}", self.path.display()))
        })?;

        let catalog = Arc::new(offerings);
        *self.cached.write().await = Some(catalog.clone());
        info!(
            "Loaded {} offerings from {}",
            catalog.len(),
            self.path.display()
        );
        Ok(catalog)
    }
}

/// Fetches the catalog from a static HTTP resource.
/// A non-success status counts as a load failure.
pub struct HttpCatalogSource {
    url: String,
    client: reqwest::Client,
    cached: RwLock<Option<Arc<Vec<Offering>>>>,
}

impl HttpCatalogSource {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
            cached: RwLock::new(None),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn load(&self) -> Result<Arc<Vec<Offering>>, AppError> {
        if let Some(catalog) = self.cached.read().await.clone() {
            return Ok(catalog);
        }

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            AppError::CatalogLoad(format!("request to {} failed: {e}", self.url))
        })?;

        if !response.status().is_success() {
            return Err(AppError::CatalogLoad(format!(
                "{} returned status {}",
                self.url,
                response.status()
            )));
        }

        let offerings: Vec<Offering> = response.json().await.map_err(|e| {
            AppError::CatalogLoad(format!("failed to parse catalog from {}: {e}", self.url))
        })?;

        let catalog = Arc::new(offerings);
        *self.cached.write().await = Some(catalog.clone());
        info!("Loaded {} offerings from {}", catalog.len(), self.url);
        Ok(catalog)
    }
}

/// In-memory catalog. Used by tests and for embedding a fixed catalog.
pub struct StaticCatalogSource(pub Vec<Offering>);

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn load(&self) -> Result<Arc<Vec<Offering>>, AppError> {
        Ok(Arc::new(self.0.clone()))
    }
}
