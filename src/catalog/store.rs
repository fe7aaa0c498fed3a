//! Flat-file persistence for the service catalog.
//!
//! The catalog is a JSON object keyed by entry name, loaded once at startup
//! and rewritten in full on every explicit save.

use anyhow::Context;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::model::ServiceCatalogEntry;

/// Storage seam for the catalog. The production implementation writes a local
/// JSON file; tests swap in an in-memory mock.
#[async_trait::async_trait]
pub trait CatalogStore {
    async fn load(&self) -> Result<BTreeMap<String, ServiceCatalogEntry>, String>;
    async fn save(&self, entries: &BTreeMap<String, ServiceCatalogEntry>) -> Result<(), String>;
}

/// JSON flat-file implementation of [`CatalogStore`].
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load_inner(&self) -> anyhow::Result<BTreeMap<String, ServiceCatalogEntry>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let bytes = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("failed to read catalog file {}", self.path.display()))?;
        let entries = serde_json::from_slice(&bytes)
            .with_context(|| format!("catalog file {} is not valid JSON", self.path.display()))?;
        Ok(entries)
    }

    async fn save_inner(
        &self,
        entries: &BTreeMap<String, ServiceCatalogEntry>,
    ) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| *p != Path::new("")) {
            tokio::fs::create_dir_all(parent).await.with_context(|| {
                format!("failed to create catalog directory {}", parent.display())
            })?;
        }
        let json = serde_json::to_vec_pretty(entries).context("failed to serialize catalog")?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("failed to write catalog file {}", self.path.display()))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl CatalogStore for JsonFileCatalog {
    async fn load(&self) -> Result<BTreeMap<String, ServiceCatalogEntry>, String> {
        self.load_inner().await.map_err(|e| format!("{:#}", e))
    }

    async fn save(&self, entries: &BTreeMap<String, ServiceCatalogEntry>) -> Result<(), String> {
        self.save_inner(entries).await.map_err(|e| format!("{:#}", e))
    }
}
