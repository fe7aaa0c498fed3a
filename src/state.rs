//! Shared application state.
//!
//! One process serves one user: quote sessions live in memory and die with
//! the process, while the service catalog is loaded once at startup and
//! written back through the store on explicit saves.

use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::model::ServiceCatalogEntry;
use crate::catalog::store::{CatalogStore, JsonFileCatalog};
use crate::config::AppConfig;
use crate::quote::models::QuoteModel;
use crate::render::{QuoteDocumentGenerator, StaticSections};

pub struct AppState {
    pub quotes: RwLock<HashMap<Uuid, QuoteModel>>,
    pub catalog: RwLock<BTreeMap<String, ServiceCatalogEntry>>,
    pub store: Arc<dyn CatalogStore + Send + Sync>,
    pub generator: QuoteDocumentGenerator,
    pub logo_path: PathBuf,
}

impl AppState {
    pub async fn new(config: &AppConfig) -> Self {
        let store = Arc::new(JsonFileCatalog::new(&config.catalog_path));
        Self::with_store(store, config.static_sections(), config.logo_path.clone()).await
    }

    /// Build state around an explicit store; used by `new` and by tests.
    pub async fn with_store(
        store: Arc<dyn CatalogStore + Send + Sync>,
        sections: StaticSections,
        logo_path: PathBuf,
    ) -> Self {
        // A broken catalog file must not prevent startup; quoting works
        // without the catalog.
        let catalog = match store.load().await {
            Ok(entries) => {
                log::info!("catalog loaded with {} entries", entries.len());
                entries
            }
            Err(e) => {
                log::warn!("catalog unavailable, starting empty: {}", e);
                BTreeMap::new()
            }
        };

        Self {
            quotes: RwLock::new(HashMap::new()),
            catalog: RwLock::new(catalog),
            store,
            generator: QuoteDocumentGenerator::new(sections),
            logo_path,
        }
    }
}
