//! Tests for the JSON flat-file catalog store.

use std::collections::BTreeMap;

use quotegen_server::catalog::model::ServiceCatalogEntry;
use quotegen_server::catalog::store::{CatalogStore, JsonFileCatalog};

fn entry(name: &str) -> ServiceCatalogEntry {
    ServiceCatalogEntry {
        name: name.to_string(),
        description: format!("{} description", name),
        real_price: "100".parse().unwrap(),
        applied_price: "90".parse().unwrap(),
    }
}

#[tokio::test]
async fn test_load_missing_file_yields_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileCatalog::new(dir.path().join("catalog.json"));

    let entries = store.load().await.unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_save_then_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let store = JsonFileCatalog::new(&path);

    let mut entries = BTreeMap::new();
    entries.insert("Landing page".to_string(), entry("Landing page"));
    entries.insert("SEO audit".to_string(), entry("SEO audit"));

    store.save(&entries).await.unwrap();
    assert!(path.exists());

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded, entries);
}

#[tokio::test]
async fn test_save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/data/catalog.json");
    let store = JsonFileCatalog::new(&path);

    let mut entries = BTreeMap::new();
    entries.insert("Landing page".to_string(), entry("Landing page"));

    store.save(&entries).await.unwrap();
    assert!(path.exists());
}

#[tokio::test]
async fn test_load_corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, b"{ not json").unwrap();

    let store = JsonFileCatalog::new(&path);
    let err = store.load().await.unwrap_err();
    assert!(err.contains("not valid JSON"));
}

#[tokio::test]
async fn test_save_to_unwritable_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    // The target path is an existing directory, so the write must fail.
    let store = JsonFileCatalog::new(dir.path());

    let err = store.save(&BTreeMap::new()).await.unwrap_err();
    assert!(err.contains("failed to write catalog file"));
}
