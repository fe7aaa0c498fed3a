//! Environment-driven configuration.
//!
//! Every variable has a default suitable for running locally; a `.env` file
//! is honored when present.

use std::env;
use std::path::PathBuf;

use crate::render::StaticSections;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub catalog_path: PathBuf,
    pub logo_path: PathBuf,
    pub issuer_name: String,
    pub issuer_address: String,
    pub issuer_iban: String,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = StaticSections::default();
        Self {
            bind_addr: env_or("BIND_ADDR", "127.0.0.1:8080"),
            catalog_path: PathBuf::from(env_or("CATALOG_PATH", "./data/catalog.json")),
            logo_path: PathBuf::from(env_or("LOGO_PATH", "./static/logo.png")),
            issuer_name: env_or("ISSUER_NAME", &defaults.issuer_name),
            issuer_address: env_or("ISSUER_ADDRESS", &defaults.issuer_address),
            issuer_iban: env_or("ISSUER_IBAN", &defaults.iban),
        }
    }

    /// Static document sections with the configured issuer identity.
    pub fn static_sections(&self) -> StaticSections {
        StaticSections {
            issuer_name: self.issuer_name.clone(),
            issuer_address: self.issuer_address.clone(),
            iban: self.issuer_iban.clone(),
            signature: format!("Kind regards,\n{}", self.issuer_name),
            ..StaticSections::default()
        }
    }
}
