use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::quote::models::LineItem;
use crate::render::traits::Validator;
use crate::render::validation::{validate_price, validate_required, ValidationErrors};

/// A reusable service entry, keyed by its unique name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ServiceCatalogEntry {
    #[schema(example = "Landing page")]
    pub name: String,
    #[schema(example = "Design and copy for the product landing page")]
    pub description: String,
    #[schema(value_type = f64, example = 1000.0)]
    pub real_price: Decimal,
    #[schema(value_type = f64, example = 800.0)]
    pub applied_price: Decimal,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateEntryRequest {
    #[schema(example = "Landing page")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[schema(value_type = f64, example = 1000.0)]
    pub real_price: Decimal,
    #[schema(value_type = f64, example = 800.0)]
    pub applied_price: Decimal,
}

impl Validator for CreateEntryRequest {
    fn validate(&self) -> Result<(), String> {
        let mut errors = ValidationErrors::new();
        validate_required(&self.name, "name", "Entry name", &mut errors);
        validate_price(self.real_price, "real_price", "Real price", &mut errors);
        validate_price(
            self.applied_price,
            "applied_price",
            "Applied price",
            &mut errors,
        );
        errors.into_result()
    }
}

impl CreateEntryRequest {
    pub fn into_entry(self) -> ServiceCatalogEntry {
        ServiceCatalogEntry {
            name: self.name,
            description: self.description,
            real_price: self.real_price,
            applied_price: self.applied_price,
        }
    }
}

/// Pre-fill line-item defaults from a catalog lookup.
///
/// Pure function over the catalog map; never touches a quote session.
pub fn prefill(
    name: &str,
    catalog: &BTreeMap<String, ServiceCatalogEntry>,
) -> Option<LineItem> {
    catalog.get(name).map(|entry| LineItem {
        label: entry.name.clone(),
        frequency: String::new(),
        description: entry.description.clone(),
        real_price: entry.real_price,
        applied_price: entry.applied_price,
    })
}
