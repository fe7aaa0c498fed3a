use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::render::traits::Validator;
use crate::render::validation::{validate_price, validate_required, ValidationErrors};

/// Fixed VAT rate applied when a quote includes VAT.
pub fn vat_rate() -> Decimal {
    Decimal::new(22, 2)
}

/// The kind of commercial document a session produces.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Quote,
    ProformaInvoice,
}

impl DocumentKind {
    /// Human-readable title used for the document heading.
    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::Quote => "Quote",
            DocumentKind::ProformaInvoice => "Proforma Invoice",
        }
    }

    /// Label used in the exported filename (no spaces).
    pub fn file_label(&self) -> &'static str {
        match self {
            DocumentKind::Quote => "Quote",
            DocumentKind::ProformaInvoice => "ProformaInvoice",
        }
    }
}

/// A single line of the quote table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct LineItem {
    #[schema(example = "Landing page")]
    pub label: String,
    #[schema(example = "one-time")]
    pub frequency: String,
    #[schema(example = "Design and copy for the product landing page")]
    pub description: String,
    #[schema(value_type = f64, example = 1000.0)]
    pub real_price: Decimal,
    #[schema(value_type = f64, example = 800.0)]
    pub applied_price: Decimal,
}

/// Header fields shared by the whole document.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct QuoteHeader {
    pub kind: DocumentKind,
    #[schema(example = "2026-08-05")]
    pub date: NaiveDate,
    #[schema(example = "88")]
    pub number: String,
    #[schema(example = "Rossi Srl")]
    pub client: String,
    #[schema(example = "Strategic services for a product launch")]
    pub subject: String,
    pub include_vat: bool,
}

/// Derived monetary totals. Never stored, always recomputed from the items.
#[derive(Debug, Serialize, Clone, PartialEq, ToSchema)]
pub struct Totals {
    #[schema(value_type = f64)]
    pub real_total: Decimal,
    #[schema(value_type = f64)]
    pub applied_total: Decimal,
    #[schema(value_type = f64)]
    pub discount: Decimal,
    #[schema(value_type = f64)]
    pub discount_pct: Decimal,
    #[schema(value_type = Option<f64>)]
    pub vat_total: Option<Decimal>,
}

/// One in-progress quote session: a header plus an ordered item list.
///
/// Items keep insertion order, which is also the row order in the rendered
/// document. Prices are validated at the HTTP boundary; the model itself
/// appends unconditionally.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct QuoteModel {
    pub id: Uuid,
    pub header: QuoteHeader,
    pub items: Vec<LineItem>,
}

impl QuoteModel {
    pub fn new(header: QuoteHeader) -> Self {
        Self {
            id: Uuid::new_v4(),
            header,
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Remove the item at `index`, shifting later rows up.
    pub fn remove_item(&mut self, index: usize) -> Option<LineItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Compute totals over the current item sequence.
    ///
    /// The discount may be negative when the applied total exceeds the real
    /// total. An empty sequence yields all-zero totals with a zero discount
    /// percentage.
    pub fn compute_totals(&self) -> Totals {
        let mut real_total = Decimal::ZERO;
        let mut applied_total = Decimal::ZERO;
        for item in &self.items {
            real_total += item.real_price;
            applied_total += item.applied_price;
        }

        let discount = real_total - applied_total;
        let discount_pct = if real_total > Decimal::ZERO {
            discount / real_total * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };

        let vat_total = if self.header.include_vat {
            Some(applied_total * (Decimal::ONE + vat_rate()))
        } else {
            None
        };

        Totals {
            real_total,
            applied_total,
            discount,
            discount_pct,
            vat_total,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateQuoteRequest {
    pub kind: DocumentKind,
    #[schema(example = "2026-08-05")]
    pub date: NaiveDate,
    #[schema(example = "88")]
    pub number: String,
    #[schema(example = "Rossi Srl")]
    pub client: String,
    #[serde(default)]
    #[schema(example = "Strategic services for a product launch")]
    pub subject: String,
    #[serde(default)]
    pub include_vat: bool,
}

impl Validator for CreateQuoteRequest {
    fn validate(&self) -> Result<(), String> {
        let mut errors = ValidationErrors::new();
        validate_required(&self.number, "number", "Document number", &mut errors);
        validate_required(&self.client, "client", "Client", &mut errors);
        errors.into_result()
    }
}

impl CreateQuoteRequest {
    pub fn into_header(self) -> QuoteHeader {
        QuoteHeader {
            kind: self.kind,
            date: self.date,
            number: self.number,
            client: self.client,
            subject: self.subject,
            include_vat: self.include_vat,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuoteRequest {
    pub kind: Option<DocumentKind>,
    pub date: Option<NaiveDate>,
    pub number: Option<String>,
    pub client: Option<String>,
    pub subject: Option<String>,
    pub include_vat: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewItemRequest {
    #[schema(example = "Landing page")]
    pub label: String,
    #[serde(default)]
    #[schema(example = "one-time")]
    pub frequency: String,
    #[serde(default)]
    pub description: String,
    #[schema(value_type = f64, example = 1000.0)]
    pub real_price: Decimal,
    #[schema(value_type = f64, example = 800.0)]
    pub applied_price: Decimal,
}

impl Validator for NewItemRequest {
    fn validate(&self) -> Result<(), String> {
        let mut errors = ValidationErrors::new();
        validate_required(&self.label, "label", "Item label", &mut errors);
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

impl NewItemRequest {
    pub fn into_item(self) -> LineItem {
        LineItem {
            label: self.label,
            frequency: self.frequency,
            description: self.description,
            real_price: self.real_price,
            applied_price: self.applied_price,
        }
    }
}
