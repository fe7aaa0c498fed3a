//! Generator for the quote document.
//!
//! Assembles the fixed document structure from a [`QuoteModel`] and the
//! static boilerplate sections: logo, heading, metadata paragraphs, the
//! line-item table, the totals block, conditions and signature.

use super::common::{download_filename, format_date, format_money, format_percent};
use super::docx::DocxBuilder;
use super::traits::Generator;
use super::{RenderError, RenderedDocument};
use crate::quote::models::QuoteModel;

/// Fixed textual sections every document carries.
#[derive(Debug, Clone)]
pub struct StaticSections {
    pub issuer_name: String,
    pub issuer_address: String,
    pub iban: String,
    pub delivery_terms: String,
    pub payment_terms: String,
    pub validity_notice: String,
    pub signature: String,
}

impl Default for StaticSections {
    fn default() -> Self {
        let issuer_name = "Example Studio".to_string();
        Self {
            issuer_address: "Via Roma 1, 20100 Milano (MI)".to_string(),
            iban: "IT60X0542811101000000123456".to_string(),
            delivery_terms: "Delivery: within 15-20 working days from confirmation".to_string(),
            payment_terms: "Payment: 50% on confirmation, 50% on delivery".to_string(),
            validity_notice: "Please note: this document is valid for 7 days from the date of issue"
                .to_string(),
            signature: format!("Kind regards,\n{}", issuer_name),
            issuer_name,
        }
    }
}

/// Render request: the model plus the already-resolved logo bytes.
///
/// The caller resolves the logo (or fails to); the generator never performs
/// I/O, which keeps rendering deterministic and side-effect free.
pub struct DocumentRequest<'a> {
    pub model: &'a QuoteModel,
    pub logo: Option<&'a [u8]>,
}

/// Generator producing the `.docx` quote document.
#[derive(Debug, Clone, Default)]
pub struct QuoteDocumentGenerator {
    sections: StaticSections,
}

impl QuoteDocumentGenerator {
    pub fn new(sections: StaticSections) -> Self {
        Self { sections }
    }

    fn build(&self, request: &DocumentRequest<'_>) -> DocxBuilder {
        let model = request.model;
        let header = &model.header;
        let totals = model.compute_totals();
        let date = format_date(header.date);

        let mut doc = DocxBuilder::new();
        if let Some(logo) = request.logo {
            doc = doc.logo(logo);
        }

        doc = doc
            .heading1(header.kind.title())
            .paragraph(&self.sections.issuer_name)
            .paragraph(&format!("{} no. {}", header.kind.title(), header.number))
            .paragraph(&format!("Date: {}", date))
            .paragraph(&format!("Client: {}", header.client))
            .paragraph(&format!("Subject: {}", header.subject))
            .heading2("Service Details and Value");

        let rows: Vec<Vec<String>> = model
            .items
            .iter()
            .map(|item| {
                vec![
                    item.label.clone(),
                    item.frequency.clone(),
                    item.description.clone(),
                    format_money(item.real_price),
                    format_money(item.applied_price),
                ]
            })
            .collect();
        doc = doc.table(
            &[
                "Item",
                "Frequency",
                "Description",
                "Real Price (€)",
                "Applied Price (€)",
            ],
            &rows,
        );

        doc = doc
            .blank_line()
            .paragraph(&format!(
                "Total value of services: €{} + VAT",
                format_money(totals.real_total)
            ))
            .paragraph(&format!(
                "Total applied: €{} + VAT",
                format_money(totals.applied_total)
            ))
            .paragraph(&format!(
                "Discount applied: €{} ({}%)",
                format_money(-totals.discount),
                format_percent(-totals.discount_pct)
            ));
        if let Some(vat_total) = totals.vat_total {
            doc = doc.paragraph(&format!(
                "Total including VAT (22%): €{}",
                format_money(vat_total)
            ));
        }

        doc = doc
            .heading2("Terms and Conditions")
            .paragraph(&self.sections.delivery_terms)
            .paragraph(&self.sections.payment_terms)
            .paragraph(&format!(
                "Method: bank transfer payable to: {}, {}",
                self.sections.issuer_name, self.sections.issuer_address
            ))
            .paragraph(&format!("IBAN: {}", self.sections.iban))
            .paragraph(&format!(
                "Reference: {} no. {} of {}",
                header.kind.title(),
                header.number,
                date
            ))
            .blank_line()
            .paragraph(&self.sections.validity_notice)
            .blank_line()
            .paragraph(&self.sections.signature);

        doc
    }
}

impl Generator<DocumentRequest<'_>> for QuoteDocumentGenerator {
    fn generate(&self, request: DocumentRequest<'_>) -> Result<RenderedDocument, RenderError> {
        let header = &request.model.header;
        let filename = download_filename(header.kind, &header.client, header.date, "docx");
        let docx = self.build(&request).build()?;
        Ok(RenderedDocument { filename, docx })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::models::{DocumentKind, QuoteHeader, QuoteModel};
    use chrono::NaiveDate;

    fn empty_model() -> QuoteModel {
        QuoteModel::new(QuoteHeader {
            kind: DocumentKind::Quote,
            date: NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
            number: "88".to_string(),
            client: "Rossi Srl".to_string(),
            subject: "Launch services".to_string(),
            include_vat: false,
        })
    }

    #[test]
    fn test_generate_without_logo_succeeds() {
        let generator = QuoteDocumentGenerator::default();
        let model = empty_model();
        let result = generator.generate(DocumentRequest {
            model: &model,
            logo: None,
        });
        assert!(result.is_ok());
    }

    #[test]
    fn test_filename_follows_convention() {
        let generator = QuoteDocumentGenerator::default();
        let model = empty_model();
        let document = generator
            .generate(DocumentRequest {
                model: &model,
                logo: None,
            })
            .unwrap();
        assert_eq!(document.filename, "Quote_Rossi_Srl_05082026.docx");
    }
}
