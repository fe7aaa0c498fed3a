//! Content-level tests for the rendered quote document.

use chrono::NaiveDate;
use std::io::{Cursor, Read};

use quotegen_server::quote::models::{DocumentKind, LineItem, QuoteHeader, QuoteModel};
use quotegen_server::render::{DocumentRequest, Generator, QuoteDocumentGenerator};

fn scenario_model(include_vat: bool) -> QuoteModel {
    let mut model = QuoteModel::new(QuoteHeader {
        kind: DocumentKind::Quote,
        date: NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
        number: "88".to_string(),
        client: "Rossi Srl".to_string(),
        subject: "Launch services".to_string(),
        include_vat,
    });
    model.add_item(LineItem {
        label: "Analysis".to_string(),
        frequency: "one-time".to_string(),
        description: "Market & competitor analysis".to_string(),
        real_price: "1000".parse().unwrap(),
        applied_price: "800".parse().unwrap(),
    });
    model.add_item(LineItem {
        label: "Funnel".to_string(),
        frequency: "monthly".to_string(),
        description: "Funnel setup".to_string(),
        real_price: "500".parse().unwrap(),
        applied_price: "500".parse().unwrap(),
    });
    model
}

fn render(model: &QuoteModel, logo: Option<&[u8]>) -> (String, Vec<u8>) {
    let generator = QuoteDocumentGenerator::default();
    let document = generator
        .generate(DocumentRequest { model, logo })
        .unwrap();
    (document.filename, document.docx)
}

fn document_xml(docx: &[u8]) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(docx.to_vec())).unwrap();
    let mut entry = archive.by_name("word/document.xml").unwrap();
    let mut content = String::new();
    entry.read_to_string(&mut content).unwrap();
    content
}

#[test]
fn test_document_contains_all_sections_in_order() {
    let model = scenario_model(true);
    let (_, docx) = render(&model, None);
    let xml = document_xml(&docx);

    let sections = [
        "Quote no. 88",
        "Date: 05/08/2026",
        "Client: Rossi Srl",
        "Subject: Launch services",
        "Service Details and Value",
        "Analysis",
        "Funnel",
        "Total value of services: €1500.00 + VAT",
        "Total applied: €1300.00 + VAT",
        "Discount applied: €-200.00 (-13.3%)",
        "Total including VAT (22%): €1586.00",
        "Terms and Conditions",
        "IBAN:",
        "Reference: Quote no. 88 of 05/08/2026",
        "valid for 7 days",
    ];

    let mut last = 0;
    for section in sections {
        let pos = xml.find(section).unwrap_or_else(|| {
            panic!("section '{}' missing from document", section);
        });
        assert!(pos >= last, "section '{}' out of order", section);
        last = pos;
    }
}

#[test]
fn test_prices_have_two_decimals() {
    let model = scenario_model(false);
    let (_, docx) = render(&model, None);
    let xml = document_xml(&docx);

    assert!(xml.contains("1000.00"));
    assert!(xml.contains("800.00"));
    assert!(xml.contains("500.00"));
}

#[test]
fn test_vat_line_absent_when_excluded() {
    let model = scenario_model(false);
    let (_, docx) = render(&model, None);
    let xml = document_xml(&docx);

    assert!(!xml.contains("Total including VAT"));
}

#[test]
fn test_proforma_invoice_heading_and_reference() {
    let mut model = scenario_model(false);
    model.header.kind = DocumentKind::ProformaInvoice;
    let (filename, docx) = render(&model, None);
    let xml = document_xml(&docx);

    assert!(xml.contains("Proforma Invoice no. 88"));
    assert!(xml.contains("Reference: Proforma Invoice no. 88 of 05/08/2026"));
    assert_eq!(filename, "ProformaInvoice_Rossi_Srl_05082026.docx");
}

#[test]
fn test_empty_quote_renders_zero_totals() {
    let model = QuoteModel::new(QuoteHeader {
        kind: DocumentKind::Quote,
        date: NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
        number: "1".to_string(),
        client: "Rossi Srl".to_string(),
        subject: String::new(),
        include_vat: false,
    });
    let (_, docx) = render(&model, None);
    let xml = document_xml(&docx);

    assert!(xml.contains("Total value of services: €0.00 + VAT"));
    assert!(xml.contains("Discount applied: €0.00 (0.0%)"));
}

#[test]
fn test_rendering_is_deterministic() {
    let model = scenario_model(true);
    let (_, first) = render(&model, None);
    let (_, second) = render(&model, None);
    assert_eq!(first, second);

    let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x01];
    let (_, with_logo_a) = render(&model, Some(&png));
    let (_, with_logo_b) = render(&model, Some(&png));
    assert_eq!(with_logo_a, with_logo_b);
}

#[test]
fn test_missing_logo_keeps_all_other_sections() {
    let model = scenario_model(true);
    let (_, without_logo) = render(&model, None);
    let xml = document_xml(&without_logo);

    assert!(!xml.contains("<w:drawing>"));
    assert!(xml.contains("Client: Rossi Srl"));
    assert!(xml.contains("Terms and Conditions"));
}

#[test]
fn test_unrecognized_logo_bytes_degrade_gracefully() {
    let model = scenario_model(true);
    let (_, docx) = render(&model, Some(b"this is not an image"));
    let xml = document_xml(&docx);

    assert!(!xml.contains("<w:drawing>"));
    assert!(xml.contains("Client: Rossi Srl"));
}

#[test]
fn test_logo_is_embedded_before_heading() {
    let model = scenario_model(true);
    let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x01];
    let (_, docx) = render(&model, Some(&png));
    let xml = document_xml(&docx);

    let drawing = xml.find("<w:drawing>").unwrap();
    let heading = xml.find("Quote").unwrap();
    assert!(drawing < heading);
}

#[test]
fn test_special_characters_are_escaped() {
    let mut model = scenario_model(false);
    model.header.subject = "Analysis & Funnel <launch>".to_string();
    let (_, docx) = render(&model, None);
    let xml = document_xml(&docx);

    assert!(xml.contains("Subject: Analysis &amp; Funnel &lt;launch&gt;"));
}
