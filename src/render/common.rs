//! Common utilities for document rendering.
//!
//! Shared helpers for monetary formatting, date formatting, XML escaping and
//! filename construction.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::quote::models::DocumentKind;

/// Image formats the renderer can embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
}

impl ImageKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageKind::Png => "png",
            ImageKind::Jpeg => "jpeg",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ImageKind::Png => "image/png",
            ImageKind::Jpeg => "image/jpeg",
        }
    }
}

/// Detect a supported image format from its magic bytes.
pub fn detect_image(bytes: &[u8]) -> Option<ImageKind> {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        Some(ImageKind::Png)
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some(ImageKind::Jpeg)
    } else {
        None
    }
}

/// Format a date as day/month/year (e.g. "05/08/2026").
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format a monetary amount with exactly two decimal digits.
pub fn format_money(value: Decimal) -> String {
    format!("{:.2}", strip_negative_zero(value.round_dp(2)))
}

/// Format a percentage with exactly one decimal digit.
pub fn format_percent(value: Decimal) -> String {
    format!("{:.1}", strip_negative_zero(value.round_dp(1)))
}

// A negated or rounded-away amount may carry a negative sign on zero, which
// would render as "-0.00".
fn strip_negative_zero(value: Decimal) -> Decimal {
    if value.is_zero() {
        Decimal::ZERO
    } else {
        value
    }
}

/// Escape special characters for WordprocessingML text nodes.
pub fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Build the exported filename: `{Kind}_{Client}_{DDMMYYYY}.{ext}` with
/// spaces replaced by underscores.
pub fn download_filename(kind: DocumentKind, client: &str, date: NaiveDate, ext: &str) -> String {
    let base = format!(
        "{}_{}_{}",
        kind.file_label(),
        client.trim().replace(' ', "_"),
        date.format("%d%m%Y")
    );
    format!("{}.{}", sanitize_filename::sanitize(base), ext)
}
