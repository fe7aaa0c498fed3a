//! Render module - business logic for producing the quote document.
//!
//! - `docx` - minimal WordprocessingML writer and zip packaging
//! - `document` - assembly of the fixed quote document structure
//! - `pdf` - optional conversion of the produced document via an external CLI
//! - `validation` - boundary validation for request types

pub mod common;
pub mod docx;
pub mod document;
pub mod pdf;
pub mod traits;
pub mod validation;

pub use docx::{DocxBuilder, DOCX_CONTENT_TYPE};
pub use document::{DocumentRequest, QuoteDocumentGenerator, StaticSections};
pub use pdf::{ConvertError, PdfConvertEngine};
pub use traits::{Generator, Validator};

use thiserror::Error;

/// Errors that can occur while assembling the document container.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to assemble document container: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("failed to write document part: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of a successful document render.
#[derive(Debug)]
pub struct RenderedDocument {
    pub filename: String,
    pub docx: Vec<u8>,
}
