//! External PDF conversion.
//!
//! Handles the low-level details of writing the document to a temporary
//! directory, invoking the external converter CLI, and reading the output
//! PDF. A conversion failure never invalidates the already-produced document.

use std::fs;
use std::process::Command;
use tempfile::tempdir;
use thiserror::Error;

const INPUT_NAME: &str = "document.docx";
const OUTPUT_NAME: &str = "document.pdf";

/// Errors that can occur during PDF conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),
    #[error("failed to write document for conversion: {0}")]
    WriteInput(#[source] std::io::Error),
    #[error("PDF converter execution failed: {0}")]
    ConverterIo(#[source] std::io::Error),
    #[error("PDF converter exited with status {0}")]
    ConverterExit(i32),
    #[error("failed to read converted PDF: {0}")]
    ReadPdf(#[source] std::io::Error),
}

/// Stateless engine converting `.docx` bytes to PDF via the `soffice` CLI.
pub struct PdfConvertEngine;

impl PdfConvertEngine {
    /// Convert a document to PDF.
    ///
    /// Blocks on the external process; callers on the async path should wrap
    /// this in `web::block`.
    pub fn convert(docx: &[u8]) -> Result<Vec<u8>, ConvertError> {
        let temp_dir = tempdir().map_err(ConvertError::TempDir)?;
        let input_path = temp_dir.path().join(INPUT_NAME);
        fs::write(&input_path, docx).map_err(ConvertError::WriteInput)?;

        let status = Command::new("soffice")
            .arg("--headless")
            .arg("--convert-to")
            .arg("pdf")
            .arg("--outdir")
            .arg(temp_dir.path())
            .arg(&input_path)
            .current_dir(temp_dir.path())
            .status()
            .map_err(ConvertError::ConverterIo)?;

        if !status.success() {
            let code = status.code().unwrap_or(-1);
            return Err(ConvertError::ConverterExit(code));
        }

        fs::read(temp_dir.path().join(OUTPUT_NAME)).map_err(ConvertError::ReadPdf)
    }
}
