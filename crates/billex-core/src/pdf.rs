//! Thin PDF text extraction using lopdf and pdf-extract.
//!
//! Invoices arriving here always carry a text layer; scanned/image-only
//! PDFs are out of scope and simply yield empty text.

use std::fs;
use std::path::Path;

use lopdf::Document;
use tracing::debug;

use crate::error::PdfError;

const PDF_MAGIC_BYTES: &[u8] = b"%PDF";

/// PDF text extractor over in-memory document bytes.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Load a PDF from bytes, validating magic bytes, encryption and pages.
    pub fn load(&mut self, data: &[u8]) -> Result<(), PdfError> {
        if !data.starts_with(PDF_MAGIC_BYTES) {
            return Err(PdfError::NotPdf);
        }

        let document = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        if document.is_encrypted() {
            return Err(PdfError::Encrypted);
        }
        if document.get_pages().is_empty() {
            return Err(PdfError::NoPages);
        }

        debug!("loaded PDF with {} pages", document.get_pages().len());
        self.document = Some(document);
        self.raw_data = data.to_vec();
        Ok(())
    }

    /// Number of pages in the loaded document.
    pub fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|d| d.get_pages().len() as u32)
            .unwrap_or(0)
    }

    /// Extract the text layer of the whole document.
    pub fn extract_text(&self) -> Result<String, PdfError> {
        if self.document.is_none() {
            return Err(PdfError::Parse("no document loaded".to_string()));
        }

        pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience: load and extract text in one step.
pub fn extract_text_from_pdf(data: &[u8]) -> Result<String, PdfError> {
    let mut extractor = PdfExtractor::new();
    extractor.load(data)?;
    extractor.extract_text()
}

/// Read a PDF from disk and extract its text layer.
pub fn extract_text_from_path(path: &Path) -> crate::error::Result<String> {
    let data = fs::read(path)?;
    Ok(extract_text_from_pdf(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_pdf_bytes() {
        let mut extractor = PdfExtractor::new();
        let result = extractor.load(b"PK\x03\x04 definitely a zip");
        assert!(matches!(result, Err(PdfError::NotPdf)));
    }

    #[test]
    fn rejects_truncated_pdf() {
        let mut extractor = PdfExtractor::new();
        let result = extractor.load(b"%PDF-1.7 and nothing else");
        assert!(result.is_err());
    }

    #[test]
    fn extract_without_load_fails() {
        let extractor = PdfExtractor::new();
        assert!(extractor.extract_text().is_err());
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let result = extract_text_from_path(Path::new("/nonexistent/invoice.pdf"));
        assert!(matches!(result, Err(crate::error::BillexError::Io(_))));
    }
}
