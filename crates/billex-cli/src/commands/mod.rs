//! CLI subcommands.

pub mod batch;
pub mod detect;
pub mod process;

use std::fs;
use std::path::Path;

use billex_core::extract_text_from_path;

/// Read the text layer of an input document.
///
/// PDFs go through the text extractor; `.txt` files (pre-extracted text)
/// are read as-is.
pub fn read_document_text(path: &Path) -> anyhow::Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "pdf" => Ok(extract_text_from_path(path)?),
        "txt" => Ok(fs::read_to_string(path)?),
        _ => anyhow::bail!("Unsupported file format: {}", extension),
    }
}

/// Filename component used for record passthrough and logging.
pub fn display_filename(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document")
        .to_string()
}
