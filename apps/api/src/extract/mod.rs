//! Plain-text extraction for uploaded resume documents.
//!
//! Dispatch is strictly on the filename suffix; the bytes are never
//! sniffed. PDF text comes from `pdf-extract`, DOCX text from `docx-rs`
//! paragraph by paragraph.

pub mod handlers;

use docx_rs::DocumentChild;
use thiserror::Error;

/// The `Display` strings double as the response bodies, so they must stay
/// byte-for-byte stable.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type. Please upload PDF or DOCX files.")]
    UnsupportedFormat,

    #[error("Failed to parse file: {0}")]
    Parse(String),
}

/// Extracts plain text from an uploaded document, trimmed of leading and
/// trailing whitespace. Empty extracted text is a valid result.
pub fn extract_text(filename: &str, content: &[u8]) -> Result<String, ExtractError> {
    let text = if filename.ends_with(".pdf") {
        pdf_text(content)?
    } else if filename.ends_with(".docx") {
        docx_text(content)?
    } else {
        return Err(ExtractError::UnsupportedFormat);
    };

    Ok(text.trim().to_string())
}

/// Page texts are concatenated in document order by the extractor; a
/// stream that cannot be opened as a PDF at all fails the whole read.
fn pdf_text(content: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(content).map_err(|e| ExtractError::Parse(e.to_string()))
}

/// Walks top-level paragraphs in document order, one line per paragraph.
fn docx_text(content: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(content).map_err(|e| ExtractError::Parse(e.to_string()))?;

    let mut text = String::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            text.push_str(&paragraph.raw_text());
            text.push('\n');
        }
    }

    Ok(text)
}
