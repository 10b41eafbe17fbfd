//! Axum route handler for resume file uploads.

use axum::extract::Multipart;
use axum::Json;
use serde_json::{json, Value};
use tracing::warn;

use crate::extract::extract_text;

/// POST /parse-resume-file
///
/// Accepts a multipart upload and extracts plain text from the first field
/// carrying a filename. Like the analysis endpoints, failures come back as
/// 200 responses with an `error` body.
pub async fn handle_parse_resume_file(mut multipart: Multipart) -> Json<Value> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => {
                warn!("Resume upload contained no file field");
                return Json(json!({ "error": "No file field found in the upload." }));
            }
            Err(e) => {
                warn!("Failed to read multipart upload: {e}");
                return Json(json!({ "error": format!("Failed to parse file: {e}") }));
            }
        };

        let Some(filename) = field.file_name().map(str::to_string) else {
            continue; // not a file field
        };

        let content = match field.bytes().await {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read uploaded file body: {e}");
                return Json(json!({ "error": format!("Failed to parse file: {e}") }));
            }
        };

        return match extract_text(&filename, &content) {
            Ok(text) => Json(json!({ "text": text })),
            Err(e) => {
                warn!("Extraction failed for {filename}: {e}");
                Json(json!({ "error": e.to_string() }))
            }
        };
    }
}
