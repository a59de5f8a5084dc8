pub mod parse;
pub mod query;

use bucket_core::error::BucketError;
use bucket_core::extraction::pdftotext::PdftotextExtractor;
use bucket_core::model::ScheduleDocument;
use bucket_core::parsing::period::MonthTable;
use std::path::Path;

/// Load a roster from a PDF, or from a pre-parsed document when the file
/// extension says JSON.
pub fn load_document(input_file: &Path) -> Result<ScheduleDocument, BucketError> {
    let is_json = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        let json_bytes = std::fs::read(input_file)?;
        Ok(serde_json::from_slice(&json_bytes)?)
    } else {
        let pdf_bytes = std::fs::read(input_file)?;
        let extractor = PdftotextExtractor::new();
        bucket_core::parse_roster(&pdf_bytes, &extractor, &MonthTable::default())
    }
}
