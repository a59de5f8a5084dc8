pub mod bucket;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;

use error::BucketError;
use extraction::{PageContent, RosterExtractor};
use model::ScheduleDocument;
use parsing::period::MonthTable;

/// Main API entry point: parse a roster PDF into a ScheduleDocument.
///
/// Extracts per-page text through the given backend, resolves the roster
/// period from the first page, and assembles one member record per person
/// per page. Pure apart from the extraction call; safe to run off the
/// interactive path.
pub fn parse_roster(
    pdf_bytes: &[u8],
    extractor: &dyn RosterExtractor,
    months: &MonthTable,
) -> Result<ScheduleDocument, BucketError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    parsing::assemble(&pages, months)
}

/// Assemble a document from already-extracted page text.
pub fn parse_pages(
    pages: &[PageContent],
    months: &MonthTable,
) -> Result<ScheduleDocument, BucketError> {
    parsing::assemble(pages, months)
}
