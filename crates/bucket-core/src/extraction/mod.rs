pub mod pdftotext;

use crate::error::BucketError;

/// Text content extracted from a single page of a roster document.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

/// Trait for roster text extraction backends.
pub trait RosterExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, BucketError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
