#[derive(Debug, thiserror::Error)]
pub enum BucketError {
    #[error("text extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("could not determine the roster period. Look for a 'Period: <Month> <Year>' line on the first page")]
    MissingPeriod,

    #[error("no reserve schedule data found in the document")]
    NoReserveData,

    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid reserve status '{0}': expected RSA or RSP")]
    InvalidStatus(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
