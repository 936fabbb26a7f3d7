//! Error types for the unitscout-core library.

use thiserror::Error;

/// Main error type for the unitscout library.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The input document has an unsupported shape.
    #[error("unsupported input format: {0}")]
    InputFormat(String),

    /// Requested export format is not one of json, csv, xlsx, xml, html.
    #[error("unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Listing extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// HTTP client error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while turning a single page into records.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The fetched document was empty.
    #[error("empty document for {0}")]
    EmptyDocument(String),
}

/// Result type for the unitscout library.
pub type Result<T> = std::result::Result<T, ScrapeError>;
