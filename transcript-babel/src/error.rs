//! Error types for export operations

use thiserror::Error;

/// Errors that can occur while exporting a transcript
///
/// Extraction itself never fails: missing substructure only drops the
/// affected turn. Everything here is terminal for a single export call.
#[derive(Error, Debug)]
pub enum ExportError {
    /// No turn survived extraction
    #[error("No conversation content found; reload the page and try again")]
    NothingFound,

    /// The PDF renderer binary could not be located
    #[error("PDF renderer unavailable: {0}")]
    RendererUnavailable(String),

    /// The PDF renderer ran but did not produce a document
    #[error("PDF rendering failed: {0}")]
    RenderFailed(String),

    /// A selector in the markup profile could not be parsed
    #[error("Invalid selector '{0}'")]
    InvalidSelector(String),

    /// A timestamp format string that chrono cannot render
    #[error("Invalid timestamp format '{0}'")]
    InvalidTimestampFormat(String),

    /// A command message named an action we do not know
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),

    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;
