//! Format trait definition
//!
//! An export format turns an extracted [`Transcript`] into a downloadable
//! document. The Markdown format is pure text; the PDF format hands styled
//! markup to an external renderer and returns bytes.

use crate::error::ExportError;
use crate::extract::Transcript;

/// Serialized output produced by a [`Format`] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializedDocument {
    /// UTF-8 text output (e.g., markdown)
    Text(String),
    /// Binary output (e.g., PDF)
    Binary(Vec<u8>),
}

impl SerializedDocument {
    /// Consume the serialized output and return the underlying bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            SerializedDocument::Text(text) => text.into_bytes(),
            SerializedDocument::Binary(bytes) => bytes,
        }
    }
}

/// Trait for export formats
///
/// # Examples
///
/// ```ignore
/// struct PlainText;
///
/// impl Format for PlainText {
///     fn name(&self) -> &str {
///         "text"
///     }
///
///     fn file_prefix(&self) -> &str {
///         "Chat"
///     }
///
///     fn file_extension(&self) -> &str {
///         "txt"
///     }
///
///     fn content_type(&self) -> &str {
///         "text/plain"
///     }
///
///     fn serialize(&self, transcript: &Transcript) -> Result<SerializedDocument, ExportError> {
///         let text = transcript
///             .turns
///             .iter()
///             .map(|turn| turn.rendered_markdown.as_str())
///             .collect::<Vec<_>>()
///             .join("\n\n");
///         Ok(SerializedDocument::Text(text))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "pdf")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Leading part of generated file names, before the timestamp
    fn file_prefix(&self) -> &str;

    /// File extension without the leading dot
    fn file_extension(&self) -> &str;

    /// MIME type of the serialized document
    fn content_type(&self) -> &str;

    /// Serialize a transcript. Callers guarantee it has at least one turn.
    fn serialize(&self, transcript: &Transcript) -> Result<SerializedDocument, ExportError>;
}
