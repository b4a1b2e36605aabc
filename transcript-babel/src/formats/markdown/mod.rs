//! Markdown export format
//!
//! Wraps [`crate::assemble::assemble`]: title, timestamp and separator, then
//! one section per turn. The output is UTF-8 text saved as `Chat_<millis>.md`.

use crate::assemble::{assemble, AssemblerOptions};
use crate::error::ExportError;
use crate::extract::Transcript;
use crate::format::{Format, SerializedDocument};

/// Format implementation for Markdown transcripts
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormat {
    options: AssemblerOptions,
}

impl MarkdownFormat {
    pub fn new(options: AssemblerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AssemblerOptions {
        &self.options
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown transcript with quoted user turns"
    }

    fn file_prefix(&self) -> &str {
        "Chat"
    }

    fn file_extension(&self) -> &str {
        "md"
    }

    fn content_type(&self) -> &str {
        "text/markdown"
    }

    fn serialize(&self, transcript: &Transcript) -> Result<SerializedDocument, ExportError> {
        Ok(SerializedDocument::Text(assemble(transcript, &self.options)?))
    }
}
