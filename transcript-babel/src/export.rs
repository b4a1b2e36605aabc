//! Export actions and artifacts
//!
//! An export is triggered by a small JSON message such as
//! `{"action": "export_md"}`. The action picks a format from the registry,
//! the page is extracted once, and the result is an [`Artifact`]: the
//! serialized document plus the file name and content type it should be
//! saved under. Saving is left to the caller.

use crate::error::{ExportError, Result};
use crate::extract::{MarkupProfile, Transcript};
use crate::format::{Format, SerializedDocument};
use crate::registry::FormatRegistry;
use crate::tree::TreeSource;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// The two triggerable exports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ExportMarkdown,
    ExportPdf,
}

#[derive(Deserialize)]
struct Message {
    action: String,
}

impl Action {
    /// Parse a command message. Fields other than `action` are ignored.
    pub fn parse_message(json: &str) -> Result<Self> {
        let message: Message = serde_json::from_str(json)
            .map_err(|e| ExportError::SerializationError(format!("Invalid message: {e}")))?;
        message.action.parse()
    }

    /// Wire name used in messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ExportMarkdown => "export_md",
            Action::ExportPdf => "export_pdf",
        }
    }

    /// Registry name of the format this action exports to
    pub fn format_name(&self) -> &'static str {
        match self {
            Action::ExportMarkdown => "markdown",
            Action::ExportPdf => "pdf",
        }
    }
}

impl FromStr for Action {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "export_md" => Ok(Action::ExportMarkdown),
            "export_pdf" => Ok(Action::ExportPdf),
            other => Err(ExportError::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finished export, ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// `{prefix}_{unix millis}.{extension}`
    pub file_name: String,
    pub content_type: String,
    pub document: SerializedDocument,
}

/// Serialize `transcript` with `format`.
///
/// Fails with [`ExportError::NothingFound`] when the transcript has no turns;
/// formats are never asked to serialize an empty transcript.
pub fn export(transcript: &Transcript, format: &dyn Format) -> Result<Artifact> {
    if transcript.is_empty() {
        return Err(ExportError::NothingFound);
    }

    let document = format.serialize(transcript)?;
    let file_name = format!(
        "{}_{}.{}",
        format.file_prefix(),
        transcript.generated_at.timestamp_millis(),
        format.file_extension()
    );
    tracing::info!(
        format = format.name(),
        turns = transcript.turns.len(),
        %file_name,
        "exported transcript"
    );

    Ok(Artifact {
        file_name,
        content_type: format.content_type().to_string(),
        document,
    })
}

/// Run `action` against `source`: extract now, then export.
pub fn dispatch(
    action: Action,
    source: &dyn TreeSource,
    profile: &MarkupProfile,
    registry: &FormatRegistry,
) -> Result<Artifact> {
    let format = registry.get(action.format_name())?;
    let transcript = Transcript::capture(source, profile);
    tracing::debug!(%action, turns = transcript.turns.len(), "captured transcript");
    export(&transcript, format)
}
