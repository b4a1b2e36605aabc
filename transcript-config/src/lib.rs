//! Shared configuration loader for the transcript exporter.
//!
//! `defaults/transcript.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`TranscriptConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use transcript_babel::formats::pdf::{Orientation, PageBreakMode, PageSize, PdfSettings};
use transcript_babel::{AssemblerOptions, ExportError, MarkupProfile, RoleMarkers, Sanitizer, Selector};

const DEFAULT_TOML: &str = include_str!("../defaults/transcript.default.toml");

/// Top-level configuration consumed by transcript applications.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TranscriptConfig {
    pub markup: MarkupConfig,
    pub markdown: MarkdownConfig,
    pub pdf: PdfConfig,
    pub output: OutputConfig,
}

/// How turns are found and classified in the chat page.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MarkupConfig {
    pub turn: String,
    pub classifier: String,
    pub content: String,
    pub user_marker: String,
    pub model_marker: String,
    pub noise: Vec<String>,
}

impl TryFrom<&MarkupConfig> for MarkupProfile {
    type Error = ExportError;

    fn try_from(config: &MarkupConfig) -> Result<Self, Self::Error> {
        let noise = config
            .noise
            .iter()
            .map(|selector| selector.parse::<Selector>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MarkupProfile {
            turn: config.turn.parse()?,
            classifier: config.classifier.parse()?,
            content: config.content.parse()?,
            roles: RoleMarkers {
                user: config.user_marker.clone(),
                model: config.model_marker.clone(),
            },
            sanitizer: Sanitizer::new(noise),
        })
    }
}

/// Headings and labels of the Markdown document.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MarkdownConfig {
    pub title: String,
    pub timestamp_label: String,
    pub timestamp_format: String,
    pub user_heading: String,
    pub model_heading: String,
}

impl TryFrom<&MarkdownConfig> for AssemblerOptions {
    type Error = ExportError;

    fn try_from(config: &MarkdownConfig) -> Result<Self, Self::Error> {
        let options = AssemblerOptions {
            title: config.title.clone(),
            timestamp_label: config.timestamp_label.clone(),
            timestamp_format: config.timestamp_format.clone(),
            user_heading: config.user_heading.clone(),
            model_heading: config.model_heading.clone(),
        };
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PdfConfig {
    pub title: String,
    pub margin_mm: f32,
    pub page_size: PdfPageSize,
    pub orientation: PdfOrientation,
    pub scale: f32,
    pub allow_cross_origin: bool,
    pub page_break: Vec<PdfPageBreak>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum PdfPageSize {
    #[serde(rename = "a4")]
    A4,
    #[serde(rename = "letter")]
    Letter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum PdfOrientation {
    #[serde(rename = "portrait")]
    Portrait,
    #[serde(rename = "landscape")]
    Landscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum PdfPageBreak {
    #[serde(rename = "avoid-all")]
    AvoidAll,
    #[serde(rename = "css")]
    Css,
}

impl From<&PdfConfig> for PdfSettings {
    fn from(config: &PdfConfig) -> Self {
        PdfSettings {
            title: config.title.clone(),
            margin_mm: config.margin_mm,
            page_size: match config.page_size {
                PdfPageSize::A4 => PageSize::A4,
                PdfPageSize::Letter => PageSize::Letter,
            },
            orientation: match config.orientation {
                PdfOrientation::Portrait => Orientation::Portrait,
                PdfOrientation::Landscape => Orientation::Landscape,
            },
            scale: config.scale,
            allow_cross_origin: config.allow_cross_origin,
            page_break: config
                .page_break
                .iter()
                .map(|mode| match mode {
                    PdfPageBreak::AvoidAll => PageBreakMode::AvoidAll,
                    PdfPageBreak::Css => PageBreakMode::Css,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub directory: PathBuf,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TranscriptConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TranscriptConfig, ConfigError> {
    Loader::new().build()
}
