//! One page, one profile, one set of formats
//!
//! A session is built once from the command line and the configuration. Each
//! export reloads the snapshot from disk, so a long-running `listen` picks up
//! a page that was saved again since the last message.

use std::fs;
use std::path::PathBuf;
use transcript_babel::formats::{ChromeRenderer, MarkdownFormat, PdfFormat};
use transcript_babel::{
    dispatch, Action, Artifact, ExportError, FormatRegistry, HtmlSnapshot, MarkupProfile,
};
use transcript_config::TranscriptConfig;
use url::Url;

pub struct Session {
    input: PathBuf,
    base_url: Option<Url>,
    output_dir: PathBuf,
    profile: MarkupProfile,
    registry: FormatRegistry,
}

impl Session {
    pub fn new(
        input: PathBuf,
        base_url: Option<Url>,
        chrome: Option<PathBuf>,
        config: &TranscriptConfig,
    ) -> Result<Self, ExportError> {
        Ok(Self {
            input,
            base_url,
            output_dir: config.output.directory.clone(),
            profile: MarkupProfile::try_from(&config.markup)?,
            registry: build_registry(config, chrome)?,
        })
    }

    fn load_snapshot(&self) -> Result<HtmlSnapshot, ExportError> {
        let html = fs::read_to_string(&self.input)?;
        let snapshot = HtmlSnapshot::parse(&html);
        Ok(match &self.base_url {
            Some(url) => snapshot.with_base_url(url.clone()),
            None => snapshot,
        })
    }

    /// Extract the page as it is on disk now and export it
    pub fn run(&self, action: Action) -> Result<Artifact, ExportError> {
        let snapshot = self.load_snapshot()?;
        dispatch(action, &snapshot, &self.profile, &self.registry)
    }

    /// Write `artifact` into the output directory, returning its path
    pub fn save(&self, artifact: Artifact) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(&artifact.file_name);
        fs::write(&path, artifact.document.into_bytes())?;
        tracing::info!(path = %path.display(), "wrote export");
        Ok(path)
    }
}

/// Formats configured from `config`
pub fn build_registry(
    config: &TranscriptConfig,
    chrome: Option<PathBuf>,
) -> Result<FormatRegistry, ExportError> {
    let renderer = match chrome {
        Some(path) => ChromeRenderer::with_binary(path),
        None => ChromeRenderer::default(),
    };

    let mut registry = FormatRegistry::new();
    registry.register(MarkdownFormat::new((&config.markdown).try_into()?));
    registry.register(PdfFormat::new((&config.pdf).into(), Box::new(renderer)));
    Ok(registry)
}
