//! PDF export built on top of the turn markup + headless Chrome.
//!
//! Each turn's sanitized markup is placed into a styled page (see
//! [`page::build_page`]), the page geometry is expressed as print CSS, and a
//! [`PdfRenderer`] turns the page into bytes. The shipped renderer shells out
//! to a Chrome/Chromium binary running in headless mode.
//!
//! A missing renderer is reported before any page is built, so callers get a
//! configuration error instead of a failure deep inside the pipeline.

mod chrome;
pub mod page;

pub use chrome::{ChromeRenderer, CHROME_ENV_VARS};

use crate::error::ExportError;
use crate::extract::Transcript;
use crate::format::{Format, SerializedDocument};

/// Paper sizes understood by the print CSS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    A4,
    Letter,
}

impl PageSize {
    fn css_name(&self) -> &'static str {
        match self {
            PageSize::A4 => "A4",
            PageSize::Letter => "letter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    fn css_name(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

/// How the page avoids splitting content across pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageBreakMode {
    /// Never break inside any element of the transcript
    AvoidAll,
    /// Honor `break-*` properties present in the markup. Without it, forced
    /// breaks in turn content are neutralized.
    Css,
}

/// Settings handed to the renderer together with the page
#[derive(Debug, Clone, PartialEq)]
pub struct PdfSettings {
    pub title: String,
    pub margin_mm: f32,
    pub page_size: PageSize,
    pub orientation: Orientation,
    /// Device scale factor used while rendering
    pub scale: f32,
    /// Let the page load images from other origins
    pub allow_cross_origin: bool,
    pub page_break: Vec<PageBreakMode>,
}

impl Default for PdfSettings {
    fn default() -> Self {
        Self {
            title: "AI Studio Transcript".to_string(),
            margin_mm: 10.0,
            page_size: PageSize::A4,
            orientation: Orientation::Portrait,
            scale: 3.0,
            allow_cross_origin: true,
            page_break: vec![PageBreakMode::AvoidAll, PageBreakMode::Css],
        }
    }
}

impl PdfSettings {
    /// Print CSS for page geometry and break behavior
    pub fn print_css(&self) -> String {
        let mut css = format!(
            "@page {{ size: {} {}; margin: {}mm; }}\nbody {{ margin: 0; }}\n",
            self.page_size.css_name(),
            self.orientation.css_name(),
            self.margin_mm
        );
        if self.page_break.contains(&PageBreakMode::AvoidAll) {
            css.push_str(".transcript * { break-inside: avoid; page-break-inside: avoid; }\n");
        }
        if !self.page_break.contains(&PageBreakMode::Css) {
            css.push_str(
                ".turn-body * { break-before: auto !important; break-after: auto !important; \
                 page-break-before: auto !important; page-break-after: auto !important; }\n",
            );
        }
        css
    }
}

/// Turns a complete HTML page into PDF bytes
pub trait PdfRenderer: Send + Sync {
    /// Fail early when the renderer cannot run at all
    fn ensure_available(&self) -> Result<(), ExportError>;

    fn render(&self, html: &str, settings: &PdfSettings) -> Result<Vec<u8>, ExportError>;
}

/// Format implementation that prints the styled transcript page to PDF.
pub struct PdfFormat {
    settings: PdfSettings,
    renderer: Box<dyn PdfRenderer>,
}

impl PdfFormat {
    pub fn new(settings: PdfSettings, renderer: Box<dyn PdfRenderer>) -> Self {
        Self { settings, renderer }
    }

    pub fn settings(&self) -> &PdfSettings {
        &self.settings
    }
}

impl Default for PdfFormat {
    fn default() -> Self {
        Self::new(PdfSettings::default(), Box::new(ChromeRenderer::default()))
    }
}

impl Format for PdfFormat {
    fn name(&self) -> &str {
        "pdf"
    }

    fn description(&self) -> &str {
        "Styled transcript printed to PDF via headless Chrome"
    }

    fn file_prefix(&self) -> &str {
        "AI_Studio"
    }

    fn file_extension(&self) -> &str {
        "pdf"
    }

    fn content_type(&self) -> &str {
        "application/pdf"
    }

    fn serialize(&self, transcript: &Transcript) -> Result<SerializedDocument, ExportError> {
        self.renderer.ensure_available()?;

        let html = page::build_page(transcript, &self.settings);
        match self.renderer.render(&html, &self.settings) {
            Ok(bytes) => Ok(SerializedDocument::Binary(bytes)),
            Err(e) => {
                tracing::warn!("PDF rendering failed: {e}");
                Err(e)
            }
        }
    }
}
