//! Headless Chrome renderer
//!
//! Writes the page into a scratch directory, asks Chrome to print it, and
//! reads the PDF back. The scratch directory is removed when the render
//! returns, whichever way it returns.

use super::{PdfRenderer, PdfSettings};
use crate::error::ExportError;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;
use url::Url;
use which::which;

/// Environment variables consulted for an explicit Chrome binary, in order
pub const CHROME_ENV_VARS: [&str; 3] = ["TRANSCRIPT_CHROME_BIN", "GOOGLE_CHROME_BIN", "CHROME_BIN"];

const PATH_CANDIDATES: [&str; 6] = [
    "google-chrome",
    "google-chrome-stable",
    "chromium",
    "chromium-browser",
    "chrome",
    "msedge",
];

/// A4 at 96 dpi, which keeps the on-screen layout close to the printed page
const WINDOW_SIZE: (u32, u32) = (794, 1123);

/// Renderer shelling out to a Chrome/Chromium binary
#[derive(Debug, Clone, Default)]
pub struct ChromeRenderer {
    binary: Option<PathBuf>,
}

impl ChromeRenderer {
    /// Use `binary` instead of searching for one
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: Some(binary.into()),
        }
    }

    fn resolve(&self) -> Result<PathBuf, ExportError> {
        match &self.binary {
            Some(path) => Ok(path.clone()),
            None => resolve_chrome_binary(),
        }
    }
}

impl PdfRenderer for ChromeRenderer {
    fn ensure_available(&self) -> Result<(), ExportError> {
        self.resolve().map(|_| ())
    }

    fn render(&self, html: &str, settings: &PdfSettings) -> Result<Vec<u8>, ExportError> {
        let chrome = self.resolve()?;
        let temp_dir =
            tempdir().map_err(|e| ExportError::RenderFailed(format!("Temp dir error: {e}")))?;
        let html_path = temp_dir.path().join("transcript.html");
        fs::write(&html_path, html)?;

        let pdf_path = temp_dir.path().join("transcript.pdf");
        let file_url = Url::from_file_path(&html_path).map_err(|_| {
            ExportError::RenderFailed("Failed to construct file:// URL for HTML input".to_string())
        })?;

        let (w, h) = WINDOW_SIZE;
        let mut command = Command::new(&chrome);
        command
            .arg("--headless")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--print-to-pdf-no-header")
            .arg(format!("--force-device-scale-factor={}", settings.scale))
            .arg(format!("--window-size={w},{h}"));
        if settings.allow_cross_origin {
            command
                .arg("--disable-web-security")
                .arg("--allow-file-access-from-files");
        }
        command
            .arg(format!("--print-to-pdf={}", pdf_path.display()))
            .arg(file_url.as_str());

        tracing::debug!(binary = %chrome.display(), "launching headless chrome");
        let status = command.status().map_err(|e| {
            ExportError::RenderFailed(format!(
                "Failed to launch Chrome ({}): {}",
                chrome.display(),
                e
            ))
        })?;

        if !status.success() {
            return Err(ExportError::RenderFailed(format!(
                "Chrome exited with status {status}"
            )));
        }

        fs::read(&pdf_path).map_err(|e| {
            ExportError::RenderFailed(format!("Chrome produced no document: {e}"))
        })
    }
}

fn resolve_chrome_binary() -> Result<PathBuf, ExportError> {
    for var in CHROME_ENV_VARS {
        if let Some(path) = env::var_os(var) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
    }

    for candidate in PATH_CANDIDATES {
        if let Ok(path) = which(candidate) {
            return Ok(path);
        }
    }

    #[cfg(target_os = "macos")]
    {
        let candidate = PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome");
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    #[cfg(target_os = "windows")]
    {
        let candidates = [
            r"C:\\Program Files\\Google\\Chrome\\Application\\chrome.exe",
            r"C:\\Program Files (x86)\\Google\\Chrome\\Application\\chrome.exe",
        ];
        for candidate in candidates {
            let path = PathBuf::from(candidate);
            if path.exists() {
                return Ok(path);
            }
        }
    }

    #[cfg(target_os = "linux")]
    {
        let candidates = [
            "/usr/bin/google-chrome",
            "/usr/bin/google-chrome-stable",
            "/usr/bin/chromium-browser",
            "/usr/bin/chromium",
        ];
        for candidate in candidates {
            let path = PathBuf::from(candidate);
            if path.exists() {
                return Ok(path);
            }
        }
    }

    Err(ExportError::RendererUnavailable(
        "Unable to locate a Chrome/Chromium binary. Set TRANSCRIPT_CHROME_BIN to override the detection."
            .to_string(),
    ))
}
