//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available export
//! formats. Formats can be registered and retrieved by name.

use crate::error::ExportError;
use crate::format::Format;
use crate::formats::MarkdownFormat;
use std::collections::HashMap;

/// Registry of export formats
///
/// # Examples
///
/// ```ignore
/// let mut registry = FormatRegistry::new();
/// registry.register(MarkdownFormat::default());
///
/// let format = registry.get("markdown")?;
/// let document = format.serialize(&transcript)?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, ExportError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| ExportError::FormatNotFound(name.to_string()))
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for FormatRegistry {
    /// Markdown, plus PDF when native export is compiled in
    fn default() -> Self {
        let mut registry = FormatRegistry::new();
        registry.register(MarkdownFormat::default());
        #[cfg(feature = "native-export")]
        registry.register(crate::formats::PdfFormat::default());
        registry
    }
}
