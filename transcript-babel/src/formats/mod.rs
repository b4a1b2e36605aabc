//! Format implementations
//!
//! Each format turns an extracted transcript into one downloadable document.

pub mod markdown;
#[cfg(feature = "native-export")]
pub mod pdf;

pub use markdown::MarkdownFormat;
#[cfg(feature = "native-export")]
pub use pdf::{ChromeRenderer, PdfFormat, PdfRenderer, PdfSettings};
