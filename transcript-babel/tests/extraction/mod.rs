//! Extraction tests
//!
//! Turn discovery, role classification, sanitizing and rendering on full
//! pages.

mod sanitizing;
mod turns;
