//! Chat transcript extraction and export
//!
//!     This crate takes a rendered chat page (an HTML snapshot of the chat UI) and turns it into a
//!     transcript: an ordered list of turns, each with a role, a Markdown rendering and a cleaned
//!     copy of its markup. Transcripts are then exported as a Markdown document or a PDF.
//!
//!     This is a pure lib, that is, it powers the transcript cli but is shell agnostic: no code
//!     here prints, reads stdin or decides where files go. The one exception is the PDF renderer,
//!     which looks up a Chrome binary through the environment.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── tree                    # TreeSource, HtmlSnapshot, selectors and DOM helpers
//!     ├── dedent.rs               # First-line dedent for code blocks
//!     ├── sanitize.rs             # Noise removal on working clones
//!     ├── markdown                # Markdown renderer + whitespace normalization
//!     ├── markup.rs               # Styled markup snapshot for the PDF page
//!     ├── extract.rs              # Turn extraction and role classification
//!     ├── assemble.rs             # Markdown document assembly
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── markdown
//!     │   └── pdf                 # Styled page + headless Chrome
//!     └── export.rs               # Actions, artifacts and dispatch
//!
//! Pipeline
//!
//!     source ──► extract ──► Transcript ──► Format::serialize ──► Artifact
//!
//!     Extraction never modifies the source. For every turn container the content is deep cloned,
//!     noise is detached from the clone, and both renderings are taken from that same clone. Turns
//!     without content, or whose Markdown is blank after sanitizing, are dropped. Extraction never
//!     fails; the only "nothing to do" condition is an empty transcript, reported at export time as
//!     [`ExportError::NothingFound`].
//!
//! Markup Profiles
//!
//!     Which elements are turns, where the content sits, which classes mark a user or a model and
//!     what counts as noise are all data ([`MarkupProfile`]). The defaults match AI Studio; other
//!     chat UIs only need a different profile, which the config crate can load from TOML.
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── <area>.rs
//!     └── fixtures
//!         └── <page>.html
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
pub mod assemble;
pub mod dedent;
pub mod error;
pub mod export;
pub mod extract;
pub mod format;
pub mod formats;
pub mod markdown;
pub mod markup;
pub mod registry;
pub mod sanitize;
pub mod tree;

pub use assemble::{assemble, AssemblerOptions};
pub use dedent::dedent;
pub use error::ExportError;
pub use export::{dispatch, export, Action, Artifact};
pub use extract::{extract, ConversationTurn, MarkupProfile, Role, RoleMarkers, Transcript};
pub use format::{Format, SerializedDocument};
pub use markdown::MarkdownRenderer;
pub use registry::FormatRegistry;
pub use sanitize::Sanitizer;
pub use tree::{HtmlSnapshot, Selector, TreeSource};
