//! Turn extraction
//!
//! Walks the turn containers of a rendered chat page in document order and
//! turns each one into a [`ConversationTurn`]:
//!
//!     turn container ──► content container ──► deep clone ──► sanitize
//!                                                     │
//!                        rendered_markdown ◄── render ┤
//!                        rendered_markup   ◄── style ─┘
//!
//! Which elements are turns, where the content lives and how roles are told
//! apart is data ([`MarkupProfile`]), so differently marked-up chat pages only
//! need a different profile. Extraction never fails: a turn without a
//! classification container or a content container is skipped, a turn without
//! a recognizable role marker is `Unknown`, and a turn whose Markdown is blank
//! after sanitizing is dropped.

use crate::markdown::MarkdownRenderer;
use crate::markup::render_markup;
use crate::sanitize::Sanitizer;
use crate::tree::{dom, Selector, TreeSource};
use chrono::{DateTime, Local};
use markup5ever_rcdom::Handle;
use serde::Serialize;
use std::fmt;

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    User,
    Model,
    Unknown,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "User"),
            Role::Model => write!(f, "Model"),
            Role::Unknown => write!(f, "Unknown"),
        }
    }
}

/// One extracted message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationTurn {
    pub role: Role,
    /// Sanitized, style-annotated inner HTML, used for the PDF page only
    pub rendered_markup: String,
    /// Never blank for a turn returned by [`extract`]
    pub rendered_markdown: String,
}

/// Class markers that identify roles on the classification container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleMarkers {
    pub user: String,
    pub model: String,
}

impl RoleMarkers {
    /// Pure classification from an element's class list. The user marker is
    /// checked first.
    pub fn classify(&self, classes: &[String]) -> Role {
        if classes.iter().any(|class| class == &self.user) {
            Role::User
        } else if classes.iter().any(|class| class == &self.model) {
            Role::Model
        } else {
            Role::Unknown
        }
    }
}

impl Default for RoleMarkers {
    fn default() -> Self {
        Self {
            user: "user".to_string(),
            model: "model".to_string(),
        }
    }
}

/// Describes how a chat page is marked up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupProfile {
    /// One element per turn, in document order
    pub turn: Selector,
    /// Element inside a turn whose classes carry the role markers
    pub classifier: Selector,
    /// Element inside a turn holding the message content
    pub content: Selector,
    pub roles: RoleMarkers,
    pub sanitizer: Sanitizer,
}

impl Default for MarkupProfile {
    fn default() -> Self {
        Self {
            turn: Selector::tag("ms-chat-turn"),
            classifier: Selector::class("chat-turn-container"),
            content: Selector::class("turn-content"),
            roles: RoleMarkers::default(),
            sanitizer: Sanitizer::default(),
        }
    }
}

impl MarkupProfile {
    /// Role of a turn, read from its classification container. `None` when the
    /// turn has no such container.
    pub fn classify(&self, turn: &Handle) -> Option<Role> {
        dom::select_first(turn, &self.classifier)
            .map(|carrier| self.roles.classify(&dom::classes(&carrier)))
    }
}

/// The turns of one export, stamped with the moment they were taken
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub turns: Vec<ConversationTurn>,
    pub generated_at: DateTime<Local>,
}

impl Transcript {
    pub fn new(turns: Vec<ConversationTurn>, generated_at: DateTime<Local>) -> Self {
        Self {
            turns,
            generated_at,
        }
    }

    /// Extract `source` now
    pub fn capture(source: &dyn TreeSource, profile: &MarkupProfile) -> Self {
        Self::new(extract(source, profile), Local::now())
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// Extract every non-empty turn from `source`, in document order
pub fn extract(source: &dyn TreeSource, profile: &MarkupProfile) -> Vec<ConversationTurn> {
    let root = source.root();
    let renderer = MarkdownRenderer::new().with_base_url(source.base_url());

    let containers = dom::select(&root, &profile.turn);
    tracing::debug!("found {} turn containers", containers.len());

    containers
        .iter()
        .enumerate()
        .filter_map(|(index, turn)| extract_turn(index, turn, profile, &renderer))
        .collect()
}

fn extract_turn(
    index: usize,
    turn: &Handle,
    profile: &MarkupProfile,
    renderer: &MarkdownRenderer<'_>,
) -> Option<ConversationTurn> {
    let Some(role) = profile.classify(turn) else {
        tracing::debug!(turn = index, "skipping turn without classification container");
        return None;
    };
    let Some(content) = dom::select_first(turn, &profile.content) else {
        tracing::debug!(turn = index, "skipping turn without content container");
        return None;
    };

    let working = dom::deep_clone(&content);
    let removed = profile.sanitizer.sanitize(&working);
    tracing::trace!(turn = index, removed, "sanitized turn content");

    let rendered_markdown = renderer.render(&working);
    if rendered_markdown.trim().is_empty() {
        tracing::debug!(turn = index, %role, "skipping turn with no content after sanitizing");
        return None;
    }

    let rendered_markup = render_markup(&working);

    Some(ConversationTurn {
        role,
        rendered_markup,
        rendered_markdown,
    })
}
