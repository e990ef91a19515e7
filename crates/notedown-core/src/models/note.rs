//! Note models: raw service records, cache envelopes, rendered output

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::{NotebookId, TagId};

/// A unique identifier for a note, assigned by the note service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Create a new random note ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Optional per-note attributes reported by the note service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteAttributes {
    /// Author name, when the service knows one
    #[serde(default)]
    pub author: Option<String>,
    /// URL the note was clipped from
    #[serde(default)]
    pub source_url: Option<String>,
}

/// A raw note as returned by the note service or the local cache.
///
/// Timestamps are epoch milliseconds. The content field holds the
/// service's rich-text markup, untouched until rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Note title as stored on the service
    pub title: String,
    /// Rich-text markup content
    pub content: String,
    /// Optional attributes
    #[serde(default)]
    pub attributes: NoteAttributes,
    /// Tags attached to this note, in service order
    #[serde(default)]
    pub tag_ids: Vec<TagId>,
    /// Owning notebook
    pub notebook_id: NotebookId,
    /// Creation timestamp (Unix ms)
    #[serde(default)]
    pub created_at: Option<i64>,
    /// Last update timestamp (Unix ms)
    #[serde(default)]
    pub updated_at: Option<i64>,
}

/// The per-note record returned by paged metadata listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteMetadata {
    /// Unique identifier
    pub id: NoteId,
    /// Note title
    pub title: String,
}

/// Cache envelope persisted for each fetched note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedNote {
    /// Local retrieval timestamp (Unix ms)
    pub fetched_at: i64,
    /// The raw note as fetched
    pub note: Note,
}

/// The final export record for a single note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNote {
    /// Title sanitized for use as a filename stem
    pub title: String,
    /// Front-matter followed by the Markdown body
    pub content: String,
}
