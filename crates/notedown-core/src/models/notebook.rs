//! Notebook model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A unique identifier for a notebook, assigned by the note service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotebookId(Uuid);

impl NotebookId {
    /// Create a new random notebook ID
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

impl Default for NotebookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotebookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NotebookId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A named container of notes on the note service.
///
/// Fetched once per session and held as an immutable snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    /// Unique identifier
    pub id: NotebookId,
    /// Notebook name
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notebook_id_unique() {
        let id1 = NotebookId::new();
        let id2 = NotebookId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_notebook_id_parse() {
        let id = NotebookId::new();
        let parsed: NotebookId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
    }
}
