//! Local note cache: one JSON file per note identifier

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{CachedNote, Note, NoteId};

/// Persistent key-value store for raw notes, keyed by note identifier.
///
/// Entries are immutable once written and never evicted or expired here;
/// staleness is the caller's responsibility. The store survives across
/// export runs.
#[derive(Debug, Clone)]
pub struct NoteCache {
    dir: PathBuf,
}

impl NoteCache {
    /// Create a cache rooted at the given directory.
    ///
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Read a cached note.
    ///
    /// A missing entry, an unreadable file, or an unparsable payload all
    /// count as absence; read failures are never surfaced to the caller.
    #[must_use]
    pub fn get(&self, id: &NoteId) -> Option<CachedNote> {
        let path = self.entry_path(id);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(error) => {
                if error.kind() != io::ErrorKind::NotFound {
                    tracing::debug!(path = %path.display(), %error, "unreadable cache entry, treating as miss");
                }
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(cached) => Some(cached),
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "corrupt cache entry, treating as miss");
                None
            }
        }
    }

    /// Persist a note together with its local retrieval timestamp.
    pub fn put(&self, note: &Note, fetched_at: i64) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let entry = CachedNote {
            fetched_at,
            note: note.clone(),
        };
        let payload = serde_json::to_string_pretty(&entry)?;
        fs::write(self.entry_path(&note.id), payload)?;
        Ok(())
    }

    /// Filesystem location of the entry for the given id.
    #[must_use]
    pub fn entry_path(&self, id: &NoteId) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Cache root directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
