//! Sync state tracker: a single persisted update counter

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// One file holding the last-seen remote update counter as integer text.
///
/// Compared against the service counter at the start of each run; equality
/// means nothing changed since the previous export.
#[derive(Debug, Clone)]
pub struct SyncStateFile {
    path: PathBuf,
}

impl SyncStateFile {
    /// Track sync state in the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the persisted counter.
    ///
    /// Returns `Ok(None)` when no state has been written yet. A marker that
    /// no longer parses as an integer also counts as absent, which forces a
    /// full export on the next run.
    pub fn load(&self) -> Result<Option<i64>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };

        match raw.trim().parse::<i64>() {
            Ok(count) => Ok(Some(count)),
            Err(error) => {
                tracing::debug!(path = %self.path.display(), %error, "unparsable sync state, treating as absent");
                Ok(None)
            }
        }
    }

    /// Persist a new counter value, creating parent directories as needed.
    pub fn store(&self, update_count: i64) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, update_count.to_string())?;
        Ok(())
    }

    /// Path of the marker file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_returns_none_before_first_store() {
        let dir = tempfile::tempdir().unwrap();
        let state = SyncStateFile::new(dir.path().join("sync-state"));
        assert_eq!(state.load().unwrap(), None);
    }

    #[test]
    fn store_then_load_roundtrips_counter() {
        let dir = tempfile::tempdir().unwrap();
        let state = SyncStateFile::new(dir.path().join("nested").join("sync-state"));

        state.store(1042).unwrap();
        assert_eq!(state.load().unwrap(), Some(1042));

        state.store(1043).unwrap();
        assert_eq!(state.load().unwrap(), Some(1043));
    }

    #[test]
    fn unparsable_marker_counts_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sync-state");
        fs::write(&path, "not-a-number").unwrap();

        let state = SyncStateFile::new(path);
        assert_eq!(state.load().unwrap(), None);
    }
}
