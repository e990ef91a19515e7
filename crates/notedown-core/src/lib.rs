//! notedown-core - Core library for notedown
//!
//! This crate contains the note-fetching pipeline shared by all notedown
//! interfaces: the remote service client, the local note cache, the sync
//! state tracker, and the Markdown rendering of fetched notes.

pub mod cache;
pub mod error;
pub mod fetcher;
pub mod header;
pub mod markdown;
pub mod models;
pub mod store;
pub mod sync_state;

pub use cache::NoteCache;
pub use error::{Error, Result};
pub use fetcher::{Fetcher, NotePage, ReadyFetcher};
pub use models::{Note, NoteId, Notebook, NotebookId, RenderedNote, Tag, TagId};
pub use store::{HttpNoteStore, NoteStore};
pub use sync_state::SyncStateFile;
