//! Fetcher orchestrator: session setup, note listing, and rendering

use std::collections::HashMap;

use futures::future::try_join_all;

use crate::cache::NoteCache;
use crate::error::{Error, Result};
use crate::header;
use crate::markdown;
use crate::models::{Note, NoteId, NotebookId, RenderedNote, TagId};
use crate::store::NoteStore;
use crate::sync_state::SyncStateFile;

/// Metadata page size requested per listing call.
pub const NOTE_PAGE_SIZE: usize = 250;

/// An export session before setup has run.
///
/// [`Fetcher::setup`] consumes this handle and upgrades it to a
/// [`ReadyFetcher`]; note-retrieval operations only exist on the ready
/// handle, so an un-set-up session cannot be asked for notes.
pub struct Fetcher<S> {
    store: S,
    cache: NoteCache,
    sync_state: SyncStateFile,
}

impl<S: NoteStore> Fetcher<S> {
    /// Create a session over the given service client, cache, and sync
    /// state marker.
    pub const fn new(store: S, cache: NoteCache, sync_state: SyncStateFile) -> Self {
        Self {
            store,
            cache,
            sync_state,
        }
    }

    /// Run session setup and upgrade to a ready handle.
    ///
    /// The remote sync counter and the local marker are fetched together;
    /// when they are equal there is nothing to export and setup fails with
    /// [`Error::NoChange`] before anything else happens. Otherwise the new
    /// counter is persisted immediately, then notebooks and tags are
    /// fetched together and turned into the session lookup tables.
    ///
    /// Persisting the counter before the notebook/tag fetch completes is an
    /// at-least-once tradeoff: a partial setup failure still advances the
    /// marker, so the next run skips until the service changes again.
    pub async fn setup(self) -> Result<ReadyFetcher<S>> {
        let (remote, local) = tokio::try_join!(self.store.sync_state(), async {
            self.sync_state.load()
        })?;

        if local == Some(remote.update_count) {
            return Err(Error::NoChange);
        }
        self.sync_state.store(remote.update_count)?;

        let (notebooks, tags) =
            tokio::try_join!(self.store.list_notebooks(), self.store.list_tags())?;
        if notebooks.is_empty() {
            return Err(Error::EmptyNotebookSet);
        }

        tracing::debug!(
            notebooks = notebooks.len(),
            tags = tags.len(),
            update_count = remote.update_count,
            "session ready"
        );

        Ok(ReadyFetcher {
            store: self.store,
            cache: self.cache,
            notebooks: notebooks
                .into_iter()
                .map(|notebook| (notebook.id, notebook.name))
                .collect(),
            tags: tags.into_iter().map(|tag| (tag.id, tag.name)).collect(),
        })
    }
}

/// A set-up export session with notebook and tag lookup tables loaded.
#[derive(Debug)]
pub struct ReadyFetcher<S> {
    store: S,
    cache: NoteCache,
    notebooks: HashMap<NotebookId, String>,
    tags: HashMap<TagId, String>,
}

/// One page of rendered notes plus the service-reported total.
///
/// The fetcher does not auto-paginate; callers issue further calls with
/// incremented offsets until `total` is covered.
#[derive(Debug, Clone)]
pub struct NotePage {
    /// Rendered notes for this page, in listing order
    pub notes: Vec<RenderedNote>,
    /// Total note count in the notebook
    pub total: usize,
}

impl<S: NoteStore> ReadyFetcher<S> {
    /// Resolve a notebook name to its identifier.
    ///
    /// Matching is case-insensitive but exact; no partial or fuzzy match.
    pub fn notebook_by_name(&self, name: &str) -> Result<NotebookId> {
        self.notebooks
            .iter()
            .find(|(_, candidate)| candidate.eq_ignore_ascii_case(name))
            .map(|(id, _)| *id)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Names of all notebooks known to this session, sorted.
    #[must_use]
    pub fn notebook_names(&self) -> Vec<&str> {
        let mut names = self
            .notebooks
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    /// Render one page of a notebook's notes starting at `offset`.
    ///
    /// Note content is fetched concurrently within the page and recombined
    /// in listing order.
    pub async fn notebook_notes(&self, notebook: &NotebookId, offset: usize) -> Result<NotePage> {
        if !self.notebooks.contains_key(notebook) {
            return Err(Error::NotReady(format!("unknown notebook: {notebook}")));
        }

        let page = self
            .store
            .find_notes_metadata(notebook, offset, NOTE_PAGE_SIZE)
            .await?;
        let total = page.total;

        let notes = try_join_all(page.notes.iter().map(|metadata| async move {
            let content = self.render_note(&metadata.id).await?;
            Ok::<_, Error>(RenderedNote {
                title: sanitize_title(&metadata.title),
                content,
            })
        }))
        .await?;

        Ok(NotePage { notes, total })
    }

    /// Produce the final Markdown document for a single note.
    ///
    /// The front-matter block and the converted body are joined with one
    /// blank line.
    pub async fn render_note(&self, id: &NoteId) -> Result<String> {
        let note = self.raw_note(id).await?;
        let body = markdown::render(&note.content);
        let front_matter = header::front_matter(&note, &self.notebooks, &self.tags);
        Ok(format!("{front_matter}\n\n{body}"))
    }

    /// Raw note by identifier: cache first, remote on a miss.
    ///
    /// Freshly fetched notes are stamped with the local retrieval time and
    /// persisted before being returned.
    async fn raw_note(&self, id: &NoteId) -> Result<Note> {
        if let Some(cached) = self.cache.get(id) {
            tracing::debug!(%id, "note cache hit");
            return Ok(cached.note);
        }

        let note = self.store.note(id).await?;
        self.cache.put(&note, chrono::Utc::now().timestamp_millis())?;
        Ok(note)
    }
}

/// Sanitize a note title for use as a filename stem.
///
/// Every character outside ASCII alphanumerics becomes a hyphen and the
/// result is lowercased.
#[must_use]
pub fn sanitize_title(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|character| {
            if character.is_ascii_alphanumeric() {
                character
            } else {
                '-'
            }
        })
        .collect()
}
