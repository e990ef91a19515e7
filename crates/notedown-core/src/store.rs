//! Remote note service client

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{rate_limit_wait_minutes, Error, Result};
use crate::models::{Note, NoteId, NoteMetadata, Notebook, NotebookId, Tag};

/// Largest metadata page the note service will return per request.
pub const MAX_PAGE_SIZE: usize = 250;

/// The remote service's "anything changed?" counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SyncState {
    /// Monotonically increasing counter, bumped on any change
    pub update_count: i64,
}

/// Operations consumed from the hosted note service.
///
/// The fetcher is written against this seam; tests substitute in-process
/// doubles for the HTTP implementation.
#[allow(async_fn_in_trait)]
pub trait NoteStore {
    /// Current sync counter.
    async fn sync_state(&self) -> Result<SyncState>;

    /// All notebooks.
    async fn list_notebooks(&self) -> Result<Vec<Notebook>>;

    /// All tags.
    async fn list_tags(&self) -> Result<Vec<Tag>>;

    /// One page of note metadata for a notebook, starting at `offset`.
    ///
    /// `max_notes` is clamped to [`MAX_PAGE_SIZE`].
    async fn find_notes_metadata(
        &self,
        notebook: &NotebookId,
        offset: usize,
        max_notes: usize,
    ) -> Result<NotesMetadataPage>;

    /// Full note by identifier, with content and resource data.
    async fn note(&self, id: &NoteId) -> Result<Note>;
}

/// One page of a notebook's note metadata listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotesMetadataPage {
    /// Records in this page, in service order
    pub notes: Vec<NoteMetadata>,
    /// Total note count for the notebook as reported by the service
    pub total: usize,
}

/// HTTP implementation of [`NoteStore`] against the hosted JSON API.
#[derive(Clone)]
pub struct HttpNoteStore {
    endpoint: String,
    token: String,
    client: reqwest::Client,
}

impl HttpNoteStore {
    /// Build a client for the given API endpoint and access token.
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let endpoint = normalize_endpoint(endpoint.into())?;
        Ok(Self {
            endpoint,
            token: token.into(),
            client: reqwest::Client::builder().build()?,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self
            .client
            .get(format!("{}{path}", self.endpoint))
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(query)
            .send()
            .await?;

        let response = check_status(response).await?;
        Ok(response.json::<T>().await?)
    }
}

impl NoteStore for HttpNoteStore {
    async fn sync_state(&self) -> Result<SyncState> {
        self.get_json("/v1/sync/state", &[]).await
    }

    async fn list_notebooks(&self) -> Result<Vec<Notebook>> {
        self.get_json("/v1/notebooks", &[]).await
    }

    async fn list_tags(&self) -> Result<Vec<Tag>> {
        self.get_json("/v1/tags", &[]).await
    }

    async fn find_notes_metadata(
        &self,
        notebook: &NotebookId,
        offset: usize,
        max_notes: usize,
    ) -> Result<NotesMetadataPage> {
        let query = [
            ("notebook", notebook.as_str()),
            ("offset", offset.to_string()),
            ("max", max_notes.min(MAX_PAGE_SIZE).to_string()),
        ];
        self.get_json("/v1/notes", &query).await
    }

    async fn note(&self, id: &NoteId) -> Result<Note> {
        let query = [("include_resources", "true".to_string())];
        self.get_json(&format!("/v1/notes/{id}"), &query).await
    }
}

/// Map a non-success response to the error taxonomy.
///
/// HTTP 429 with a `Retry-After: <seconds>` header becomes the rate-limit
/// variant with the wait rounded up to minutes; a 429 without the wait
/// attribute is not a well-formed rate-limit report and falls through to
/// the generic API error.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        if let Some(seconds) = retry_after_seconds(response.headers()) {
            return Err(Error::RateLimited {
                minutes: rate_limit_wait_minutes(seconds),
            });
        }
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::Api(parse_api_error(status, &body)))
}

fn retry_after_seconds(headers: &reqwest::header::HeaderMap) -> Option<u64> {
    headers
        .get(reqwest::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    message: Option<String>,
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = payload.message.or(payload.error) {
            return format!("{} ({})", message.trim(), status.as_u16());
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    }
}

fn normalize_endpoint(raw: String) -> Result<String> {
    let endpoint = raw.trim();
    if endpoint.is_empty() {
        return Err(Error::InvalidConfiguration(
            "endpoint must not be empty".to_string(),
        ));
    }
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Ok(endpoint.trim_end_matches('/').to_string())
    } else {
        Err(Error::InvalidConfiguration(
            "endpoint must include http:// or https://".to_string(),
        ))
    }
}
