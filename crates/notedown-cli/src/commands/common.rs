use notedown_core::{Fetcher, HttpNoteStore, NoteCache, ReadyFetcher, SyncStateFile};

use crate::config::ExportConfig;
use crate::error::CliError;

/// Build the service client and run session setup.
pub async fn ready_fetcher(config: &ExportConfig) -> Result<ReadyFetcher<HttpNoteStore>, CliError> {
    let store = HttpNoteStore::new(&config.endpoint, &config.token)?;
    let fetcher = Fetcher::new(
        store,
        NoteCache::new(config.cache_dir()),
        SyncStateFile::new(config.sync_state_path()),
    );
    Ok(fetcher.setup().await?)
}
