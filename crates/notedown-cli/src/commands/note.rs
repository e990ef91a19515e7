use notedown_core::NoteId;

use crate::commands::common::ready_fetcher;
use crate::config::ExportConfig;
use crate::error::CliError;

pub async fn run_note(guid: &str, config: &ExportConfig) -> Result<(), CliError> {
    let id = guid
        .trim()
        .parse::<NoteId>()
        .map_err(|_| CliError::InvalidNoteId(guid.to_string()))?;

    let fetcher = ready_fetcher(config).await?;
    let document = fetcher.render_note(&id).await?;
    println!("{document}");
    Ok(())
}
