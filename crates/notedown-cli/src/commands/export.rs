use std::fs;
use std::path::Path;

use notedown_core::fetcher::sanitize_title;
use notedown_core::RenderedNote;

use crate::commands::common::ready_fetcher;
use crate::config::ExportConfig;
use crate::error::CliError;

pub async fn run_export(
    notebook_name: &str,
    output_dir: &Path,
    config: &ExportConfig,
) -> Result<(), CliError> {
    let fetcher = ready_fetcher(config).await?;
    let notebook_id = fetcher.notebook_by_name(notebook_name)?;

    let notebook_dir = output_dir.join(sanitize_title(notebook_name));
    fs::create_dir_all(&notebook_dir)?;

    let mut offset = 0usize;
    let mut written = 0usize;
    loop {
        let page = fetcher.notebook_notes(&notebook_id, offset).await?;
        let count = page.notes.len();

        for note in &page.notes {
            let path = notebook_dir.join(format!("{}.md", file_stem(note)));
            fs::write(&path, &note.content)?;
            tracing::info!(path = %path.display(), "wrote note");
        }

        written += count;
        offset += count;
        if count == 0 || written >= page.total {
            break;
        }
    }

    println!("Exported {written} note(s) to {}", notebook_dir.display());
    Ok(())
}

fn file_stem(note: &RenderedNote) -> &str {
    if note.title.is_empty() {
        "untitled"
    } else {
        &note.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_stem_falls_back_for_empty_titles() {
        let note = RenderedNote {
            title: String::new(),
            content: "---\n---".to_string(),
        };
        assert_eq!(file_stem(&note), "untitled");

        let note = RenderedNote {
            title: "q-a--day-1".to_string(),
            content: "---\n---".to_string(),
        };
        assert_eq!(file_stem(&note), "q-a--day-1");
    }
}
