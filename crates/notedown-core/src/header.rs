//! Metadata header builder: raw note to front-matter block

use std::collections::HashMap;
use std::fmt::Write as _;

use chrono::TimeZone;

use crate::models::{Note, NotebookId, TagId};

/// Render a note's metadata as a front-matter block delimited by `---`.
///
/// Fields appear in fixed order, each only when its source value is
/// non-empty: title, author, date (created), updated (only when it differs
/// from created), url, tags, notebook, guid. Tag and notebook names are
/// resolved through the lookup tables at render time; unresolved ids are
/// skipped. The returned block has no trailing newline.
#[must_use]
pub fn front_matter(
    note: &Note,
    notebooks: &HashMap<NotebookId, String>,
    tags: &HashMap<TagId, String>,
) -> String {
    let mut header = String::from("---\n");
    let _ = writeln!(header, "title: {}", note.title);

    if let Some(author) = non_empty(note.attributes.author.as_deref()) {
        let _ = writeln!(header, "author: {author}");
    }

    if let Some(created) = note.created_at.and_then(format_timestamp) {
        let _ = writeln!(header, "date: {created}");
    }

    if let Some(updated) = note.updated_at {
        if note.created_at != Some(updated) {
            if let Some(formatted) = format_timestamp(updated) {
                let _ = writeln!(header, "updated: {formatted}");
            }
        }
    }

    if let Some(url) = non_empty(note.attributes.source_url.as_deref()) {
        let _ = writeln!(header, "url: {url}");
    }

    let tag_names = note
        .tag_ids
        .iter()
        .filter_map(|id| tags.get(id))
        .collect::<Vec<_>>();
    if !tag_names.is_empty() {
        header.push_str("tags:\n");
        for name in tag_names {
            let _ = writeln!(header, "  - {name}");
        }
    }

    if let Some(name) = notebooks.get(&note.notebook_id) {
        let _ = writeln!(header, "notebook: {name}");
    }

    let _ = writeln!(header, "guid: {}", note.id);
    header.push_str("---");
    header
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Format an epoch-millisecond timestamp as `YYYY-MM-DD H:MM:SS` (UTC).
fn format_timestamp(timestamp_ms: i64) -> Option<String> {
    chrono::Utc
        .timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|datetime| datetime.format("%Y-%m-%d %-H:%M:%S").to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::models::{NoteAttributes, Notebook, Tag};

    use super::*;

    fn bare_note() -> Note {
        Note {
            id: "8fd2f97e-5cfe-44a2-b593-d0ede783dcf3".parse().unwrap(),
            title: "Daily log".to_string(),
            content: String::new(),
            attributes: NoteAttributes::default(),
            tag_ids: Vec::new(),
            notebook_id: NotebookId::new(),
            created_at: Some(1_700_000_000_000),
            updated_at: None,
        }
    }

    #[test]
    fn minimal_note_renders_title_date_guid_in_order() {
        let header = front_matter(&bare_note(), &HashMap::new(), &HashMap::new());
        let lines = header.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            vec![
                "---",
                "title: Daily log",
                "date: 2023-11-14 22:13:20",
                "guid: 8fd2f97e-5cfe-44a2-b593-d0ede783dcf3",
                "---",
            ]
        );
    }

    #[test]
    fn date_hour_is_not_zero_padded() {
        let mut note = bare_note();
        note.created_at = Some(1_700_040_000_000);
        let header = front_matter(&note, &HashMap::new(), &HashMap::new());
        assert!(header.contains("date: 2023-11-15 9:20:00"));
    }

    #[test]
    fn updated_line_emitted_only_when_it_differs_from_created() {
        let mut note = bare_note();
        note.updated_at = note.created_at;
        let header = front_matter(&note, &HashMap::new(), &HashMap::new());
        assert!(!header.contains("updated:"));

        note.updated_at = Some(1_700_000_060_000);
        let header = front_matter(&note, &HashMap::new(), &HashMap::new());
        assert!(header.contains("updated: 2023-11-14 22:14:20"));
    }

    #[test]
    fn updated_line_emitted_when_created_is_missing() {
        let mut note = bare_note();
        note.created_at = None;
        note.updated_at = Some(1_700_000_000_000);
        let header = front_matter(&note, &HashMap::new(), &HashMap::new());
        assert!(!header.contains("date:"));
        assert!(header.contains("updated: 2023-11-14 22:13:20"));
    }

    #[test]
    fn blank_author_and_url_are_omitted() {
        let mut note = bare_note();
        note.attributes = NoteAttributes {
            author: Some("   ".to_string()),
            source_url: Some(String::new()),
        };
        let header = front_matter(&note, &HashMap::new(), &HashMap::new());
        assert!(!header.contains("author:"));
        assert!(!header.contains("url:"));
    }

    #[test]
    fn tags_render_as_nested_list_skipping_unresolved_ids() {
        let work = Tag {
            id: TagId::new(),
            name: "work".to_string(),
        };
        let urgent = Tag {
            id: TagId::new(),
            name: "urgent".to_string(),
        };
        let unknown = TagId::new();

        let mut note = bare_note();
        note.tag_ids = vec![work.id, unknown, urgent.id];

        let tags = [work, urgent]
            .into_iter()
            .map(|tag| (tag.id, tag.name))
            .collect::<HashMap<_, _>>();
        let header = front_matter(&note, &HashMap::new(), &tags);

        assert!(header.contains("tags:\n  - work\n  - urgent\n"));
    }

    #[test]
    fn notebook_name_resolved_through_lookup_table() {
        let notebook = Notebook {
            id: NotebookId::new(),
            name: "Journal".to_string(),
        };
        let mut note = bare_note();
        note.notebook_id = notebook.id;

        let notebooks = HashMap::from([(notebook.id, notebook.name)]);
        let header = front_matter(&note, &notebooks, &HashMap::new());
        assert!(header.contains("notebook: Journal"));

        let header = front_matter(&note, &HashMap::new(), &HashMap::new());
        assert!(!header.contains("notebook:"));
    }

    #[test]
    fn author_and_url_render_when_present() {
        let mut note = bare_note();
        note.attributes = NoteAttributes {
            author: Some("sam".to_string()),
            source_url: Some("https://example.com/article".to_string()),
        };
        let header = front_matter(&note, &HashMap::new(), &HashMap::new());
        assert!(header.contains("author: sam"));
        assert!(header.contains("url: https://example.com/article"));
    }
}
