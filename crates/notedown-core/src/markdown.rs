//! Content transformer: rich-text markup to Markdown

use regex::Regex;

/// Convert note markup to Markdown and normalize its whitespace.
///
/// Conversion covers the usual HTML constructs (headings, emphasis, lists,
/// links, code blocks, tables). The result is deterministic: identical
/// markup always yields identical output.
#[must_use]
pub fn render(markup: &str) -> String {
    tidy(&html2md::parse_html(markup))
}

/// Whitespace cleanup applied after conversion.
///
/// Lines containing only spaces/tabs become empty lines and trailing
/// horizontal whitespace is stripped from every line. Idempotent.
#[must_use]
pub fn tidy(text: &str) -> String {
    let trailing = Regex::new(r"(?m)[ \t]+$").expect("Invalid regex");
    trailing.replace_all(&text.replace("\r\n", "\n"), "").into_owned()
}
