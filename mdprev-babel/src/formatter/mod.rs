//! Markdown formatter
//!
//! Three pure functions turn raw form text into Markdown fragments:
//!
//! | Input              | Output                          |
//! |--------------------|---------------------------------|
//! | title              | `## title`                      |
//! | tagline            | `###### *tagline*`              |
//! | paragraph          | one `- sentence` line per `.`   |
//! | highlight words    | `**word**` inside the sentences |
//! | list items         | `1. *item*`, `2. *item*`, ...   |
//!
//! None of them fail: every string, including the empty one, has an output.
//! The `_with_rules` variants take a [`RenderRules`]; the plain ones use the
//! defaults, which produce exactly the table above.

pub mod highlight;

use crate::rules::RenderRules;
use highlight::Highlighter;
use tracing::trace;

pub use highlight::parse_highlight_words;

/// Format a title and tagline as headings.
///
/// ```ignore
/// let (title, tagline) = format_title_tagline("Space", "far away");
/// assert_eq!(title, "## Space");
/// assert_eq!(tagline, "###### *far away*");
/// ```
pub fn format_title_tagline(title: &str, tagline: &str) -> (String, String) {
    format_title_tagline_with_rules(title, tagline, &RenderRules::default())
}

pub fn format_title_tagline_with_rules(
    title: &str,
    tagline: &str,
    rules: &RenderRules,
) -> (String, String) {
    (
        format!("{} {title}", rules.title_marker()),
        format!("{} *{tagline}*", rules.tagline_marker()),
    )
}

/// Format a paragraph as one bullet per sentence, bolding the highlight words.
///
/// Sentences are the `.`-separated pieces of `text`, trimmed, with empty
/// pieces dropped. `highlight_words` is a comma-separated list; an empty list
/// leaves the sentences untouched.
pub fn format_paragraph(text: &str, highlight_words: &str) -> String {
    format_paragraph_with_rules(text, highlight_words, &RenderRules::default())
}

pub fn format_paragraph_with_rules(
    text: &str,
    highlight_words: &str,
    rules: &RenderRules,
) -> String {
    let highlighter = Highlighter::new(highlight_words, rules.highlight_mode);
    let mut highlighted = 0;

    let lines: Vec<String> = split_sentences(text)
        .into_iter()
        .map(|sentence| {
            let (body, count) = highlighter.apply_counted(sentence);
            highlighted += count;
            format!("{} {body}", rules.bullet_marker)
        })
        .collect();

    if !highlighter.is_empty() && highlighted == 0 {
        trace!(words = ?highlighter.words(), "no highlight word matched the paragraph");
    }

    lines.join("\n")
}

/// Format items as a numbered list of italic entries.
///
/// Items are used as given; see [`crate::parse_items`] for turning a
/// comma-separated field into items.
pub fn format_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| format!("{}. *{}*", index + 1, item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split text on `.` into trimmed, non-empty sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split('.')
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}
