//! Bolding of highlight words inside a sentence
//!
//! All words are compiled into one alternation and matched in a single pass
//! over the original text, so a replacement can never be matched again by a
//! later word. Alternatives are ordered longest first: at any position the
//! longest candidate wins. Matches that touch share one bold run, and text
//! that already sits between `**` markers is never wrapped again, which makes
//! highlighting idempotent.
//!
//! A word list too large for the regex compiler falls back to scanning word
//! by word with the same matching rules.

use crate::rules::HighlightMode;
use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Floor for the compiled pattern size (the regex crate's own default).
const MIN_PATTERN_SIZE_LIMIT: usize = 10 * (1 << 20);
/// Compiled-size budget granted per byte of pattern source.
const PATTERN_SIZE_PER_BYTE: usize = 1024;

/// A compiled set of highlight words
#[derive(Debug, Clone)]
pub struct Highlighter {
    words: Vec<String>,
    matcher: Option<Matcher>,
}

#[derive(Debug, Clone)]
enum Matcher {
    Pattern(Regex),
    /// Words longest first, tried at every character boundary
    Scan {
        ordered: Vec<String>,
        mode: HighlightMode,
    },
}

impl Matcher {
    /// Byte span of the first match starting at or after `from`.
    fn find_at(&self, text: &str, from: usize) -> Option<(usize, usize)> {
        match self {
            Matcher::Pattern(pattern) => pattern
                .find_at(text, from)
                .map(|found| (found.start(), found.end())),
            Matcher::Scan { ordered, mode } => {
                text[from..].char_indices().find_map(|(offset, _)| {
                    let start = from + offset;
                    ordered
                        .iter()
                        .find(|word| scan_accepts(text, start, word, *mode))
                        .map(|word| (start, start + word.len()))
                })
            }
        }
    }
}

impl Highlighter {
    /// Build a highlighter from a comma-separated word list.
    pub fn new(words_csv: &str, mode: HighlightMode) -> Self {
        Self::with_size_limit(words_csv, mode, None)
    }

    fn with_size_limit(
        words_csv: &str,
        mode: HighlightMode,
        size_limit: Option<usize>,
    ) -> Self {
        let words = parse_highlight_words(words_csv);
        let matcher = build_matcher(&words, mode, size_limit);
        Self { words, matcher }
    }

    /// The distinct, trimmed, non-empty words in input order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.matcher.is_none()
    }

    /// Wrap every accepted match in bold markers.
    pub fn apply(&self, text: &str) -> String {
        self.apply_counted(text).0
    }

    /// Like [`Highlighter::apply`], also returning how many matches were bolded.
    pub fn apply_counted(&self, text: &str) -> (String, usize) {
        let Some(matcher) = &self.matcher else {
            return (text.to_string(), 0);
        };

        let bold = bold_spans(text);
        let mut output = String::with_capacity(text.len() + 8);
        let mut copied = 0;
        let mut search_from = 0;
        let mut last_end = None;
        let mut count = 0;

        while let Some((start, end)) = matcher.find_at(text, search_from) {
            if bold.iter().any(|&(open, close)| start < close && end > open) {
                // Retry one character later so shorter alternatives still get a chance.
                search_from = next_char_boundary(text, start);
                continue;
            }
            if last_end == Some(start) {
                // Touches the previous match: reopen its bold run instead of closing it.
                output.truncate(output.len() - 2);
            } else {
                output.push_str(&text[copied..start]);
                output.push_str("**");
            }
            output.push_str(&text[start..end]);
            output.push_str("**");
            copied = end;
            search_from = end;
            last_end = Some(end);
            count += 1;
        }

        output.push_str(&text[copied..]);
        (output, count)
    }
}

/// Split a comma-separated highlight list into distinct non-empty words.
pub fn parse_highlight_words(csv: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for word in csv.split(',').map(str::trim) {
        if !word.is_empty() && !words.iter().any(|seen| seen == word) {
            words.push(word.to_string());
        }
    }
    words
}

fn build_matcher(
    words: &[String],
    mode: HighlightMode,
    size_limit: Option<usize>,
) -> Option<Matcher> {
    if words.is_empty() {
        return None;
    }

    let mut ordered: Vec<String> = words.to_vec();
    ordered.sort_by_key(|word| std::cmp::Reverse(word.chars().count()));

    let alternatives: Vec<String> = ordered
        .iter()
        .map(|word| match mode {
            HighlightMode::Substring => regex::escape(word),
            HighlightMode::Word => word_alternative(word),
        })
        .collect();
    let source = alternatives.join("|");
    let limit = size_limit.unwrap_or_else(|| {
        MIN_PATTERN_SIZE_LIMIT.max(source.len().saturating_mul(PATTERN_SIZE_PER_BYTE))
    });

    match RegexBuilder::new(&source)
        .size_limit(limit)
        .dfa_size_limit(limit)
        .build()
    {
        Ok(pattern) => Some(Matcher::Pattern(pattern)),
        Err(err) => {
            warn!(
                error = %err,
                words = ordered.len(),
                "highlight pattern not compiled, scanning word by word"
            );
            Some(Matcher::Scan { ordered, mode })
        }
    }
}

// `\b` only makes sense on an edge that is itself a word character; a
// phrase like "C++" must not demand a word character after the last `+`.
fn word_alternative(word: &str) -> String {
    let starts_wordy = word.chars().next().is_some_and(is_word_char);
    let ends_wordy = word.chars().last().is_some_and(is_word_char);
    format!(
        "{}{}{}",
        if starts_wordy { r"\b" } else { "" },
        regex::escape(word),
        if ends_wordy { r"\b" } else { "" }
    )
}

/// Same acceptance rule as the compiled pattern, for one word at one position.
fn scan_accepts(text: &str, start: usize, word: &str, mode: HighlightMode) -> bool {
    if !text[start..].starts_with(word) {
        return false;
    }
    if mode == HighlightMode::Substring {
        return true;
    }
    let end = start + word.len();
    let open_ok = !word.chars().next().is_some_and(is_word_char)
        || !text[..start].chars().next_back().is_some_and(is_word_char);
    let close_ok = !word.chars().last().is_some_and(is_word_char)
        || !text[end..].chars().next().is_some_and(is_word_char);
    open_ok && close_ok
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Byte ranges `[open, close)` covering `**...**` pairs, markers included.
fn bold_spans(text: &str) -> Vec<(usize, usize)> {
    let markers: Vec<usize> = text.match_indices("**").map(|(at, _)| at).collect();
    markers
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1] + 2))
        .collect()
}

fn next_char_boundary(text: &str, at: usize) -> usize {
    text[at..]
        .chars()
        .next()
        .map_or(text.len(), |c| at + c.len_utf8())
}
