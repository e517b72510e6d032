//! HTML output
//!
//! The Markdown document is rendered with `comrak`, the same CommonMark
//! implementation used to check the Markdown output in tests. Raw HTML typed
//! into a form field is not passed through: comrak's safe rendering replaces
//! it with a comment.
//!
//! # Options
//!
//! | Key          | Values          | Effect                                          |
//! |--------------|-----------------|-------------------------------------------------|
//! | `standalone` | `true`/`false`  | Wrap the fragment in a full `<html>` page       |
//!
//! A standalone page uses the rendered title as its `<title>`, falling back
//! to `mdprev preview` when the form had no title.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::markdown::serialize_to_markdown;
use crate::render::FormattedOutput;
use comrak::{markdown_to_html, Options};
use std::collections::HashMap;

const DEFAULT_PAGE_TITLE: &str = "mdprev preview";

/// Format implementation for HTML
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML rendered from the Markdown fragments"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn serialize(&self, output: &FormattedOutput) -> Result<String, FormatError> {
        Ok(serialize_to_html(output, false))
    }

    fn serialize_with_options(
        &self,
        output: &FormattedOutput,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut standalone = false;
        for (key, value) in options {
            match key.as_str() {
                "standalone" => standalone = parse_bool_option(key, value)?,
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'html' does not support parameter '{other}'"
                    )))
                }
            }
        }
        Ok(serialize_to_html(output, standalone))
    }
}

/// Render fragments to HTML, optionally as a complete page.
pub fn serialize_to_html(output: &FormattedOutput, standalone: bool) -> String {
    let body = markdown_to_html(&serialize_to_markdown(output), &Options::default());
    if !standalone {
        return body;
    }

    let title = output
        .title_text()
        .filter(|title| !title.is_empty())
        .unwrap_or(DEFAULT_PAGE_TITLE);
    format!(
        concat!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n",
            "<title>{}</title>\n</head>\n<body>\n{body}</body>\n</html>\n",
        ),
        escape_html(title),
        body = body
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn parse_bool_option(key: &str, raw: &str) -> Result<bool, FormatError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(FormatError::NotSupported(format!(
            "Invalid boolean value '{other}' for '{key}'"
        ))),
    }
}
