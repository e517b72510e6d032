//! Markdown output
//!
//! The fragments are already Markdown; this format only joins them, one block
//! per fragment, and terminates the document with a newline.

use crate::error::FormatError;
use crate::format::Format;
use crate::render::FormattedOutput;

/// Format implementation for Markdown
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown document, one block per fragment"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn serialize(&self, output: &FormattedOutput) -> Result<String, FormatError> {
        Ok(serialize_to_markdown(output))
    }
}

/// Join fragments into a Markdown document.
///
/// An empty output stays empty rather than becoming a lone newline.
pub fn serialize_to_markdown(output: &FormattedOutput) -> String {
    if output.is_empty() {
        return String::new();
    }
    let mut markdown = output.to_markdown();
    markdown.push('\n');
    markdown
}
