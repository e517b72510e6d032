//! JSON output
//!
//! Emits the fragment list as `[{"kind": "title", "markdown": "## ..."}, ...]`
//! so another program can display each fragment on its own.

use crate::error::FormatError;
use crate::format::Format;
use crate::render::FormattedOutput;

/// Format implementation for the JSON fragment list
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Fragment list as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn serialize(&self, output: &FormattedOutput) -> Result<String, FormatError> {
        let mut json = serde_json::to_string_pretty(output)
            .map_err(|e| FormatError::SerializationError(format!("JSON encoding failed: {e}")))?;
        json.push('\n');
        Ok(json)
    }
}
