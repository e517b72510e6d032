//! Raw form fields
//!
//! Every field is plain text and may be empty. Nothing here validates content;
//! an empty field simply means "skip this section" when rendering.

use crate::error::FormatError;
use serde::{Deserialize, Serialize};

/// The five form fields collected for one render pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInput {
    pub title: String,
    pub tagline: String,
    pub paragraph: String,
    /// Comma-separated words or phrases to bold inside the paragraph
    pub highlight: String,
    /// Comma-separated list items
    pub items: String,
}

impl RawInput {
    /// List items after splitting and trimming, see [`parse_items`]
    pub fn item_list(&self) -> Vec<String> {
        parse_items(&self.items)
    }

    /// True when no field carries anything worth rendering
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.tagline.is_empty()
            && self.paragraph.is_empty()
            && self.highlight.is_empty()
            && self.item_list().is_empty()
    }

    pub fn from_json(source: &str) -> Result<Self, FormatError> {
        serde_json::from_str(source).map_err(|e| FormatError::InvalidInput(format!("JSON: {e}")))
    }

    pub fn from_toml(source: &str) -> Result<Self, FormatError> {
        toml::from_str(source).map_err(|e| FormatError::InvalidInput(format!("TOML: {e}")))
    }

    /// Decode an input file, using its extension when it names a known syntax.
    ///
    /// Without a usable extension JSON is tried first, then TOML.
    pub fn from_source(source: &str, extension: Option<&str>) -> Result<Self, FormatError> {
        match extension.map(|ext| ext.to_ascii_lowercase()).as_deref() {
            Some("json") => Self::from_json(source),
            Some("toml") => Self::from_toml(source),
            _ => Self::from_json(source).or_else(|json_err| {
                Self::from_toml(source).map_err(|toml_err| {
                    FormatError::InvalidInput(format!(
                        "not JSON ({json_err}) and not TOML ({toml_err})"
                    ))
                })
            }),
        }
    }
}

/// Split a comma-separated item list, trimming entries and dropping empty ones.
pub fn parse_items(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
