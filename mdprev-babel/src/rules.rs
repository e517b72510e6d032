use serde::{Deserialize, Serialize};

/// How highlight words are located inside a sentence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightMode {
    /// Only whole words: the match may not touch a word character on either side
    #[default]
    Word,
    /// Any literal occurrence, including inside longer words
    Substring,
}

impl HighlightMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HighlightMode::Word => "word",
            HighlightMode::Substring => "substring",
        }
    }
}

/// Knobs for the Markdown formatter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRules {
    /// Heading level used for the title (clamped to 1..=6)
    pub title_level: u8,

    /// Heading level used for the tagline (clamped to 1..=6)
    pub tagline_level: u8,

    /// Marker placed in front of every paragraph sentence
    pub bullet_marker: char,

    /// Matching strategy for highlight words
    pub highlight_mode: HighlightMode,
}

impl RenderRules {
    pub(crate) fn title_marker(&self) -> String {
        heading_marker(self.title_level)
    }

    pub(crate) fn tagline_marker(&self) -> String {
        heading_marker(self.tagline_level)
    }
}

impl Default for RenderRules {
    fn default() -> Self {
        Self {
            title_level: 2,
            tagline_level: 6,
            bullet_marker: '-',
            highlight_mode: HighlightMode::Word,
        }
    }
}

fn heading_marker(level: u8) -> String {
    "#".repeat(usize::from(level.clamp(1, 6)))
}
