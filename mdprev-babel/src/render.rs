//! One render pass: raw form fields in, Markdown fragments out.
//!
//! Sections are emitted in a fixed order (title, tagline, paragraph, list)
//! and only for fields that carry something. Title and tagline travel
//! together: if either is present both headings are produced.

use crate::formatter::{
    format_list, format_paragraph_with_rules, format_title_tagline_with_rules,
};
use crate::input::RawInput;
use crate::rules::RenderRules;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A self-contained piece of Markdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "markdown", rename_all = "lowercase")]
pub enum Fragment {
    Title(String),
    Tagline(String),
    Paragraph(String),
    List(String),
}

impl Fragment {
    pub fn kind(&self) -> &'static str {
        match self {
            Fragment::Title(_) => "title",
            Fragment::Tagline(_) => "tagline",
            Fragment::Paragraph(_) => "paragraph",
            Fragment::List(_) => "list",
        }
    }

    pub fn markdown(&self) -> &str {
        match self {
            Fragment::Title(md)
            | Fragment::Tagline(md)
            | Fragment::Paragraph(md)
            | Fragment::List(md) => md,
        }
    }
}

/// The fragments produced by one render pass, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormattedOutput {
    fragments: Vec<Fragment>,
}

impl FormattedOutput {
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// The text of the title heading without its marker, if one was rendered.
    pub fn title_text(&self) -> Option<&str> {
        self.fragments.iter().find_map(|fragment| match fragment {
            Fragment::Title(md) => Some(md.trim_start_matches('#').trim()),
            _ => None,
        })
    }

    /// All fragments as one document, each fragment its own Markdown block.
    pub fn to_markdown(&self) -> String {
        self.fragments
            .iter()
            .map(Fragment::markdown)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl<'a> IntoIterator for &'a FormattedOutput {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}

/// Render the form with the default rules.
pub fn render(input: &RawInput) -> FormattedOutput {
    render_with_rules(input, &RenderRules::default())
}

pub fn render_with_rules(input: &RawInput, rules: &RenderRules) -> FormattedOutput {
    if input.is_empty() {
        debug!("nothing to render");
        return FormattedOutput::default();
    }

    let mut fragments = Vec::new();

    if !input.title.is_empty() || !input.tagline.is_empty() {
        let (title, tagline) =
            format_title_tagline_with_rules(&input.title, &input.tagline, rules);
        fragments.push(Fragment::Title(title));
        fragments.push(Fragment::Tagline(tagline));
    }

    if !input.paragraph.is_empty() {
        let paragraph = format_paragraph_with_rules(&input.paragraph, &input.highlight, rules);
        if paragraph.is_empty() {
            debug!("paragraph has no sentences, skipping");
        } else {
            fragments.push(Fragment::Paragraph(paragraph));
        }
    }

    let items = input.item_list();
    if !items.is_empty() {
        fragments.push(Fragment::List(format_list(&items)));
    }

    debug!(
        fragments = fragments.len(),
        mode = rules.highlight_mode.as_str(),
        "rendered form"
    );
    FormattedOutput::new(fragments)
}
