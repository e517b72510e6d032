//! Markdown generation for the mdprev form
//!
//!     A form collects five plain-text fields: a title, a tagline, a paragraph, a comma-separated
//!     list of words to highlight, and a comma-separated list of items. This crate turns them into
//!     Markdown fragments and serializes those fragments for display.
//!
//!     This is a pure lib: it powers mdprev-cli but is shell agnostic. No code here reads stdin,
//!     writes to stdout or looks at the environment. Collecting the fields and showing the result
//!     is the job of the caller.
//!
//! Architecture
//!
//!     RawInput ──render──▶ FormattedOutput ──Format──▶ String
//!
//!     - input.rs          the five raw fields, decodable from JSON or TOML
//!     - formatter/        the three formatting functions and the highlighter
//!     - render.rs         composition of the formatters into ordered fragments
//!     - rules.rs          RenderRules, the knobs the formatter honors
//!     - format.rs         Format trait for output serializers
//!     - registry.rs       FormatRegistry for discovery and selection
//!     - formats/          markdown, html and json
//!
//! Formatting Rules
//!
//!     Title            `## title`
//!     Tagline          `###### *tagline*`
//!     Paragraph        split on `.`, one `- sentence` bullet per non-empty piece
//!     Highlight words  `**word**` around every match inside the sentences
//!     Items            `1. *item*`, numbered from one
//!
//!     Every formatting function is total. Empty input gives empty (or marker-only) output and
//!     nothing ever returns an error. Errors only exist when picking or running an output format.
//!
//! Highlighting
//!
//!     Highlight words are matched in a single pass over each sentence with non-overlapping
//!     spans, so a bolded word is never bolded again by a later word, and text already between
//!     `**` markers is left alone. By default only whole words match; the `substring` mode also
//!     matches inside longer words. See formatter/highlight.rs.
//!
//! Testing
//!
//!     tests
//!     ├── lib.rs
//!     ├── formatter       # formatting rules, snapshots and properties
//!     └── formats         # output structure, checked by parsing with comrak
//!
pub mod error;
pub mod format;
pub mod formats;
pub mod formatter;
pub mod input;
pub mod registry;
pub mod render;
pub mod rules;

pub use error::FormatError;
pub use format::Format;
pub use formatter::{
    format_list, format_paragraph, format_paragraph_with_rules, format_title_tagline,
    format_title_tagline_with_rules,
};
pub use input::{parse_items, RawInput};
pub use registry::FormatRegistry;
pub use render::{render, render_with_rules, FormattedOutput, Fragment};
pub use rules::{HighlightMode, RenderRules};
