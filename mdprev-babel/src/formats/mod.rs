//! Output format implementations
//!
//! Each format serializes a [`crate::FormattedOutput`]:
//! - `markdown`: the fragments as one Markdown document
//! - `html`: that document rendered through comrak
//! - `json`: the fragment list, tagged by kind

pub mod html;
pub mod json;
pub mod markdown;

pub use html::HtmlFormat;
pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
