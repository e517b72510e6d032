//! Output format tests
//!
//! Markdown output is parsed back with comrak to check that every fragment
//! lands as the intended CommonMark structure.

mod html;
