//! Format trait definition
//!
//! A format turns the fragments of one render pass into the text that gets
//! displayed or written out. Formats are output-only; nothing is parsed back.

use crate::error::FormatError;
use crate::render::FormattedOutput;
use std::collections::HashMap;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct Plain;
///
/// impl Format for Plain {
///     fn name(&self) -> &str {
///         "plain"
///     }
///
///     fn serialize(&self, output: &FormattedOutput) -> Result<String, FormatError> {
///         Ok(output.to_markdown())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "html")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used to pick a format from an output filename.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Serialize rendered fragments into this format
    fn serialize(&self, output: &FormattedOutput) -> Result<String, FormatError>;

    /// Serialize with extra parameters.
    ///
    /// The default implementation accepts no parameters. Formats with knobs
    /// override this and reject keys they do not know.
    fn serialize_with_options(
        &self,
        output: &FormattedOutput,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(output)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
