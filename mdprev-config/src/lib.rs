//! Shared configuration loader for mdprev.
//!
//! `defaults/mdprev.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MdprevConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdprev_babel::{HighlightMode, RenderRules};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdprev.default.toml");

/// Name of the configuration file picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = "mdprev.toml";

/// Top-level configuration consumed by mdprev applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdprevConfig {
    pub render: RenderConfig,
    pub highlight: HighlightConfig,
    pub output: OutputConfig,
}

impl MdprevConfig {
    /// Formatter rules assembled from the `render` and `highlight` sections.
    pub fn render_rules(&self) -> RenderRules {
        RenderRules {
            title_level: self.render.title_level,
            tagline_level: self.render.tagline_level,
            bullet_marker: self.render.bullet_marker,
            highlight_mode: self.highlight.mode,
        }
    }
}

/// Heading levels and markers.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub title_level: u8,
    pub tagline_level: u8,
    pub bullet_marker: char,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HighlightConfig {
    pub mode: HighlightMode,
}

/// Output selection and format-specific knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub standalone: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Apply a `key=value` assignment as typed on the command line.
    ///
    /// `true`/`false` and integers are passed as such, anything else as a string.
    pub fn set_assignment(self, assignment: &str) -> Result<Self, ConfigError> {
        let (key, raw) = assignment.split_once('=').ok_or_else(|| {
            ConfigError::Message(format!("expected key=value, got '{assignment}'"))
        })?;
        let key = key.trim();
        let raw = raw.trim();
        if key.is_empty() {
            return Err(ConfigError::Message(format!(
                "missing key in '{assignment}'"
            )));
        }

        if let Ok(flag) = raw.parse::<bool>() {
            self.set_override(key, flag)
        } else if let Ok(number) = raw.parse::<i64>() {
            self.set_override(key, number)
        } else {
            self.set_override(key, raw)
        }
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MdprevConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdprevConfig, ConfigError> {
    Loader::new().build()
}
