//! Configuration loading
//!
//! `defaults/tagtree.default.toml` is embedded into the binary so documented
//! defaults and runtime behavior stay in sync. Through [Loader], a
//! `tagtree.toml` in the working directory is layered on top when present, then
//! a file given with `--config`, then single-key overrides from the command
//! line, before deserializing into [TagtreeConfig].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/tagtree.default.toml");

/// Name of the per-directory configuration file picked up automatically.
pub const PROJECT_CONFIG_FILE: &str = "tagtree.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct TagtreeConfig {
    pub output: OutputConfig,
    pub html: HtmlConfig,
    pub text: TextConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of the formatter used when none is given on the command line.
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub title: String,
    pub font_family: String,
    pub indent_unit: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextConfig {
    pub indent_unit: String,
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

    /// Layer `dir/tagtree.toml` if it exists.
    pub fn with_project_file(mut self, dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(PROJECT_CONFIG_FILE);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "layering project configuration");
        }
        let source = File::from(path.as_path())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TagtreeConfig, ConfigError> {
        let config: TagtreeConfig = self.builder.build()?.try_deserialize()?;
        tracing::debug!(output_format = %config.output.format, "loaded configuration");
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagtree::formats::{html, text};
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(config.output.format, "html");
        assert_eq!(config.html.title, html::DEFAULT_TITLE);
        assert_eq!(config.html.font_family, html::DEFAULT_FONT_FAMILY);
        assert_eq!(config.html.indent_unit, html::DEFAULT_INDENT_UNIT);
        assert_eq!(config.text.indent_unit, text::DEFAULT_INDENT_UNIT);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.format", "json")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "json");
    }

    #[test]
    fn layers_user_file_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[html]\ntitle = \"Markup tree\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.html.title, "Markup tree");
        assert_eq!(config.html.font_family, html::DEFAULT_FONT_FAMILY);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new().with_file("does/not/exist.toml").build();
        assert!(result.is_err());
    }

    #[test]
    fn project_file_is_layered_under_explicit_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "[output]\nformat = \"json\"\n[html]\ntitle = \"Project\"\n",
        )
        .expect("write project config");
        let explicit = dir.path().join("explicit.toml");
        std::fs::write(&explicit, "[html]\ntitle = \"Explicit\"\n").expect("write config");

        let config = Loader::new()
            .with_project_file(dir.path())
            .with_file(&explicit)
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "json");
        assert_eq!(config.html.title, "Explicit");
    }

    #[test]
    fn missing_project_file_is_ignored() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = Loader::new()
            .with_project_file(dir.path())
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "html");
    }
}
