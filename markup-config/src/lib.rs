//! Shared configuration loader for the markup toolchain.
//!
//! `defaults/markup.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MarkupConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, Map, ValueKind};
use markup_builder::{Encoding, ImportOptions, ImportScope, MarkupError};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/markup.default.toml");

/// Top-level configuration consumed by markup applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkupConfig {
    pub import: ImportConfig,
    pub render: RenderConfig,
}

/// Mirrors the knobs exposed by the importer.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    pub scope: ScopeSetting,
    pub keep_blank_text: bool,
    pub encoding: String,
}

impl ImportConfig {
    /// The declared input encoding, rejected when the importer cannot read it.
    pub fn encoding(&self) -> Result<Encoding, MarkupError> {
        let encoding: Encoding = self.encoding.parse()?;
        encoding.ensure_supported()?;
        Ok(encoding)
    }
}

impl From<&ImportConfig> for ImportOptions {
    fn from(config: &ImportConfig) -> Self {
        ImportOptions {
            scope: config.scope.into(),
            keep_blank_text: config.keep_blank_text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ScopeSetting {
    #[serde(rename = "body")]
    Body,
    #[serde(rename = "root")]
    Root,
}

impl From<ScopeSetting> for ImportScope {
    fn from(setting: ScopeSetting) -> Self {
        match setting {
            ScopeSetting::Body => ImportScope::Body,
            ScopeSetting::Root => ImportScope::Root,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub separator: String,
}

/// Prefix of environment variables read by [`Loader::with_environment`], e.g.
/// `MARKUP_IMPORT__SCOPE=root`.
pub const ENV_PREFIX: &str = "MARKUP";

/// Layers configuration sources in precedence order: embedded defaults, files,
/// environment, then explicit overrides. Later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// Layer a TOML file, skipped when absent (e.g. `./markup.toml`).
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), false)
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `MARKUP_<SECTION>__<KEY>` variables from the process environment.
    pub fn with_environment(self) -> Self {
        self.with_environment_vars(None)
    }

    fn with_environment_vars(mut self, vars: Option<Map<String, String>>) -> Self {
        let source = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(vars);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override a single key, e.g. `import.scope`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Apply the importer flags a command line exposes. `None` / `false` leave the
    /// layered value untouched.
    pub fn with_import_flags(
        self,
        scope: Option<&str>,
        keep_blank_text: bool,
    ) -> Result<Self, ConfigError> {
        let loader = match scope {
            Some(scope) => self.set_override("import.scope", scope)?,
            None => self,
        };
        if keep_blank_text {
            loader.set_override("import.keep_blank_text", true)
        } else {
            Ok(loader)
        }
    }

    pub fn build(self) -> Result<MarkupConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<MarkupConfig, ConfigError> {
    Loader::new().build()
}
