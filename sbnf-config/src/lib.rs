//! Shared configuration loader for the SBNF compiler.
//!
//! The defaults live in `defaults/sbnf.default.toml` and are compiled in. A
//! [`Loader`] stacks a user file, `SBNF_*` environment variables and
//! command-line settings on top, in that order, and deserializes the result
//! into [`SbnfConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/sbnf.default.toml");
const ENV_PREFIX: &str = "SBNF";

/// Top-level configuration consumed by SBNF applications.
#[derive(Debug, Clone, Deserialize)]
pub struct SbnfConfig {
    pub compile: CompileConfig,
    pub diagnostics: DiagnosticsConfig,
    pub output: OutputConfig,
}

/// Knobs applied by the compiler itself.
#[derive(Debug, Clone, Deserialize)]
pub struct CompileConfig {
    /// Declare the baseline tokens (`EOF`, `WS`, `SPACES`, `NEWLINE`) after a
    /// successful compile.
    pub register_builtins: bool,
}

/// Controls how compile failures are rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct DiagnosticsConfig {
    pub context_lines: usize,
    /// 0 means no limit.
    pub max_reported: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Serialization used when printing a compiled specification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Json,
    Yaml,
    Sbnf,
    Debug,
}

impl OutputFormat {
    /// Parse the names accepted on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(OutputFormat::Json),
            "yaml" => Some(OutputFormat::Yaml),
            "sbnf" => Some(OutputFormat::Sbnf),
            "debug" => Some(OutputFormat::Debug),
            _ => None,
        }
    }
}

/// Layers configuration sources over the embedded defaults. Later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder()
                .add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Layer a TOML file. A missing file is an error at [build](Loader::build).
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml));
        self
    }

    /// Layer `SBNF_<SECTION>__<KEY>` environment variables, e.g.
    /// `SBNF_OUTPUT__FORMAT=json`.
    pub fn with_environment(mut self) -> Self {
        self.builder = self.builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );
        self
    }

    /// Apply a `section.key=value` setting as written on the command line.
    pub fn with_setting(self, setting: &str) -> Result<Self, ConfigError> {
        let (key, value) = setting
            .split_once('=')
            .ok_or_else(|| ConfigError::Message(format!("expected KEY=VALUE, got '{}'", setting)))?;
        self.set_override(key.trim(), value.trim().to_string())
    }

    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<SbnfConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<SbnfConfig, ConfigError> {
    Loader::new().build()
}
