//! Configuration loading for the scenario toolchain.
//!
//! The defaults live in `defaults/scenario.default.toml` and are compiled into the crate; a
//! user file and the command-line flags are layered over them.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/scenario.default.toml");

/// Top-level configuration consumed by scenario applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Decoder name, see [`decoder_for`](crate::scenario::source::decoder_for)
    pub encoding: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of a registered token format
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
}

/// Builds a [`ScenarioConfig`] from the embedded defaults, an optional user file and the
/// command-line flags, in increasing priority.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// `user_file`, when given, must exist and parse as TOML.
    pub fn new(user_file: Option<&Path>) -> Self {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        if let Some(path) = user_file {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        Self { builder }
    }

    /// `--format`: the token rendering to print.
    pub fn output_format(self, name: &str) -> Result<Self, ConfigError> {
        self.set("output.format", name)
    }

    /// `--encoding`: the decoder applied to the script bytes.
    pub fn input_encoding(self, name: &str) -> Result<Self, ConfigError> {
        self.set("input.encoding", name)
    }

    fn set(mut self, key: &str, value: &str) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<ScenarioConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}
