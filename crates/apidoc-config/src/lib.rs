//! Configuration management for apidoc.
//!
//! Parses optional `apidoc.toml` files with serde. Without an explicit path,
//! the file is searched for in the input document's directory and its parents.
//! When none is found, defaults are used.
//!
//! ```toml
//! strict = false
//!
//! [output]
//! markdown = true
//! html = true
//! dir = "docs/api"
//!
//! [macros]
//! org = "Acme"
//! version = "${API_VERSION:-v1}"
//! ```
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `output.dir` and every `[macros]` value support `${VAR}` and
//! `${VAR:-default}`. Environment expansion happens once, at load time;
//! macro references inside API descriptions are expanded later by the renderer.

mod expand;

use std::path::{Path, PathBuf};

use apidoc_renderer::{MacroTable, OutputFormat};
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "apidoc.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
    /// Override Markdown output flag.
    pub markdown: Option<bool>,
    /// Override HTML output flag.
    pub html: Option<bool>,
    /// Override strict mode.
    pub strict: Option<bool>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fail the run when a document references an undefined macro.
    pub strict: bool,
    /// Output configuration.
    pub output: OutputConfig,
    /// Default macros, overridden by macros defined in the document.
    pub macros: MacroTable,

    /// Resolved output directory (set after loading).
    #[serde(skip)]
    pub output_dir: Option<PathBuf>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Output configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Write `<base>.md`.
    pub markdown: bool,
    /// Write `<base>.html`.
    pub html: bool,
    /// Output directory relative to the config file.
    dir: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            markdown: true,
            html: true,
            dir: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`macros.version`").
        field: String,
        /// Error message (e.g., "${`API_VERSION`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `apidoc.toml` in `search_from` and its parents.
    ///
    /// CLI settings are applied after loading, so they take precedence over
    /// config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing or
    /// environment expansion fails, or no output format is left enabled.
    pub fn load(
        config_path: Option<&Path>,
        search_from: &Path,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config(search_from) {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;

        Ok(config)
    }

    /// Output formats to produce, Markdown first.
    #[must_use]
    pub fn formats(&self) -> Vec<OutputFormat> {
        let mut formats = Vec::with_capacity(2);
        if self.output.markdown {
            formats.push(OutputFormat::Markdown);
        }
        if self.output.html {
            formats.push(OutputFormat::Html);
        }
        formats
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if both output formats are disabled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.output.markdown && !self.output.html {
            return Err(ConfigError::Validation(
                "at least one of output.markdown and output.html must be enabled".to_owned(),
            ));
        }
        Ok(())
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(output_dir) = &settings.output_dir {
            self.output_dir = Some(output_dir.clone());
        }
        if let Some(markdown) = settings.markdown {
            self.output.markdown = markdown;
        }
        if let Some(html) = settings.html {
            self.output.html = html;
        }
        if let Some(strict) = settings.strict {
            self.strict = strict;
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = if start.as_os_str().is_empty() {
            std::env::current_dir().ok()?
        } else {
            start.to_path_buf()
        };
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.output_dir = config.output.dir.as_deref().map(|dir| config_dir.join(dir));
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref dir) = self.output.dir {
            self.output.dir = Some(expand::expand_env(dir, "output.dir")?);
        }

        self.macros = self
            .macros
            .iter()
            .map(|(name, value)| -> Result<(String, String), ConfigError> {
                let field = format!("macros.{name}");
                Ok((name.to_owned(), expand::expand_env(value, &field)?))
            })
            .collect::<Result<MacroTable, _>>()?;

        Ok(())
    }
}
