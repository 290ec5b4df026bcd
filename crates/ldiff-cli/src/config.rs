use std::path::{Path, PathBuf};

use ldiff_core::ComparisonOptions;
use ldiff_render::OutputFormat;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::{CliError, CliResult};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "ldiff.toml";

/// Contents of an `ldiff.toml` file.
///
/// ```toml
/// [compare]
/// ignore_case = true
/// ignore_whitespace = false
///
/// [output]
/// format = "html"
/// color = false
/// stats = true
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub compare: ComparisonOptions,
    pub output: OutputConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
    pub stats: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            stats: false,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> CliResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw, path)
    }

    fn parse(raw: &str, path: &Path) -> CliResult<Self> {
        toml::from_str(raw).map_err(|source| CliError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the explicit config file, else `ldiff.toml` in `dir` if it
    /// exists, else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> CliResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!("using config {}", candidate.display());
            return Self::load(&candidate);
        }
        Ok(Self::default())
    }
}

/// Effective settings for one run: config values overridden by flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub options: ComparisonOptions,
    pub format: OutputFormat,
    pub color: bool,
    pub stats: bool,
    pub exit_code: bool,
}

impl Settings {
    /// Flags can only switch options on; a flag that is absent leaves the
    /// config value in place.
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        let options = ComparisonOptions::new(
            cli.ignore_case || config.compare.ignore_case,
            cli.ignore_whitespace || config.compare.ignore_whitespace,
        );
        Self {
            options,
            format: cli.format.unwrap_or(config.output.format),
            color: config.output.color && !cli.no_color,
            stats: cli.stats || config.output.stats,
            exit_code: cli.exit_code,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            options: ComparisonOptions::default(),
            format: OutputFormat::Text,
            color: false,
            stats: false,
            exit_code: false,
        }
    }
}
