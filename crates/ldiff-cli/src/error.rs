use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read input {path}: {source}")]
    ReadInput {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to read config {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("enter text in both inputs")]
    EmptyInputs,

    #[error("stdin can only be used for one input")]
    DoubleStdin,

    #[error("render error: {0}")]
    Render(#[from] ldiff_render::RenderError),
}

pub type CliResult<T> = Result<T, CliError>;
