use std::io::{IsTerminal, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use colored::Colorize;
use ldiff_core::{compare, Comparison};
use ldiff_render::{renderer_for, summary, OutputFormat, Renderer};
use tracing::debug;

use crate::cli::{Cli, STDIN};
use crate::config::{Config, Settings};
use crate::error::{CliError, CliResult};

/// Rendered output of one comparison.
pub struct Report {
    pub output: String,
    pub comparison: Comparison,
}

pub fn run_command(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::discover(cli.config.as_deref(), Path::new("."))?;
    let mut settings = Settings::resolve(&cli, &config);
    settings.color &= std::io::stdout().is_terminal();
    debug!(?settings, "resolved settings");

    check_inputs(&cli)?;
    let left = read_input(&cli.left)?;
    let right = read_input(&cli.right)?;

    let report = execute(&left, &right, &settings)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report.output.as_bytes())?;
    if settings.stats && settings.format != OutputFormat::Json {
        let line = summary(&report.comparison.stats);
        if settings.color {
            writeln!(stdout, "{}", line.bold())?;
        } else {
            writeln!(stdout, "{line}")?;
        }
    }
    stdout.flush()?;

    Ok(ExitCode::from(exit_status(&report, &settings)))
}

/// Stdin can feed at most one side.
pub fn check_inputs(cli: &Cli) -> CliResult<()> {
    if cli.left == STDIN && cli.right == STDIN {
        return Err(CliError::DoubleStdin);
    }
    Ok(())
}

/// Status 1 when `--exit-code` is set and the inputs differ, else success.
pub fn exit_status(report: &Report, settings: &Settings) -> u8 {
    if settings.exit_code && report.comparison.has_changes() {
        1
    } else {
        0
    }
}

/// Compare and render two already-loaded texts.
///
/// Refuses to run when both raw inputs are empty.
pub fn execute(left: &str, right: &str, settings: &Settings) -> CliResult<Report> {
    if left.is_empty() && right.is_empty() {
        return Err(CliError::EmptyInputs);
    }

    let comparison = compare(left, right, settings.options);
    let output = renderer_for(settings.format, settings.color).render(&comparison)?;
    Ok(Report { output, comparison })
}

/// Read an input file, or stdin for `-`.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn read_input(path: &str) -> CliResult<String> {
    let bytes = if path == STDIN {
        let mut buf = Vec::new();
        std::io::stdin().lock().read_to_end(&mut buf).map(|_| buf)
    } else {
        std::fs::read(path)
    }
    .map_err(|source| CliError::ReadInput {
        path: path.to_string(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
