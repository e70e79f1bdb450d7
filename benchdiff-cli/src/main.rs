// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! benchdiff CLI
//!
//! Compares a baseline benchmark result file with a current one and exits
//! non-zero when any benchmark regressed beyond the threshold.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use benchdiff_core::{BenchDiffError, ColorChoice, Palette, Role, Threshold};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use crossterm::style::Colored;

mod run;

const BIN_NAME: &str = "benchdiff";

/// benchdiff - Detect performance regressions between two benchmark runs
#[derive(Parser, Debug)]
#[command(name = "benchdiff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Baseline and current benchmark result files
    #[arg(value_name = "FILE", num_args = 0..)]
    pub files: Vec<PathBuf>,

    /// Regression threshold as a fraction (0.05 = 5%)
    #[arg(short, long, value_name = "FRACTION", default_value = "0.05")]
    pub threshold: Threshold,

    /// When to colour the report
    #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
    pub color: ColorArg,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

/// Usage text printed for any argument error.
fn usage_text() -> String {
    format!(
        "Usage: {bin} [OPTIONS] <baseline.json> <current.json>\n\
         \n\
         Compare two benchmark JSON files and detect performance regressions.\n\
         \n\
         Example:\n  {bin} baseline.json current.json\n",
        bin = BIN_NAME
    )
}

fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", usage_text())?;
    out.flush()
}

fn main() -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                return ExitCode::SUCCESS;
            }
            _ => {
                let first = e.to_string().lines().next().unwrap_or_default().to_string();
                let _ = writeln!(out, "{}", first).and_then(|_| write_usage(&mut out));
                return ExitCode::from(1);
            }
        },
    };

    let color = ColorChoice::from(cli.color);
    if color == ColorChoice::Always {
        // An explicit request beats crossterm's NO_COLOR check
        Colored::set_ansi_color_disabled(false);
    }

    // Initialize logging; stdout is reserved for the report
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .with_ansi(color.enabled_for(&io::stderr()))
        .init();

    let palette = color.palette();

    let written = match run::execute(&cli.files, cli.threshold, palette.as_ref(), &mut out) {
        Ok(verdict) => return ExitCode::from(verdict.exit_code() as u8),
        Err(BenchDiffError::Usage { message }) => {
            tracing::debug!(%message, "Invalid invocation");
            write_usage(&mut out)
        }
        // stdout itself failed, so say so on stderr
        Err(e @ BenchDiffError::Report { .. }) => {
            eprintln!("Error: {}", e);
            Ok(())
        }
        Err(e) => report_error(&mut out, palette.as_ref(), &e),
    };
    if let Err(e) = written {
        tracing::debug!(error = %e, "Failed to write to stdout");
    }
    ExitCode::from(1)
}

fn report_error<W: Write>(
    out: &mut W,
    palette: &dyn Palette,
    err: &BenchDiffError,
) -> io::Result<()> {
    writeln!(out, "{}", palette.colorize(&format!("Error: {}", err), Role::Error))?;
    out.flush()
}
