//! pngtocss
//!
//! Reads PNG files that contain a linear gradient and prints the CSS (and
//! YUI3 graphics code) that draws the same gradient.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use pngtocss_core::ExtractOptions;

mod decode;
mod error;
mod logging;
mod process;
mod render;

use logging::{LoggingConfig, init_logging};
use render::OutputFormat;

#[derive(Parser)]
#[command(name = "pngtocss")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the CSS gradient that reproduces a PNG", long_about = None)]
struct Cli {
    /// PNG files to convert; each is processed independently
    files: Vec<PathBuf>,

    /// Maximum per-channel difference (0-255) for two colors to match
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(0..=255))]
    tolerance: u16,

    /// Snippets to print for each file
    #[arg(short, long, value_enum, default_value_t = Format::All)]
    format: Format,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Colorize log output
    #[arg(long, value_enum, default_value_t = LogColor::Auto)]
    color: LogColor,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Format {
    Css,
    Yui,
    All,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Css => OutputFormat::Css,
            Format::Yui => OutputFormat::Yui,
            Format::All => OutputFormat::All,
        }
    }
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum LogColor {
    Auto,
    Always,
    Never,
}

impl From<LogColor> for env_logger::WriteStyle {
    fn from(color: LogColor) -> Self {
        match color {
            LogColor::Auto => env_logger::WriteStyle::Auto,
            LogColor::Always => env_logger::WriteStyle::Always,
            LogColor::Never => env_logger::WriteStyle::Never,
        }
    }
}

/// Version line, a short description and the usage line.
fn write_banner(w: &mut impl Write) -> io::Result<()> {
    writeln!(w, "pngtocss v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(w, "   Converts PNG gradient images to CSS linear-gradient rules.")?;
    writeln!(w)?;
    writeln!(w, "{}", Cli::command().render_usage())
}

fn exit_status(failures: usize) -> ExitCode {
    if failures > 0 { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(
        LoggingConfig { write_style: cli.color.into(), ..LoggingConfig::default() }.verbose(cli.verbose),
    );

    if cli.files.is_empty() {
        write_banner(&mut io::stderr().lock()).context("writing usage")?;
        return Ok(ExitCode::SUCCESS);
    }

    let options = ExtractOptions::default().with_tolerance(cli.tolerance);
    let mut out = io::stdout().lock();
    let failures = process::process_all(&cli.files, &options, cli.format.into(), &mut out, &mut io::stderr().lock())
        .context("writing to stdout")?;
    out.flush().context("flushing stdout")?;

    Ok(exit_status(failures))
}
