//! CLI argument definitions for the temperature grid renderer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tempgrid_cli::logging::LogFormat;
use tempgrid_cli::types::DocumentFormat;
use tracing::level_filters::LevelFilter;
use tempgrid_model::AggregateMode;

#[derive(Parser)]
#[command(
    name = "tempgrid",
    version,
    about = "Render daily temperature CSV files as a year-by-month heatmap",
    long_about = "Render daily temperature CSV files as a year-by-month heatmap.\n\n\
                  Each cell summarizes one month of the most recent ten years and\n\
                  carries a sparkline of daily highs and lows. Output is either a\n\
                  standalone SVG or an HTML page with click-to-toggle and tooltips."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the chart to an HTML page or a standalone SVG.
    Render(RenderArgs),

    /// Print the detected columns and a per-month summary.
    Inspect(InputArgs),

    /// Dump the computed month cells as JSON.
    Cells(CellsArgs),
}

#[derive(Parser)]
pub struct InputArgs {
    /// Path to the daily temperature CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Path to the daily temperature CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Output file (default: <CSV> with an .html or .svg extension).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "html")]
    pub format: OutputFormatArg,

    /// Aggregate shown first (the only one for SVG output).
    #[arg(long = "mode", value_enum, default_value = "max")]
    pub mode: ModeArg,

    /// Suffix appended to temperatures in labels and tooltips.
    #[arg(long = "unit", value_name = "SUFFIX")]
    pub unit: Option<String>,

    /// Cell width in pixels.
    #[arg(long = "cell-width", value_name = "PX")]
    pub cell_width: Option<f64>,

    /// Cell height in pixels.
    #[arg(long = "cell-height", value_name = "PX")]
    pub cell_height: Option<f64>,
}

#[derive(Parser)]
pub struct CellsArgs {
    /// Path to the daily temperature CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Pretty-print the JSON output.
    #[arg(long = "pretty")]
    pub pretty: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Html,
    Svg,
}

impl From<OutputFormatArg> for DocumentFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Html => DocumentFormat::Html,
            OutputFormatArg::Svg => DocumentFormat::Svg,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Max,
    Min,
}

impl From<ModeArg> for AggregateMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Max => AggregateMode::Max,
            ModeArg::Min => AggregateMode::Min,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
