//! Temperature grid CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tempgrid_cli::logging::{LogConfig, init_logging};
use tempgrid_cli::summary::print_render_summary;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command};
use crate::commands::{run_cells, run_inspect, run_render};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Render(args) => match run_render(&args) {
            Ok(outcome) => {
                print_render_summary(&outcome);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Inspect(args) => report(run_inspect(&args)),
        Command::Cells(args) => report(run_cells(&args)),
    };
    std::process::exit(exit_code);
}

fn report(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}

/// Explicit `--log-level` beats `-v`/`-q`; either one disables `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let explicit = cli.log_level.map(LevelFilter::from);
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        use_env_filter: explicit.is_none() && !cli.verbosity.is_present(),
        ..LogConfig::default()
    }
    .with_level(explicit.unwrap_or_else(|| cli.verbosity.tracing_level_filter()))
    .with_format(cli.log_format.into())
    .with_log_file(cli.log_file.clone())
    .with_ansi(with_ansi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempgrid_cli::logging::LogFormat;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("valid arguments")
    }

    #[test]
    fn default_flags_defer_to_rust_log() {
        let config = log_config_from_cli(&parse(&["tempgrid", "inspect", "data.csv"]));
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn explicit_level_beats_verbosity() {
        let config = log_config_from_cli(&parse(&[
            "tempgrid",
            "-v",
            "--log-level",
            "trace",
            "--log-format",
            "json",
            "--color",
            "never",
            "cells",
            "data.csv",
        ]));
        assert_eq!(config.level_filter, LevelFilter::TRACE);
        assert!(!config.use_env_filter);
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.with_ansi);
    }

    #[test]
    fn verbosity_flag_raises_level() {
        let config = log_config_from_cli(&parse(&["tempgrid", "-v", "render", "data.csv"]));
        assert_eq!(config.level_filter, LevelFilter::INFO);
        assert!(!config.use_env_filter);
    }
}
