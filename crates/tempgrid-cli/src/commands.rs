use anyhow::{Context, Result};

use tempgrid_cli::output::{RenderRequest, default_output_path, render_to_file};
use tempgrid_cli::summary::print_inspect;
use tempgrid_cli::types::{DocumentFormat, RenderOutcome};
use tempgrid_core::load_chart_data;
use tempgrid_render::ChartOptions;

use crate::cli::{CellsArgs, InputArgs, RenderArgs};

pub fn run_render(args: &RenderArgs) -> Result<RenderOutcome> {
    let format = DocumentFormat::from(args.format);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input, format));
    let request = RenderRequest {
        input: args.input.clone(),
        output,
        format,
        mode: args.mode.into(),
        options: chart_options(args),
    };
    render_to_file(&request)
}

pub fn run_inspect(args: &InputArgs) -> Result<()> {
    let data = load_chart_data(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    print_inspect(&data, &ChartOptions::default().unit);
    Ok(())
}

pub fn run_cells(args: &CellsArgs) -> Result<()> {
    let data = load_chart_data(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&data)
    } else {
        serde_json::to_string(&data)
    }
    .context("serialize month cells")?;
    println!("{json}");
    Ok(())
}

fn chart_options(args: &RenderArgs) -> ChartOptions {
    let defaults = ChartOptions::default();
    let width = args.cell_width.unwrap_or(defaults.cell_width);
    let height = args.cell_height.unwrap_or(defaults.cell_height);
    let mut options = defaults.with_cell_size(width, height);
    if let Some(unit) = &args.unit {
        options = options.with_unit(unit.clone());
    }
    options
}
