//! Render pipeline: load the CSV, render the document, write it to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{error, info, info_span};

use tempgrid_core::load_chart_data;
use tempgrid_model::{AggregateMode, ChartData};
use tempgrid_render::{ChartOptions, render_error_page, render_page, render_svg};

use crate::types::{DocumentFormat, RenderOutcome};

/// Everything `render` needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: DocumentFormat,
    pub mode: AggregateMode,
    pub options: ChartOptions,
}

/// Output path used when none is given: the input with the format's extension.
pub fn default_output_path(input: &Path, format: DocumentFormat) -> PathBuf {
    input.with_extension(format.extension())
}

/// Render one document for already-loaded data.
pub fn render_document(
    data: &ChartData,
    format: DocumentFormat,
    mode: AggregateMode,
    options: &ChartOptions,
) -> Result<String> {
    match format {
        DocumentFormat::Html => render_page(data, mode, options),
        DocumentFormat::Svg => render_svg(data, mode, options),
    }
}

/// Run the full render and write the document.
///
/// When loading fails and HTML was requested, an error page is written to the
/// output path before the error is returned.
pub fn render_to_file(request: &RenderRequest) -> Result<RenderOutcome> {
    let span = info_span!("render", output = %request.output.display());
    let _guard = span.enter();

    let data = match load_chart_data(&request.input) {
        Ok(data) => data,
        Err(load_error) => {
            error!(error = %load_error, "failed to load temperature data");
            if request.format == DocumentFormat::Html {
                write_document(&request.output, &render_error_page(&load_error.to_string()))?;
            }
            return Err(load_error)
                .with_context(|| format!("load {}", request.input.display()));
        }
    };

    let document = render_document(&data, request.format, request.mode, &request.options)
        .context("render chart")?;
    write_document(&request.output, &document)?;
    info!(
        format = request.format.extension(),
        mode = %request.mode,
        bytes = document.len(),
        "wrote chart"
    );

    Ok(RenderOutcome {
        input: request.input.clone(),
        output: request.output.clone(),
        format: request.format,
        mode: request.mode,
        year_span: data.year_span(),
        cells: data.cells.len(),
        records: data.record_count,
        observations: data.observation_count,
    })
}

fn write_document(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}
