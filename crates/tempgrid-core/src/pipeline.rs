//! Load pipeline: file → records → observations → month cells.

use std::path::Path;

use tracing::{debug, info, info_span, warn};

use tempgrid_ingest::{Result, detect_columns, parse_observations, read_csv_records};
use tempgrid_model::{ChartData, RawRecord};

use crate::aggregate::aggregate_months;
use crate::range::{distinct_years, retain_recent_years};

/// Read the CSV at `path` and compute the full chart state.
///
/// Fails only when the file is missing, unreadable, or has no data rows.
pub fn load_chart_data(path: &Path) -> Result<ChartData> {
    let span = info_span!("load", path = %path.display());
    let _guard = span.enter();
    let records = read_csv_records(path)?;
    let data = build_chart_data(&records);
    info!(
        records = data.record_count,
        observations = data.observation_count,
        years = data.years.len(),
        cells = data.cells.len(),
        "chart data ready"
    );
    Ok(data)
}

/// Compute chart state from already-read records.
///
/// Column roles are detected from the first record only.
pub fn build_chart_data(records: &[RawRecord]) -> ChartData {
    let Some(sample) = records.first() else {
        return ChartData::default();
    };
    let mapping = detect_columns(sample);
    debug!(
        date = ?mapping.date_key,
        max = ?mapping.max_key,
        min = ?mapping.min_key,
        single = ?mapping.single_temp_key,
        "detected columns"
    );
    if mapping.has_no_temperature() {
        warn!("no temperature column detected; all values will be missing");
    }
    let observations = retain_recent_years(parse_observations(records, &mapping));
    let years = distinct_years(&observations);
    let cells = aggregate_months(&observations);
    ChartData {
        mapping,
        years,
        cells,
        record_count: records.len(),
        observation_count: observations.len(),
    }
}
