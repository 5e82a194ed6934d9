//! CSV loading into [`RawRecord`]s.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use tempgrid_model::RawRecord;

use crate::error::{IngestError, Result};

// Invalid UTF-8 bytes become U+FFFD instead of failing the read.
fn normalize_header(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .trim()
        .trim_matches('\u{feff}')
        .trim()
        .to_string()
}

fn normalize_cell(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).trim().to_string()
}

/// Read every data row of the CSV at `path`.
///
/// Blank lines are skipped. A file without a header or without any data row
/// is reported as [`IngestError::EmptyCsv`].
pub fn read_csv_records(path: &Path) -> Result<Vec<RawRecord>> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => IngestError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let records = read_records(file).map_err(|error| into_ingest_error(path, error))?;
    if records.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), records = records.len(), "read csv");
    Ok(records)
}

/// Read records from any reader. Returns an empty vector for header-only input.
pub fn read_records<R: Read>(reader: R) -> std::result::Result<Vec<RawRecord>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = reader.byte_headers()?.iter().map(normalize_header).collect();
    if headers.iter().all(String::is_empty) {
        return Ok(Vec::new());
    }
    let mut records = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        let values: Vec<String> = record.iter().map(normalize_cell).collect();
        if values.iter().all(String::is_empty) {
            continue;
        }
        records.push(RawRecord::from_row(&headers, &values));
    }
    Ok(records)
}

fn into_ingest_error(path: &Path, error: csv::Error) -> IngestError {
    let message = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(source) => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message,
        },
    }
}
