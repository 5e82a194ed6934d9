//! Reading raw temperature files into typed daily observations.

pub mod detection;
pub mod error;
pub mod parse;
pub mod reader;

pub use detection::detect_columns;
pub use error::{IngestError, Result};
pub use parse::{parse_date, parse_observation, parse_observations, parse_temperature};
pub use reader::{read_csv_records, read_records};
