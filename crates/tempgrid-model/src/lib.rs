//! Shared data types for the temperature grid.

pub mod chart;
pub mod mapping;
pub mod mode;
pub mod observation;
pub mod record;

pub use chart::ChartData;
pub use mapping::ColumnMapping;
pub use mode::AggregateMode;
pub use observation::{DailyObservation, MonthCell, SeriesPoint, month_name};
pub use record::RawRecord;
