//! Derived chart state: year window, month cells, and the load entry point.

pub mod aggregate;
pub mod pipeline;
pub mod range;

pub use aggregate::aggregate_months;
pub use pipeline::{build_chart_data, load_chart_data};
pub use range::{YEAR_WINDOW, distinct_years, retain_recent_years};
