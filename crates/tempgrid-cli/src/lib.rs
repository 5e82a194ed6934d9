//! CLI library components for the temperature grid.

pub mod logging;
pub mod output;
pub mod summary;
pub mod types;
