//! Tickerboard error, configuration, and report primitives built on top of `paft`.
#![warn(missing_docs)]

mod config;
mod error;
mod reports;

pub use config::{DashboardConfig, LookbackWindow};
pub use error::BoardError;
pub use reports::{DayChange, RangeStats, ReturnResult, TrailingReturns};
