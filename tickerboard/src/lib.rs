//! tickerboard: a terminal stock dashboard.
//!
//! Given a ticker and a date range, a [`Dashboard`] fetches daily history
//! through a [`BoardConnector`], then derives:
//! - the latest close, one-day change and percent change;
//! - trailing returns over configurable lookback windows;
//! - the range's lowest low, highest high and average volume.
//!
//! The [`render`] module turns a [`DashboardReport`] into text with a
//! Unicode candlestick chart and tables.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tickerboard::{Dashboard, render};
//! use tickerboard_yfinance::YfConnector;
//!
//! let board = Dashboard::builder()
//!     .with_connector(Arc::new(YfConnector::new_default()?))
//!     .build()?;
//! let report = board.load("PETR4.SA", start, end).await?;
//! println!("{}", render::render_report(&report, &render::RenderOptions::default()));
//! ```
#![warn(missing_docs)]

/// Unicode candlestick chart.
pub mod chart;
mod config;
pub(crate) mod core;
/// Text rendering of reports and failures.
pub mod render;
mod report;

pub use config::{load_config, parse_config};
pub use crate::core::{Dashboard, DashboardBuilder};
pub use report::DashboardReport;

pub use tickerboard_core::{
    BoardConnector, BoardError, DashboardConfig, DayChange, LookbackWindow, PriceBar,
    PriceSeries, RangeStats, ReturnResult, TrailingReturns,
};
