//! tickerboard-core
//!
//! Core types, traits, and calculations shared across the tickerboard crates.
//!
//! - `types`: re-exported `paft` market types and the shared error/config types.
//! - `connector`: the `BoardConnector` trait and the `HistoryProvider` capability.
//! - `series`: `PriceSeries`, a validated daily OHLCV series keyed by calendar date.
//! - `analytics`: the trailing-return calculator, day change, and range statistics.
//! - `fetch`: the fetch boundary turning a ticker and a date range into a `PriceSeries`.
#![warn(missing_docs)]

/// Trailing returns, day-over-day change, and range statistics.
pub mod analytics;
/// Connector capability traits and the primary `BoardConnector` interface.
pub mod connector;
/// Fetch boundary from connector to validated series.
pub mod fetch;
/// Daily price series built from provider candles.
pub mod series;
pub mod types;

pub use analytics::{
    compute_day_change, compute_range_stats, compute_trailing_returns, price_at_or_before,
};
pub use connector::{BoardConnector, HistoryProvider};
pub use fetch::{daily_request, fetch_series};
pub use series::{PriceBar, PriceSeries};
pub use types::*;
