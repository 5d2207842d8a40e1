//! The trailing-return calculator and its companion summaries.
//!
//! All functions are pure and operate on an already validated [`PriceSeries`](crate::PriceSeries):
//! - `lookup`: nearest-prior-date price resolution
//! - `returns`: labelled trailing returns over lookback windows
//! - `summary`: day-over-day change and min/max/mean-volume statistics

/// Nearest-available-prior-date price lookup.
pub mod lookup;
/// Trailing returns over named lookback windows.
pub mod returns;
/// Day change and range statistics.
pub mod summary;

pub use lookup::price_at_or_before;
pub use returns::compute_trailing_returns;
pub use summary::{compute_day_change, compute_range_stats};

use rust_decimal::Decimal;

/// Percentage change from `from` to `to`, or `None` when `from` is zero or the
/// arithmetic overflows.
pub(crate) fn percent_change(from: Decimal, to: Decimal) -> Option<Decimal> {
    if from.is_zero() {
        return None;
    }
    to.checked_sub(from)?
        .checked_div(from)?
        .checked_mul(Decimal::ONE_HUNDRED)
}
