use chrono::NaiveDate;
use tickerboard_core::{Decimal, DayChange, PriceSeries, RangeStats, TrailingReturns};

/// Everything the dashboard shows for one ticker and date range.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReport {
    /// Ticker as requested, trimmed.
    pub ticker: String,
    /// Date of the most recent bar; trailing returns are measured from here.
    pub as_of: NaiveDate,
    /// Close of the most recent bar.
    pub latest_close: Decimal,
    /// Change between the last two closes.
    pub day_change: DayChange,
    /// Trailing returns keyed by window label, in configured order.
    pub returns: TrailingReturns,
    /// Min low, max high and mean volume over the whole range.
    pub stats: RangeStats,
    /// The underlying daily series, oldest first.
    pub series: PriceSeries,
}
