use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::series::PriceSeries;

/// Closing price on `target`, or on the most recent trading day before it.
///
/// Returns `None` when `target` precedes the first bar (or the series is empty).
/// Out-of-range dates are a normal outcome, not an error.
#[must_use]
pub fn price_at_or_before(series: &PriceSeries, target: NaiveDate) -> Option<Decimal> {
    let bars = series.bars();
    let after = bars.partition_point(|b| b.date <= target);
    after.checked_sub(1).map(|i| bars[i].close)
}
