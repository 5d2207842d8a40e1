use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use tickerboard_types::{LookbackWindow, ReturnResult, TrailingReturns};

use super::lookup::price_at_or_before;
use super::percent_change;
use crate::series::PriceSeries;

/// Trailing returns for each window, keyed by label in input order.
///
/// For every window the reference date is `as_of - offset_days`; its price is
/// resolved with [`price_at_or_before`]. A window with no price at or before its
/// reference date, or whose reference price is zero, is `ReturnResult::Unavailable`
/// while the other windows are still computed.
///
/// Labels are map keys: if two windows share a label the later result replaces the
/// earlier one in the earlier one's position.
#[must_use]
pub fn compute_trailing_returns(
    series: &PriceSeries,
    latest_close: Decimal,
    windows: &[LookbackWindow],
    as_of: NaiveDate,
) -> TrailingReturns {
    windows
        .iter()
        .map(|w| {
            (
                w.label.clone(),
                trailing_return(series, latest_close, w, as_of),
            )
        })
        .collect()
}

fn trailing_return(
    series: &PriceSeries,
    latest_close: Decimal,
    window: &LookbackWindow,
    as_of: NaiveDate,
) -> ReturnResult {
    as_of
        .checked_sub_days(Days::new(u64::from(window.offset_days)))
        .and_then(|target| price_at_or_before(series, target))
        .and_then(|old| percent_change(old, latest_close))
        .map_or(ReturnResult::Unavailable, ReturnResult::Percent)
}
