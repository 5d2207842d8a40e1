use rust_decimal::Decimal;
use tickerboard_types::{BoardError, DayChange, RangeStats};

use super::percent_change;
use crate::series::PriceSeries;

/// Absolute and percent change between the last two closes.
///
/// # Errors
/// - `BoardError::InsufficientData` when the series has fewer than two bars.
/// - `BoardError::Data` when the previous close is zero.
pub fn compute_day_change(series: &PriceSeries) -> Result<DayChange, BoardError> {
    let [.., prev, last] = series.bars() else {
        return Err(BoardError::insufficient_data("day change", 2, series.len()));
    };
    let percent = percent_change(prev.close, last.close).ok_or_else(|| {
        BoardError::Data(format!(
            "cannot compute day change from a close of {} on {}",
            prev.close, prev.date
        ))
    })?;
    Ok(DayChange {
        absolute: last.close - prev.close,
        percent,
    })
}

/// Lowest low, highest high, and mean volume across the whole series.
///
/// Bars without a reported volume are left out of the mean.
///
/// # Errors
/// Returns `BoardError::InsufficientData` on an empty series.
pub fn compute_range_stats(series: &PriceSeries) -> Result<RangeStats, BoardError> {
    let Some(first) = series.first() else {
        return Err(BoardError::insufficient_data("range statistics", 1, 0));
    };

    let mut min_low = first.low;
    let mut max_high = first.high;
    let mut vol_total = Decimal::ZERO;
    let mut vol_count: u64 = 0;
    for bar in series.bars() {
        min_low = min_low.min(bar.low);
        max_high = max_high.max(bar.high);
        if let Some(v) = bar.volume {
            vol_total += Decimal::from(v);
            vol_count += 1;
        }
    }

    let mean_volume = (vol_count > 0).then(|| vol_total / Decimal::from(vol_count));
    Ok(RangeStats {
        min_low,
        max_high,
        mean_volume,
    })
}
