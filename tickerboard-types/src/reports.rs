//! Result types produced by the return calculator and summary statistics.

use indexmap::IndexMap;
use paft::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of a single trailing-return window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnResult {
    /// Percentage return, e.g. `21.00` for +21%.
    Percent(Decimal),
    /// No usable reference price at or before the window's target date.
    Unavailable,
}

impl ReturnResult {
    /// The percentage, if one was computed.
    #[must_use]
    pub const fn percent(&self) -> Option<Decimal> {
        match self {
            Self::Percent(p) => Some(*p),
            Self::Unavailable => None,
        }
    }

    /// True when the window could not be resolved.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

/// Window label to result, in the order the windows were given.
pub type TrailingReturns = IndexMap<String, ReturnResult>;

/// Change between the last two closes of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayChange {
    /// Latest close minus previous close.
    pub absolute: Decimal,
    /// Absolute change relative to the previous close, in percent.
    pub percent: Decimal,
}

/// Summary statistics over a full series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeStats {
    /// Lowest low.
    pub min_low: Decimal,
    /// Highest high.
    pub max_high: Decimal,
    /// Mean volume over the bars that report one; `None` when none do.
    pub mean_volume: Option<Decimal>,
}
