//! Re-export of foundational types from `paft` and `tickerboard-types`.
// Consolidated re-exports so downstream crates can depend on `tickerboard-core` only

pub use tickerboard_types::{
    BoardError, DashboardConfig, DayChange, LookbackWindow, RangeStats, ReturnResult,
    TrailingReturns,
};

pub use paft::domain::{AssetKind, Instrument, Symbol};

pub use paft::money::{Currency, IsoCurrency, Money};

pub use paft::Decimal;

pub use paft::market::requests::history::{HistoryRequest, Interval, Range};
pub use paft::market::responses::history::{Candle, HistoryMeta, HistoryResponse};
