use chrono::{DateTime, NaiveDate, Utc};
use paft::domain::{AssetKind, Instrument};
use paft::market::requests::history::{HistoryRequest, Interval};

use crate::BoardError;
use crate::connector::BoardConnector;
use crate::series::PriceSeries;

/// Build a daily history request covering `start..=end`.
///
/// Providers treat the period end as exclusive, so the request ends at the
/// midnight following `end`.
///
/// # Errors
/// Returns `BoardError::InvalidArg` if `start` is after `end` or the dates fall
/// outside the representable range.
pub fn daily_request(start: NaiveDate, end: NaiveDate) -> Result<HistoryRequest, BoardError> {
    if start > end {
        return Err(BoardError::InvalidArg(format!(
            "start date {start} is after end date {end}"
        )));
    }
    let start_dt = midnight_utc(start)?;
    let end_dt = end
        .succ_opt()
        .ok_or_else(|| BoardError::InvalidArg(format!("end date {end} is out of range")))
        .and_then(midnight_utc)?;
    Ok(HistoryRequest::try_from_period(
        start_dt,
        end_dt,
        Interval::D1,
    )?)
}

fn midnight_utc(date: NaiveDate) -> Result<DateTime<Utc>, BoardError> {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .ok_or_else(|| BoardError::InvalidArg(format!("invalid date: {date}")))
}

/// Fetch the daily series for `ticker` over the inclusive `start..=end` range.
///
/// Behavior:
/// - The ticker is trimmed; a blank ticker is `InvalidArg`.
/// - Connectors without a history capability, or without native daily bars, are `Unsupported`.
/// - An empty provider response is `NotFound` naming the ticker, so callers can tell
///   "no such symbol" apart from provider failures.
///
/// # Errors
/// Propagates provider errors unchanged and the validation errors listed above.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "tickerboard::fetch",
        skip(connector),
        fields(connector = connector.name()),
        err
    )
)]
pub async fn fetch_series(
    connector: &dyn BoardConnector,
    ticker: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<PriceSeries, BoardError> {
    let ticker = ticker.trim();
    if ticker.is_empty() {
        return Err(BoardError::InvalidArg("ticker must not be empty".into()));
    }
    let req = daily_request(start, end)?;

    if !connector.supports_kind(AssetKind::Equity) {
        return Err(BoardError::unsupported("history/equity"));
    }
    let provider = connector
        .as_history_provider()
        .ok_or_else(|| BoardError::unsupported("history"))?;
    if !provider
        .supported_history_intervals(AssetKind::Equity)
        .contains(&Interval::D1)
    {
        return Err(BoardError::unsupported("history interval 1d"));
    }

    let instrument = Instrument::from_symbol(ticker, AssetKind::Equity)
        .map_err(|e| BoardError::InvalidArg(format!("invalid ticker '{ticker}': {e}")))?;
    let resp = provider.history(&instrument, req).await?;
    if resp.candles.is_empty() {
        return Err(BoardError::not_found(format!("history for {ticker}")));
    }

    let series = PriceSeries::from_history(ticker, &resp)?;
    #[cfg(feature = "tracing")]
    tracing::debug!(bars = series.len(), "fetched price series");
    Ok(series)
}
