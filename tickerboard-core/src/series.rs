use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use paft::market::responses::history::{Candle, HistoryMeta, HistoryResponse};
use paft::money::Currency;
use rust_decimal::Decimal;

use crate::BoardError;

/// One trading day of OHLCV data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBar {
    /// Exchange-local calendar date of the session.
    pub date: NaiveDate,
    /// Opening price.
    pub open: Decimal,
    /// Session high.
    pub high: Decimal,
    /// Session low.
    pub low: Decimal,
    /// Closing price.
    pub close: Decimal,
    /// Traded volume, when the provider reports it.
    pub volume: Option<u64>,
}

impl PriceBar {
    /// Build a bar from its date and OHLC prices, without volume.
    #[must_use]
    pub const fn new(
        date: NaiveDate,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume: None,
        }
    }

    /// Attach a volume to the bar.
    #[must_use]
    pub const fn with_volume(mut self, volume: u64) -> Self {
        self.volume = Some(volume);
        self
    }

    /// True when the session closed at or above its open.
    #[must_use]
    pub fn is_rising(&self) -> bool {
        self.close >= self.open
    }
}

/// Daily price series for a single ticker.
///
/// Bars are strictly increasing by date with no duplicates; the constructors
/// enforce this, so lookups may binary search on the date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceSeries {
    ticker: String,
    currency: Option<Currency>,
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Build a series from bars that are already in date order.
    ///
    /// # Errors
    /// Returns `BoardError::Data` if any bar's date is not strictly after the previous one.
    pub fn new(ticker: impl Into<String>, bars: Vec<PriceBar>) -> Result<Self, BoardError> {
        if let Some(pair) = bars.windows(2).find(|w| w[0].date >= w[1].date) {
            return Err(BoardError::Data(format!(
                "series dates must be strictly increasing: {} then {}",
                pair[0].date, pair[1].date
            )));
        }
        Ok(Self {
            ticker: ticker.into(),
            currency: None,
            bars,
        })
    }

    /// Convert a provider history response into a daily series.
    ///
    /// Candle timestamps are mapped to exchange-local dates using the response
    /// metadata (timezone first, then fixed offset, else UTC). Candles are sorted
    /// by time and, when two land on the same date, the later one is kept.
    ///
    /// # Errors
    /// Returns `BoardError::Data` if a candle mixes currencies across its OHLC
    /// fields or the series mixes currencies across candles.
    pub fn from_history(ticker: impl Into<String>, resp: &HistoryResponse) -> Result<Self, BoardError> {
        let currency = ensure_series_currency_uniform(&resp.candles)?;

        let mut candles: Vec<&Candle> = resp.candles.iter().collect();
        candles.sort_by_key(|c| c.ts);

        let mut bars: Vec<PriceBar> = Vec::with_capacity(candles.len());
        for c in candles {
            let bar = PriceBar {
                date: trading_date(c.ts, resp.meta.as_ref()),
                open: c.open.amount(),
                high: c.high.amount(),
                low: c.low.amount(),
                close: c.close.amount(),
                volume: c.volume,
            };
            match bars.last_mut() {
                Some(prev) if prev.date == bar.date => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(date = %bar.date, "replacing same-day candle with later one");
                    *prev = bar;
                }
                _ => bars.push(bar),
            }
        }

        Ok(Self {
            ticker: ticker.into(),
            currency,
            bars,
        })
    }

    /// Ticker symbol the series belongs to.
    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Quote currency, when known.
    #[must_use]
    pub const fn currency(&self) -> Option<&Currency> {
        self.currency.as_ref()
    }

    /// All bars, oldest first.
    #[must_use]
    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// True when the series holds no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Oldest bar.
    #[must_use]
    pub fn first(&self) -> Option<&PriceBar> {
        self.bars.first()
    }

    /// Most recent bar.
    #[must_use]
    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }
}

fn trading_date(ts: DateTime<Utc>, meta: Option<&HistoryMeta>) -> NaiveDate {
    if let Some(m) = meta {
        if let Some(tz) = m.timezone {
            return ts.with_timezone(&tz).date_naive();
        }
        if let Some(shifted) = m
            .utc_offset_seconds
            .and_then(TimeDelta::try_seconds)
            .and_then(|off| ts.checked_add_signed(off))
        {
            return shifted.date_naive();
        }
    }
    ts.date_naive()
}

/// Ensure all candles share one currency (and each candle is internally uniform).
///
/// Returns `None` for an empty slice.
fn ensure_series_currency_uniform(candles: &[Candle]) -> Result<Option<Currency>, BoardError> {
    let mut series_cur: Option<Currency> = None;
    for c in candles {
        let cur = c.open.currency();
        if cur != c.high.currency() || cur != c.low.currency() || cur != c.close.currency() {
            return Err(BoardError::Data(format!(
                "currency mismatch within candle at {}",
                c.ts
            )));
        }
        match &series_cur {
            Some(seen) if seen != cur => {
                return Err(BoardError::Data("currency mismatch across series".into()));
            }
            Some(_) => {}
            None => series_cur = Some(cur.clone()),
        }
    }
    Ok(series_cur)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use paft::money::{IsoCurrency, Money};

    fn usd(v: i64) -> Money {
        Money::new(Decimal::from(v), Currency::Iso(IsoCurrency::USD)).unwrap()
    }

    fn candle(ts: DateTime<Utc>, close: i64) -> Candle {
        Candle {
            ts,
            open: usd(close),
            high: usd(close),
            low: usd(close),
            close: usd(close),
            close_unadj: None,
            volume: Some(10),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_rejects_duplicate_dates() {
        let d = date(2024, 1, 2);
        let one = Decimal::ONE;
        let bars = vec![
            PriceBar::new(d, one, one, one, one),
            PriceBar::new(d, one, one, one, one),
        ];
        assert!(matches!(
            PriceSeries::new("X", bars),
            Err(BoardError::Data(_))
        ));
    }

    #[test]
    fn flat_session_counts_as_rising() {
        let d = date(2024, 1, 2);
        let bar = |o: i64, c: i64| PriceBar::new(d, Decimal::from(o), Decimal::from(12), Decimal::from(8), Decimal::from(c));
        assert!(bar(10, 11).is_rising());
        assert!(bar(10, 10).is_rising());
        assert!(!bar(10, 9).is_rising());
    }

    #[test]
    fn from_history_sorts_and_keeps_latest_same_day_candle() {
        let resp = HistoryResponse {
            candles: vec![
                candle(Utc.with_ymd_and_hms(2024, 1, 3, 14, 0, 0).unwrap(), 12),
                candle(Utc.with_ymd_and_hms(2024, 1, 2, 14, 0, 0).unwrap(), 10),
                candle(Utc.with_ymd_and_hms(2024, 1, 3, 20, 0, 0).unwrap(), 13),
            ],
            actions: vec![],
            adjusted: false,
            meta: None,
        };
        let s = PriceSeries::from_history("AAPL", &resp).unwrap();
        let closes: Vec<Decimal> = s.bars().iter().map(|b| b.close).collect();
        assert_eq!(closes, vec![Decimal::from(10), Decimal::from(13)]);
        assert_eq!(s.last().unwrap().date, date(2024, 1, 3));
        assert_eq!(s.currency(), Some(&Currency::Iso(IsoCurrency::USD)));
    }

    #[test]
    fn from_history_uses_utc_offset_for_local_date() {
        // 02:00 UTC is still the previous evening at UTC-3.
        let resp = HistoryResponse {
            candles: vec![candle(
                Utc.with_ymd_and_hms(2024, 5, 10, 2, 0, 0).unwrap(),
                30,
            )],
            actions: vec![],
            adjusted: false,
            meta: Some(HistoryMeta {
                timezone: None,
                utc_offset_seconds: Some(-3 * 3600),
            }),
        };
        let s = PriceSeries::from_history("PETR4.SA", &resp).unwrap();
        assert_eq!(s.first().unwrap().date, date(2024, 5, 9));
    }

    #[test]
    fn from_history_rejects_mixed_currencies() {
        let mut eur = candle(Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap(), 5);
        let px = Money::new(Decimal::from(5), Currency::Iso(IsoCurrency::EUR)).unwrap();
        eur.open = px.clone();
        eur.high = px.clone();
        eur.low = px.clone();
        eur.close = px;
        let resp = HistoryResponse {
            candles: vec![
                candle(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(), 5),
                eur,
            ],
            actions: vec![],
            adjusted: false,
            meta: None,
        };
        assert!(matches!(
            PriceSeries::from_history("X", &resp),
            Err(BoardError::Data(_))
        ));
    }
}
