use chrono::{Datelike, Days, NaiveDate, Weekday};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use tickerboard_core::{Candle, Currency, HistoryMeta, HistoryResponse, IsoCurrency, Money};

struct Fixture {
    bars: usize,
    start_cents: i64,
    seed: u64,
    tz: Tz,
    currency: IsoCurrency,
}

fn fixture(symbol: &str) -> Option<Fixture> {
    let f = match symbol {
        "PETR4.SA" => Fixture {
            bars: 800,
            start_cents: 3_000,
            seed: 0x5045_5452_3453_4131,
            tz: chrono_tz::America::Sao_Paulo,
            currency: IsoCurrency::BRL,
        },
        "VALE3.SA" => Fixture {
            bars: 800,
            start_cents: 6_500,
            seed: 0x5641_4c45_3353_4131,
            tz: chrono_tz::America::Sao_Paulo,
            currency: IsoCurrency::BRL,
        },
        "AAPL" => Fixture {
            bars: 800,
            start_cents: 15_000,
            seed: 0x4141_504c,
            tz: chrono_tz::America::New_York,
            currency: IsoCurrency::USD,
        },
        "MSFT" => Fixture {
            bars: 800,
            start_cents: 30_000,
            seed: 0x4d53_4654,
            tz: chrono_tz::America::New_York,
            currency: IsoCurrency::USD,
        },
        // Recently listed: only the shortest window resolves.
        "NEWCO" => Fixture {
            bars: 30,
            start_cents: 1_000,
            seed: 0x4e45_5743_4f,
            tz: chrono_tz::America::New_York,
            currency: IsoCurrency::USD,
        },
        "ONE" => Fixture {
            bars: 1,
            start_cents: 5_000,
            seed: 1,
            tz: chrono_tz::America::New_York,
            currency: IsoCurrency::USD,
        },
        _ => return None,
    };
    Some(f)
}

/// Full fixture history for `symbol`, ending on the last weekday at or before `anchor`.
pub fn by_symbol(symbol: &str, anchor: NaiveDate) -> Option<HistoryResponse> {
    let f = fixture(symbol)?;
    let dates = trading_days(anchor, f.bars);

    let mut rng = XorShift(f.seed.max(1));
    let mut prev_close = f.start_cents;
    let mut candles = Vec::with_capacity(dates.len());
    for date in dates {
        let r = rng.next();
        let open = prev_close;
        let step = i64::try_from(r % 101).unwrap_or(0) - 49;
        let close = (open + step).max(100);
        let high = open.max(close) + i64::try_from((r >> 8) % 40).unwrap_or(0);
        let low = (open.min(close) - i64::try_from((r >> 16) % 40).unwrap_or(0)).max(50);
        let volume = 15_000_000 + (r >> 24) % 20_000_000;
        prev_close = close;

        let Some(ts) = date.and_hms_opt(14, 0, 0).map(|dt| dt.and_utc()) else {
            continue;
        };
        let px = |cents| money(cents, &f.currency);
        let (Some(open), Some(high), Some(low), Some(close)) =
            (px(open), px(high), px(low), px(close))
        else {
            continue;
        };
        candles.push(Candle {
            ts,
            open,
            high,
            low,
            close,
            close_unadj: None,
            volume: Some(volume),
        });
    }

    Some(HistoryResponse {
        candles,
        actions: vec![],
        adjusted: false,
        meta: Some(HistoryMeta {
            timezone: Some(f.tz),
            utc_offset_seconds: None,
        }),
    })
}

fn money(cents: i64, currency: &IsoCurrency) -> Option<Money> {
    Money::new(Decimal::new(cents, 2), Currency::Iso(currency.clone())).ok()
}

fn trading_days(anchor: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let mut out = Vec::with_capacity(count);
    let mut d = anchor;
    while out.len() < count {
        if !matches!(d.weekday(), Weekday::Sat | Weekday::Sun) {
            out.push(d);
        }
        match d.checked_sub_days(Days::new(1)) {
            Some(prev) => d = prev,
            None => break,
        }
    }
    out.reverse();
    out
}

struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}
