//! Unicode candlestick chart rendered line by line.
//!
//! Each candle occupies one column. For every row the glyph is chosen from
//! three zones (upper wick, body, lower wick) with 0.25/0.75 thresholds for
//! sub-character precision.

use crossterm::style::Stylize;
use rust_decimal::prelude::ToPrimitive;
use tickerboard_core::PriceBar;

const VOID: char = ' ';
const BODY: char = '┃';
const HALF_BODY_BOTTOM: char = '╻';
const HALF_BODY_TOP: char = '╹';
const WICK: char = '│';
const TOP: char = '╽';
const BOTTOM: char = '╿';
const UPPER_WICK: char = '╷';
const LOWER_WICK: char = '╵';

/// Rows between two price labels on the y axis.
const LABEL_EVERY: u16 = 4;

#[derive(Debug, Clone, Copy)]
struct Candle {
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    rising: bool,
}

impl Candle {
    fn from_bar(bar: &PriceBar) -> Option<Self> {
        Some(Self {
            open: bar.open.to_f64()?,
            high: bar.high.to_f64()?,
            low: bar.low.to_f64()?,
            close: bar.close.to_f64()?,
            rising: bar.is_rising(),
        })
    }
}

/// Text candlestick renderer over a fixed-size plot area.
pub struct CandlestickChart {
    candles: Vec<Candle>,
    min_price: f64,
    max_price: f64,
    height: u16,
    color: bool,
}

impl CandlestickChart {
    /// Build a chart for `bars`, keeping only the newest candles that fit in `width` columns.
    #[must_use]
    pub fn new(bars: &[PriceBar], width: u16, height: u16, color: bool) -> Self {
        let width = usize::from(width.max(1));
        let visible = &bars[bars.len().saturating_sub(width)..];
        let candles: Vec<Candle> = visible.iter().filter_map(Candle::from_bar).collect();
        let (min_price, max_price) = price_bounds(&candles);
        Self {
            candles,
            min_price,
            max_price,
            height: height.max(1),
            color,
        }
    }

    /// Number of candles that will be drawn.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.candles.len()
    }

    fn price_to_height(&self, price: f64) -> f64 {
        let h = f64::from(self.height);
        if (self.max_price - self.min_price).abs() < f64::EPSILON {
            return h / 2.0;
        }
        (price - self.min_price) / (self.max_price - self.min_price) * h
    }

    fn glyph(&self, candle: &Candle, y: u16) -> char {
        let unit = f64::from(y);
        let high_y = self.price_to_height(candle.high);
        let low_y = self.price_to_height(candle.low);
        let max_y = self.price_to_height(candle.open.max(candle.close));
        let min_y = self.price_to_height(candle.open.min(candle.close));

        if high_y.ceil() >= unit && unit >= max_y.floor() {
            if max_y - unit > 0.75 {
                BODY
            } else if max_y - unit > 0.25 {
                if high_y - unit > 0.75 { TOP } else { HALF_BODY_BOTTOM }
            } else if high_y - unit > 0.75 {
                WICK
            } else if high_y - unit > 0.25 {
                UPPER_WICK
            } else {
                VOID
            }
        } else if max_y.floor() >= unit && unit >= min_y.ceil() {
            BODY
        } else if min_y.ceil() >= unit && unit >= low_y.floor() {
            if min_y - unit < 0.25 {
                BODY
            } else if min_y - unit < 0.75 {
                if low_y - unit < 0.25 { BOTTOM } else { HALF_BODY_TOP }
            } else if low_y - unit < 0.25 {
                WICK
            } else if low_y - unit < 0.75 {
                LOWER_WICK
            } else {
                VOID
            }
        } else {
            VOID
        }
    }

    fn y_axis(&self, y: u16) -> String {
        if y % LABEL_EVERY == 0 {
            let price = self.min_price
                + f64::from(y) * (self.max_price - self.min_price) / f64::from(self.height);
            format!("{price:>9.2} │ ")
        } else {
            format!("{:>9} │ ", "")
        }
    }

    /// Render the plot rows, top first. Empty when there is nothing to draw.
    #[must_use]
    pub fn render_lines(&self) -> Vec<String> {
        if self.candles.is_empty() {
            return Vec::new();
        }
        (1..=self.height)
            .rev()
            .map(|y| {
                let mut line = self.y_axis(y);
                for candle in &self.candles {
                    let g = self.glyph(candle, y);
                    if self.color && g != VOID {
                        let styled = if candle.rising {
                            g.green()
                        } else {
                            g.red()
                        };
                        line.push_str(&styled.to_string());
                    } else {
                        line.push(g);
                    }
                }
                line.trim_end().to_string()
            })
            .collect()
    }

    /// Render the chart as one string.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_lines().join("\n")
    }
}

/// Lowest low and highest high with a 2% margin, floored at zero.
fn price_bounds(candles: &[Candle]) -> (f64, f64) {
    if candles.is_empty() {
        return (0.0, 0.0);
    }
    let max = candles.iter().fold(f64::NEG_INFINITY, |m, c| m.max(c.high));
    let min = candles.iter().fold(f64::INFINITY, |m, c| m.min(c.low));
    let margin = (max - min) * 0.02;
    ((min - margin).max(0.0), max + margin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use rust_decimal::Decimal;

    fn bar(i: u64, o: i64, h: i64, l: i64, c: i64) -> PriceBar {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Days::new(i);
        PriceBar::new(
            d,
            Decimal::from(o),
            Decimal::from(h),
            Decimal::from(l),
            Decimal::from(c),
        )
    }

    #[test]
    fn keeps_newest_candles_that_fit() {
        let bars: Vec<PriceBar> = (0..50).map(|i| bar(i, 10, 12, 9, 11)).collect();
        let chart = CandlestickChart::new(&bars, 20, 10, false);
        assert_eq!(chart.visible_len(), 20);
    }

    #[test]
    fn draws_one_row_per_height_unit_with_axis() {
        let bars = vec![bar(0, 10, 20, 5, 15), bar(1, 15, 18, 8, 9)];
        let lines = CandlestickChart::new(&bars, 80, 8, false).render_lines();
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().all(|l| l.contains('│')));
        // Labels on rows 8 and 4 (top first: indices 0 and 4).
        assert!(lines[0].trim_start().starts_with(|c: char| c.is_ascii_digit()));
        assert!(lines[4].trim_start().starts_with(|c: char| c.is_ascii_digit()));
        assert!(lines[1].trim_start().starts_with('│'));
    }

    #[test]
    fn tall_body_uses_body_glyph() {
        let bars = vec![bar(0, 10, 100, 10, 100)];
        let out = CandlestickChart::new(&bars, 80, 10, false).render();
        assert!(out.contains(BODY));
    }

    #[test]
    fn colour_only_when_enabled() {
        let bars = vec![bar(0, 10, 20, 5, 15), bar(1, 15, 18, 8, 9)];
        let plain = CandlestickChart::new(&bars, 80, 6, false).render();
        let coloured = CandlestickChart::new(&bars, 80, 6, true).render();
        assert!(!plain.contains('\u{1b}'));
        assert!(coloured.contains('\u{1b}'));
    }

    #[test]
    fn candle_colour_follows_bar_direction() {
        let up = CandlestickChart::new(&[bar(0, 10, 100, 10, 100)], 80, 10, true).render();
        assert!(up.contains(&BODY.green().to_string()));
        assert!(!up.contains(&BODY.red().to_string()));

        let down = CandlestickChart::new(&[bar(0, 100, 100, 10, 10)], 80, 10, true).render();
        assert!(down.contains(&BODY.red().to_string()));
        assert!(!down.contains(&BODY.green().to_string()));
    }

    #[test]
    fn empty_series_renders_nothing() {
        assert!(CandlestickChart::new(&[], 80, 10, false).render().is_empty());
    }

    #[test]
    fn flat_series_does_not_divide_by_zero() {
        let bars = vec![bar(0, 10, 10, 10, 10), bar(1, 10, 10, 10, 10)];
        let lines = CandlestickChart::new(&bars, 80, 6, false).render_lines();
        assert_eq!(lines.len(), 6);
    }
}
