//! Text rendering of a [`DashboardReport`] and of load failures.

use crossterm::style::Stylize;
use num_format::{Locale, ToFormattedString};
use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::ToPrimitive;
use tabled::{builder::Builder, settings::Style};
use tickerboard_core::{
    BoardError, DashboardConfig, Decimal, PriceBar, RangeStats, ReturnResult, TrailingReturns,
};

use crate::chart::CandlestickChart;
use crate::report::DashboardReport;

/// Presentation settings derived from [`DashboardConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix printed before prices.
    pub currency_prefix: String,
    /// Emit ANSI colours.
    pub color: bool,
    /// Plot rows.
    pub chart_height: u16,
    /// Plot columns.
    pub chart_width: u16,
}

impl RenderOptions {
    /// Take the presentation fields from a dashboard configuration.
    #[must_use]
    pub fn from_config(cfg: &DashboardConfig) -> Self {
        Self {
            currency_prefix: cfg.currency_prefix.clone(),
            color: cfg.color,
            chart_height: cfg.chart_height,
            chart_width: cfg.chart_width,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}

fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// `{prefix} {value}` with two decimals, e.g. `R$ 36.10`.
#[must_use]
pub fn format_money(prefix: &str, value: Decimal) -> String {
    let v = round_half_up(value, 2);
    if prefix.is_empty() {
        format!("{v:.2}")
    } else {
        format!("{prefix} {v:.2}")
    }
}

/// Two decimals and a percent sign, e.g. `21.00%`.
#[must_use]
pub fn format_percent(value: Decimal) -> String {
    format!("{:.2}%", round_half_up(value, 2))
}

/// Volume with no decimals and thousands separators, e.g. `1,500`.
#[must_use]
pub fn format_volume(value: Decimal) -> String {
    let whole = round_half_up(value, 0);
    whole
        .to_u64()
        .map_or_else(|| whole.to_string(), |v| v.to_formatted_string(&Locale::en))
}

fn signed(text: String, value: Decimal, color: bool) -> String {
    if !color || value.is_zero() {
        text
    } else if value.is_sign_positive() {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}

/// The three headline metrics: current price, one-day change and percent change.
#[must_use]
pub fn render_headline(report: &DashboardReport, opts: &RenderOptions) -> String {
    let prefix = opts.currency_prefix.as_str();
    let change = report.day_change;
    let mut b = Builder::default();
    b.push_record(["Current Price", "Change (1 day)", "Percent Change"]);
    b.push_record([
        format_money(prefix, report.latest_close),
        signed(format_money(prefix, change.absolute), change.absolute, opts.color),
        signed(format_percent(change.percent), change.percent, opts.color),
    ]);
    b.build().with(Style::rounded()).to_string()
}

/// Candlestick chart of the newest bars that fit the configured width.
#[must_use]
pub fn render_chart(bars: &[PriceBar], opts: &RenderOptions) -> String {
    CandlestickChart::new(bars, opts.chart_width, opts.chart_height, opts.color).render()
}

/// "Price History", naming the drawn span when the chart holds fewer sessions than the report.
#[must_use]
pub fn chart_heading(bars: &[PriceBar], opts: &RenderOptions) -> String {
    let width = usize::from(opts.chart_width.max(1));
    if bars.len() <= width {
        return "Price History".to_string();
    }
    let visible = &bars[bars.len() - width..];
    match (visible.first(), visible.last()) {
        (Some(f), Some(l)) => format!(
            "Price History (last {width} sessions, {} to {})",
            f.date, l.date
        ),
        _ => "Price History".to_string(),
    }
}

/// Returns table; unavailable windows show `-`.
#[must_use]
pub fn render_returns(returns: &TrailingReturns) -> String {
    let mut b = Builder::default();
    b.push_record(["Period", "Return"]);
    for (label, result) in returns {
        let cell = match result {
            ReturnResult::Percent(p) => format_percent(*p),
            ReturnResult::Unavailable => "-".to_string(),
        };
        b.push_record([label.clone(), cell]);
    }
    b.build().with(Style::sharp()).to_string()
}

/// Statistics table: minimum low, maximum high and average volume.
#[must_use]
pub fn render_stats(stats: &RangeStats, opts: &RenderOptions) -> String {
    let prefix = opts.currency_prefix.as_str();
    let mut b = Builder::default();
    b.push_record(["Indicator", "Value"]);
    b.push_record(["Minimum".to_string(), format_money(prefix, stats.min_low)]);
    b.push_record(["Maximum".to_string(), format_money(prefix, stats.max_high)]);
    b.push_record([
        "Average Volume".to_string(),
        stats.mean_volume.map_or_else(|| "-".to_string(), format_volume),
    ]);
    b.build().with(Style::sharp()).to_string()
}

/// The full dashboard as printable text.
#[must_use]
pub fn render_report(report: &DashboardReport, opts: &RenderOptions) -> String {
    let bars = report.series.bars();
    let span = match (report.series.first(), report.series.last()) {
        (Some(f), Some(l)) => format!("{} to {}", f.date, l.date),
        _ => String::new(),
    };
    [
        format!("{} ({span}, {} sessions)", report.ticker, bars.len()),
        render_headline(report, opts),
        chart_heading(bars, opts),
        render_chart(bars, opts),
        "Cumulative Returns (%)".to_string(),
        render_returns(&report.returns),
        "Statistics".to_string(),
        render_stats(&report.stats, opts),
    ]
    .join("\n\n")
}

/// User-facing message for a failed load.
#[must_use]
pub fn render_failure(ticker: &str, err: &BoardError) -> String {
    match err {
        BoardError::NotFound { .. } => {
            format!("No data found for {ticker}. Check the symbol.")
        }
        BoardError::InsufficientData {
            needed, available, ..
        } => format!(
            "Not enough data for {ticker}: at least {needed} trading days are needed, found {available}. Try a wider date range."
        ),
        other => format!("Failed to load data: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_uses_prefix_and_two_decimals() {
        assert_eq!(format_money("R$", Decimal::new(3610, 2)), "R$ 36.10");
        assert_eq!(format_money("$", Decimal::from(5)), "$ 5.00");
        assert_eq!(format_money("", Decimal::new(-12345, 3)), "-12.35");
    }

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(format_percent(Decimal::from(21)), "21.00%");
        assert_eq!(format_percent(Decimal::new(-4762, 3)), "-4.76%");
    }

    #[test]
    fn volume_has_separators_and_no_decimals() {
        assert_eq!(format_volume(Decimal::from(1500)), "1,500");
        assert_eq!(format_volume(Decimal::new(123_456_789_6, 1)), "123,456,790");
    }

    #[test]
    fn signed_values_are_plain_without_colour() {
        assert_eq!(signed("x".into(), Decimal::ONE, false), "x");
        assert!(signed("x".into(), Decimal::ONE, true).contains('\u{1b}'));
        assert_eq!(signed("x".into(), Decimal::ZERO, true), "x");
    }
}
