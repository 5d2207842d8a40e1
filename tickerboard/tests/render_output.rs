use std::sync::Arc;

use chrono::{Days, NaiveDate};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use tickerboard::render::{
    RenderOptions, chart_heading, render_failure, render_headline, render_report, render_returns,
    render_stats,
};
use tickerboard::{BoardError, Dashboard, DashboardReport, RangeStats, ReturnResult};
use tickerboard_mock::MockConnector;

fn plain() -> RenderOptions {
    RenderOptions {
        currency_prefix: "R$".to_string(),
        color: false,
        chart_height: 12,
        chart_width: 60,
    }
}

async fn petr4_report() -> DashboardReport {
    let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    let start = end.checked_sub_days(Days::new(800)).unwrap();
    Dashboard::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap()
        .load("PETR4.SA", start, end)
        .await
        .unwrap()
}

#[tokio::test]
async fn truncated_chart_heading_names_visible_span() {
    let report = petr4_report().await;
    let opts = plain();
    let bars = report.series.bars();
    assert!(bars.len() > 60);

    let heading = chart_heading(bars, &opts);
    let from = bars[bars.len() - 60].date;
    assert_eq!(
        heading,
        format!("Price History (last 60 sessions, {from} to {})", report.as_of)
    );
    assert!(render_report(&report, &opts).contains(&heading));

    assert_eq!(chart_heading(&bars[..10], &opts), "Price History");
}

#[test]
fn unavailable_window_renders_dash() {
    let mut returns = IndexMap::new();
    returns.insert("Last Month".to_string(), ReturnResult::Percent(Decimal::from(21)));
    returns.insert("Last 24 Months".to_string(), ReturnResult::Unavailable);

    let table = render_returns(&returns);
    let month = table.lines().find(|l| l.contains("Last Month")).unwrap();
    assert!(month.contains("21.00%"));
    let two_years = table.lines().find(|l| l.contains("Last 24 Months")).unwrap();
    assert!(two_years.contains(" - "));
    assert!(!two_years.contains('%'));
}

#[test]
fn returns_table_keeps_window_order() {
    let mut returns = IndexMap::new();
    returns.insert("b".to_string(), ReturnResult::Unavailable);
    returns.insert("a".to_string(), ReturnResult::Unavailable);
    let table = render_returns(&returns);
    let b = table.find("│ b").unwrap();
    let a = table.find("│ a").unwrap();
    assert!(b < a);
}

#[test]
fn stats_table_formats_prices_and_volume() {
    let stats = RangeStats {
        min_low: Decimal::from(90),
        max_high: Decimal::new(11005, 2),
        mean_volume: Some(Decimal::from(1_234_567)),
    };
    let table = render_stats(&stats, &plain());
    assert!(table.contains("Minimum"));
    assert!(table.contains("R$ 90.00"));
    assert!(table.contains("R$ 110.05"));
    assert!(table.contains("Average Volume"));
    assert!(table.contains("1,234,567"));
}

#[test]
fn stats_without_volume_show_dash() {
    let stats = RangeStats {
        min_low: Decimal::ONE,
        max_high: Decimal::TWO,
        mean_volume: None,
    };
    let table = render_stats(&stats, &plain());
    let row = table.lines().find(|l| l.contains("Average Volume")).unwrap();
    assert!(row.contains(" - "));
}

#[tokio::test]
async fn headline_shows_price_and_changes() {
    let report = petr4_report().await;
    let headline = render_headline(&report, &plain());
    assert!(headline.contains("Current Price"));
    assert!(headline.contains("Change (1 day)"));
    assert!(headline.contains("Percent Change"));
    assert!(headline.contains(&format!("R$ {:.2}", report.latest_close.round_dp(2))));
    assert!(headline.contains('%'));
}

#[tokio::test]
async fn full_report_has_every_section_and_no_colour_when_disabled() {
    let report = petr4_report().await;
    let out = render_report(&report, &plain());
    for section in ["PETR4.SA", "Price History", "Cumulative Returns (%)", "Statistics"] {
        assert!(out.contains(section), "missing {section}");
    }
    assert!(out.contains('┃') || out.contains('│'));
    assert!(!out.contains('\u{1b}'));
}

#[test]
fn failure_messages_by_kind() {
    assert_eq!(
        render_failure("XYZ", &BoardError::not_found("history for XYZ")),
        "No data found for XYZ. Check the symbol."
    );

    let short = render_failure("ONE", &BoardError::insufficient_data("day change", 2, 1));
    assert!(short.contains("ONE"));
    assert!(short.contains('2'));
    assert!(short.contains('1'));

    let other = render_failure(
        "AAPL",
        &BoardError::connector("tickerboard-yfinance", "status 500: history for AAPL"),
    );
    assert!(other.starts_with("Failed to load data: "));
    assert!(other.contains("status 500"));
}
