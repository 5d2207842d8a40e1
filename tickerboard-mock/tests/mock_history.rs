use std::time::Duration;

use chrono::{Days, NaiveDate};
use tickerboard_core::{BoardError, fetch_series};
use tickerboard_mock::MockConnector;

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
}

#[tokio::test]
async fn fixture_is_clipped_to_requested_range() {
    let mock = MockConnector::new();
    let start = NaiveDate::from_ymd_opt(2024, 12, 2).unwrap();
    let series = fetch_series(&mock, "PETR4.SA", start, anchor()).await.unwrap();

    assert_eq!(series.first().unwrap().date, start);
    assert_eq!(series.last().unwrap().date, anchor());
    // 22 weekdays between Dec 2 and Dec 31 2024 inclusive.
    assert_eq!(series.len(), 22);
}

#[tokio::test]
async fn anchored_mock_follows_anchor() {
    let anchor = NaiveDate::from_ymd_opt(2026, 3, 13).unwrap();
    let mock = MockConnector::anchored_at(anchor);
    let start = anchor.checked_sub_days(Days::new(800)).unwrap();
    let series = fetch_series(&mock, "AAPL", start, anchor).await.unwrap();
    assert_eq!(series.last().unwrap().date, anchor);
    assert!(series.first().unwrap().date >= start);
}

#[tokio::test]
async fn fail_symbol_is_connector_error() {
    let err = fetch_series(&MockConnector::new(), "FAIL", anchor(), anchor())
        .await
        .unwrap_err();
    match err {
        BoardError::Connector { connector, msg } => {
            assert_eq!(connector, "tickerboard-mock");
            assert!(msg.contains("forced failure"));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn empty_and_unknown_symbols_are_not_found() {
    let mock = MockConnector::new();
    for sym in ["EMPTY", "NOPE"] {
        let err = fetch_series(&mock, sym, anchor(), anchor()).await.unwrap_err();
        assert!(err.is_not_found(), "{sym}: {err:?}");
    }
}

#[tokio::test]
async fn range_outside_fixture_is_not_found() {
    let start = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2030, 2, 1).unwrap();
    let err = fetch_series(&MockConnector::new(), "AAPL", start, end)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test(start_paused = true)]
async fn timeout_symbol_stalls() {
    let mock = MockConnector::new();
    let res = tokio::time::timeout(
        Duration::from_secs(5),
        fetch_series(&mock, "TIMEOUT", anchor(), anchor()),
    )
    .await;
    assert!(res.is_err());
}
