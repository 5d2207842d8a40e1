#![cfg(feature = "test-adapters")]

use std::sync::Arc;

use chrono::NaiveDate;
use tickerboard_core::{
    AssetKind, BoardError, Instrument, connector::HistoryProvider, daily_request, fetch_series,
};
use tickerboard_yfinance::{YfConnector, adapter};

struct Combo {
    h: Arc<dyn adapter::YfHistory>,
}
impl adapter::CloneArcAdapters for Combo {
    fn clone_arc_history(&self) -> Arc<dyn adapter::YfHistory> {
        self.h.clone()
    }
}

struct Unwired;
impl adapter::CloneArcAdapters for Unwired {}

fn failing(err: BoardError) -> YfConnector {
    let hist = <dyn adapter::YfHistory>::from_fn(move |_symbol, _req| Err(err.clone()));
    YfConnector::from_adapter(&Combo { h: hist })
}

async fn history_err(yf: &YfConnector, symbol: &str) -> BoardError {
    let d = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let inst = Instrument::from_symbol(symbol, AssetKind::Equity).expect("valid test instrument");
    yf.history(&inst, daily_request(d, d).unwrap())
        .await
        .unwrap_err()
}

#[tokio::test]
async fn other_error_preserves_connector_name() {
    let yf = failing(BoardError::Other("some http error".to_string()));
    match history_err(&yf, "AAPL").await {
        BoardError::Connector { connector, msg } => {
            assert_eq!(connector, "tickerboard-yfinance");
            assert_eq!(msg, "some http error");
        }
        other => panic!("expected connector error, got {other:?}"),
    }
}

#[tokio::test]
async fn not_found_message_maps_to_not_found() {
    let yf = failing(BoardError::connector("tickerboard-yfinance", "Not Found"));
    match history_err(&yf, "ZZZ").await {
        BoardError::NotFound { what } => assert_eq!(what, "history for ZZZ"),
        other => panic!("expected not found, got {other:?}"),
    }
}

#[tokio::test]
async fn no_data_message_maps_to_not_found() {
    let yf = failing(BoardError::connector("yahoo", "No data found, symbol may be delisted"));
    assert!(history_err(&yf, "OLD").await.is_not_found());
}

#[tokio::test]
async fn rate_limited_stays_connector_error() {
    let yf = failing(BoardError::connector("yahoo", "rate limit: history for AAPL"));
    match history_err(&yf, "AAPL").await {
        BoardError::Connector { connector, .. } => assert_eq!(connector, "tickerboard-yfinance"),
        other => panic!("expected connector error, got {other:?}"),
    }
}

#[tokio::test]
async fn typed_not_found_passes_through() {
    let yf = failing(BoardError::not_found("history for XYZ"));
    assert!(matches!(
        history_err(&yf, "XYZ").await,
        BoardError::NotFound { .. }
    ));
}

#[tokio::test]
async fn unwired_adapter_reports_unsupported() {
    let yf = YfConnector::from_adapter(&Unwired);
    assert!(matches!(
        history_err(&yf, "AAPL").await,
        BoardError::Unsupported { .. }
    ));
}

#[tokio::test]
async fn fetch_series_surfaces_normalized_error() {
    let yf = failing(BoardError::connector("yahoo", "server error 502: history for AAPL"));
    let d = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let err = fetch_series(&yf, "AAPL", d, d).await.unwrap_err();
    assert!(matches!(err, BoardError::Connector { .. }));
}
