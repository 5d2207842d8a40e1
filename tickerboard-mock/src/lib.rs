//! Mock connectors for tickerboard.
//!
//! `MockConnector` serves deterministic fixture history and a few special
//! symbols for exercising failure paths. `DynamicMockConnector` defers every
//! call to a test-side controller.
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use tickerboard_core::connector::{BoardConnector, HistoryProvider};
use tickerboard_core::{
    AssetKind, BoardError, HistoryRequest, HistoryResponse, Instrument, Interval,
};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// How long the `TIMEOUT` symbol stalls before answering.
pub const TIMEOUT_STALL: Duration = Duration::from_secs(60);

/// Mock connector for CI-safe runs. Provides deterministic data from generated fixtures.
///
/// Special symbols:
/// - `FAIL`: connector error
/// - `EMPTY`: empty history
/// - `TIMEOUT`: stalls for [`TIMEOUT_STALL`]
///
/// Any other symbol without a fixture is reported as not found.
pub struct MockConnector {
    anchor: NaiveDate,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Fixtures end on 2024-12-31.
    #[must_use]
    pub fn new() -> Self {
        Self::anchored_at(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or(NaiveDate::MIN))
    }

    /// Fixtures end on the last weekday at or before `anchor`.
    #[must_use]
    pub const fn anchored_at(anchor: NaiveDate) -> Self {
        Self { anchor }
    }

    async fn maybe_fail_or_timeout(symbol: &str, capability: &'static str) -> Result<(), BoardError> {
        match symbol {
            "FAIL" => Err(BoardError::connector(
                "tickerboard-mock",
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                tokio::time::sleep(TIMEOUT_STALL).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl BoardConnector for MockConnector {
    fn name(&self) -> &'static str {
        "tickerboard-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn supports_kind(&self, _kind: AssetKind) -> bool {
        true
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(
        &self,
        instrument: &Instrument,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, BoardError> {
        let s = instrument.symbol_str();
        Self::maybe_fail_or_timeout(s, "history").await?;
        if s == "EMPTY" {
            return Ok(HistoryResponse {
                candles: vec![],
                actions: vec![],
                adjusted: false,
                meta: None,
            });
        }
        let mut resp = fixtures::history::by_symbol(s, self.anchor)
            .ok_or_else(|| BoardError::not_found(format!("history for {s}")))?;
        if let Some((start, end)) = req.period() {
            resp.candles.retain(|c| c.ts >= start && c.ts < end);
        }
        Ok(resp)
    }

    fn supported_history_intervals(&self, _kind: AssetKind) -> &'static [Interval] {
        const ONLY_D1: &[Interval] = &[Interval::D1];
        ONLY_D1
    }
}
