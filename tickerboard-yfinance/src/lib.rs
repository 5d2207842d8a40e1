//! tickerboard-yfinance
//!
//! Connector that implements `BoardConnector` on top of the `yfinance-rs`
//! client library. Only daily-or-coarser OHLCV history is exposed; that is all
//! the dashboard consumes.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `yfinance-rs`.
pub mod adapter;

use std::sync::Arc;

#[cfg(feature = "test-adapters")]
use adapter::CloneArcAdapters;
use adapter::{RealAdapter, YfHistory};
use async_trait::async_trait;
use tickerboard_core::{
    AssetKind, BoardError, HistoryRequest, HistoryResponse, Instrument, Interval,
    connector::{BoardConnector, HistoryProvider},
};

#[cfg(feature = "test-adapters")]
type HistoryAdapter = Arc<dyn YfHistory>;
#[cfg(not(feature = "test-adapters"))]
type HistoryAdapter = Arc<RealAdapter>;

/// Public connector type. Production users construct it with `YfConnector::new_default()`.
pub struct YfConnector {
    history: HistoryAdapter,
}

impl YfConnector {
    /// Stable connector name used in errors and logs.
    pub const NAME: &'static str = "tickerboard-yfinance";

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("no matches")
    }

    fn normalize_error(e: BoardError, what: &str) -> BoardError {
        match e {
            BoardError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    BoardError::not_found(what.to_string())
                } else {
                    BoardError::connector(Self::NAME, msg)
                }
            }
            BoardError::Other(msg) => BoardError::connector(Self::NAME, msg),
            other => other,
        }
    }

    /// Build with a fresh `yfinance_rs::YfClient` inside.
    ///
    /// # Errors
    /// Returns `BoardError::Connector` if the HTTP stack cannot be initialized.
    pub fn new_default() -> Result<Self, BoardError> {
        let a = RealAdapter::new_default()?;
        Ok(Self::from_adapter(&a))
    }

    /// Build from an existing `yfinance_rs::YfClient`.
    #[must_use]
    pub fn new_with_client(client: yfinance_rs::YfClient) -> Self {
        let a = RealAdapter::new(client);
        Self::from_adapter(&a)
    }

    /// Build from a provided `reqwest::Client`.
    ///
    /// Note: the provided client should enable a cookie store for the yfinance crumb flow.
    ///
    /// # Errors
    /// Returns an error if the internal `YfClient` cannot be constructed from the client.
    pub fn try_new_with_reqwest_client(http: reqwest::Client) -> Result<Self, BoardError> {
        let a = RealAdapter::with_http(http)?;
        Ok(Self::from_adapter(&a))
    }

    /// For tests/injection (requires the `test-adapters` feature).
    #[cfg(feature = "test-adapters")]
    pub fn from_adapter<A: CloneArcAdapters + 'static>(adapter: &A) -> Self {
        Self {
            history: adapter.clone_arc_history(),
        }
    }

    /// Build from a concrete `RealAdapter` by cloning it into a shared handle.
    #[cfg(not(feature = "test-adapters"))]
    #[must_use]
    pub fn from_adapter(adapter: &RealAdapter) -> Self {
        Self {
            history: Arc::new(adapter.clone()),
        }
    }
}

#[async_trait]
impl HistoryProvider for YfConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "tickerboard::yfinance",
            skip(self, req),
            fields(symbol = %instrument.symbol_str(), interval = ?req.interval()),
        )
    )]
    async fn history(
        &self,
        instrument: &Instrument,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, BoardError> {
        let yf_req = yfinance_rs::core::services::HistoryRequest {
            range: req.range(),
            period: req.period().map(|(s, e)| (s.timestamp(), e.timestamp())),
            interval: req.interval(),
            include_prepost: req.include_prepost(),
            include_actions: req.include_actions(),
            auto_adjust: req.auto_adjust(),
            keepna: req.keepna(),
        };
        let symbol = instrument.symbol_str();
        self.history
            .fetch_full(symbol, yf_req)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("history for {symbol}")))
    }

    fn supported_history_intervals(&self, _kind: AssetKind) -> &'static [Interval] {
        const YF_INTERVALS: &[Interval] = &[Interval::D1, Interval::D5, Interval::W1, Interval::M1];
        YF_INTERVALS
    }
}

impl BoardConnector for YfConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn supports_kind(&self, kind: AssetKind) -> bool {
        matches!(
            kind,
            AssetKind::Equity | AssetKind::Fund | AssetKind::Index
        )
    }
}
