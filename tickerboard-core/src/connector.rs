use async_trait::async_trait;

use crate::BoardError;
use paft::domain::{AssetKind, Instrument};
use paft::market::requests::history::{HistoryRequest, Interval};
use paft::market::responses::history::HistoryResponse;

/// Focused role trait for connectors that provide OHLCV history.
///
/// This is the injectable "fetch price series for ticker + range" capability; the
/// dashboard only ever talks to market data through it.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch OHLCV history for the given instrument and request.
    async fn history(
        &self,
        instrument: &Instrument,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, BoardError>;

    /// REQUIRED: exact intervals this connector can natively serve for history.
    ///
    /// Parameters:
    /// - `kind`: asset kind to consider (some providers vary by kind).
    ///
    /// Returns the static slice of supported `Interval`s.
    fn supported_history_intervals(&self, kind: AssetKind) -> &'static [Interval];
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
#[async_trait]
pub trait BoardConnector: Send + Sync {
    /// A stable identifier used in logs and error messages (e.g., "tickerboard-yfinance").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Whether this connector *claims* to support a given asset kind.
    ///
    /// Default: returns `false` for all kinds. Connectors must explicitly override
    /// this method to declare which asset kinds they support.
    fn supports_kind(&self, kind: AssetKind) -> bool {
        let _ = kind;
        false
    }

    /// Advertise history capability by returning a usable trait object reference when supported.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }
}
