#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;

use tickerboard_core::BoardError;
use yf::core::HistoryService;
use yfinance_rs as yf;

const CONNECTOR: &str = "tickerboard-yfinance";

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// History abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait YfHistory: Send + Sync {
    /// Fetch full history for a symbol using a provider-specific request.
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, BoardError>;
}

/// Real adapter backed by a single `YfClient` instance.
/// `YfClient` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    client: yf::YfClient,
}

impl RealAdapter {
    /// Build a default `YfClient` with a cookie store and a browser user agent.
    ///
    /// # Errors
    /// Returns `BoardError::Connector` if the HTTP client or the `YfClient`
    /// cannot be constructed.
    pub fn new_default() -> Result<Self, BoardError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .no_proxy()
            .build()
            .map_err(|e| BoardError::connector(CONNECTOR, format!("http client: {e}")))?;
        Self::with_http(http)
    }

    /// Build a `YfClient` on top of a caller-supplied HTTP client.
    ///
    /// The client should keep a cookie store; Yahoo's crumb flow depends on it.
    ///
    /// # Errors
    /// Returns `BoardError::Connector` if the `YfClient` cannot be constructed.
    pub fn with_http(http: reqwest::Client) -> Result<Self, BoardError> {
        let client = yf::YfClient::builder()
            .custom_client(http)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| BoardError::connector(CONNECTOR, format!("client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an existing `YfClient`.
    #[must_use]
    pub const fn new(client: yf::YfClient) -> Self {
        Self { client }
    }
}

fn map_yf_err(e: &yf::YfError, context: &str) -> BoardError {
    match e {
        yf::YfError::NotFound { .. } => BoardError::not_found(context.to_string()),
        yf::YfError::RateLimited { .. } => {
            BoardError::connector(CONNECTOR, format!("rate limit: {context}"))
        }
        yf::YfError::ServerError { status, .. } => {
            BoardError::connector(CONNECTOR, format!("server error {status}: {context}"))
        }
        yf::YfError::Status { status, .. } => {
            BoardError::connector(CONNECTOR, format!("status {status}: {context}"))
        }
        other => BoardError::connector(CONNECTOR, other.to_string()),
    }
}

#[async_trait]
impl YfHistory for RealAdapter {
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, BoardError> {
        self.client
            .fetch_full_history(symbol, req)
            .await
            .map_err(|e| map_yf_err(&e, &format!("history for {symbol}")))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YfHistory {
    /// Build a `YfHistory` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfHistory>
    where
        F: Send
            + Sync
            + 'static
            + Fn(
                String,
                yf::core::services::HistoryRequest,
            ) -> Result<yf::HistoryResponse, BoardError>,
    {
        struct FnHist<F>(F);
        #[async_trait]
        impl<F> YfHistory for FnHist<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(
                    String,
                    yf::core::services::HistoryRequest,
                ) -> Result<yf::HistoryResponse, BoardError>,
        {
            async fn fetch_full(
                &self,
                symbol: &str,
                req: yf::core::services::HistoryRequest,
            ) -> Result<yf::HistoryResponse, BoardError> {
                (self.0)(symbol.to_string(), req)
            }
        }
        Arc::new(FnHist(f))
    }
}

/// Helper trait to hand the connector its adapter as a shared trait object.
#[cfg(feature = "test-adapters")]
pub trait CloneArcAdapters {
    /// Clone as `Arc<dyn YfHistory>`.
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        <dyn YfHistory>::from_fn(|_, _| Err(BoardError::unsupported("history")))
    }
}

#[cfg(feature = "test-adapters")]
impl CloneArcAdapters for RealAdapter {
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        Arc::new(self.clone()) as Arc<dyn YfHistory>
    }
}
