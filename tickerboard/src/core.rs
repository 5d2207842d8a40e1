use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tickerboard_core::{
    BoardConnector, BoardError, DashboardConfig, LookbackWindow, compute_day_change,
    compute_range_stats, compute_trailing_returns, fetch_series,
};

use crate::report::DashboardReport;

/// Loads a ticker's daily history through one connector and derives every
/// figure the dashboard shows.
pub struct Dashboard {
    pub(crate) connector: Arc<dyn BoardConnector>,
    pub(crate) cfg: DashboardConfig,
}

/// Builder for constructing a `Dashboard` with custom configuration.
pub struct DashboardBuilder {
    connector: Option<Arc<dyn BoardConnector>>,
    cfg: DashboardConfig,
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardBuilder {
    /// Create a builder with the default configuration and no connector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            cfg: DashboardConfig::default(),
        }
    }

    /// Set the connector history is fetched from. A later call replaces an earlier one.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn BoardConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: DashboardConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Replace the trailing-return windows, keeping their order.
    #[must_use]
    pub fn windows(mut self, windows: Vec<LookbackWindow>) -> Self {
        self.cfg.windows = windows;
        self
    }

    /// Set the timeout applied to the provider history call.
    #[must_use]
    pub fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Build the `Dashboard`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connector was registered via [`with_connector`](Self::with_connector).
    pub fn build(self) -> Result<Dashboard, BoardError> {
        let Some(connector) = self.connector else {
            return Err(BoardError::InvalidArg(
                "no connector registered; add one via with_connector(...)".to_string(),
            ));
        };
        Ok(Dashboard {
            connector,
            cfg: self.cfg,
        })
    }
}

impl Dashboard {
    /// Start building a new `Dashboard`.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use tickerboard::Dashboard;
    /// use tickerboard_mock::MockConnector;
    ///
    /// let board = Dashboard::builder()
    ///     .with_connector(Arc::new(MockConnector::new()))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.cfg
    }

    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tickerboard::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, BoardError>
    where
        Fut: core::future::Future<Output = Result<T, BoardError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(BoardError::provider_timeout(connector_name, capability)))
    }

    /// Fetch `[start, end]` daily history for `ticker` and compute the report.
    ///
    /// Trailing returns are measured from the last bar's date and close.
    ///
    /// # Errors
    /// - `InvalidArg` for a blank ticker or `start > end`.
    /// - `ProviderTimeout` when the connector does not answer within the configured timeout.
    /// - `NotFound` when the provider has no rows for the ticker and range.
    /// - `InsufficientData` when fewer than two bars came back.
    /// - Any connector or data error raised while fetching.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "tickerboard::dashboard",
            skip(self),
            fields(connector = self.connector.name()),
            err,
        )
    )]
    pub async fn load(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<DashboardReport, BoardError> {
        let ticker = ticker.trim();

        let series = Self::provider_call_with_timeout(
            self.connector.name(),
            "history",
            self.cfg.provider_timeout(),
            fetch_series(self.connector.as_ref(), ticker, start, end),
        )
        .await?;

        let Some(last) = series.last() else {
            return Err(BoardError::not_found(format!("history for {ticker}")));
        };
        let (as_of, latest_close) = (last.date, last.close);

        let day_change = compute_day_change(&series)?;
        let returns = compute_trailing_returns(&series, latest_close, &self.cfg.windows, as_of);
        let stats = compute_range_stats(&series)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(bars = series.len(), %as_of, "dashboard report computed");

        Ok(DashboardReport {
            ticker: ticker.to_string(),
            as_of,
            latest_close,
            day_change,
            returns,
            stats,
            series,
        })
    }
}
