//! Configuration types for the dashboard and its lookback windows.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A named offset used to pick a historical reference date for a trailing return.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LookbackWindow {
    /// Label shown in the returns table (e.g. "Last Month").
    pub label: String,
    /// Calendar days subtracted from the as-of date.
    pub offset_days: u32,
}

impl LookbackWindow {
    /// Construct a window from a label and a day offset.
    pub fn new(label: impl Into<String>, offset_days: u32) -> Self {
        Self {
            label: label.into(),
            offset_days,
        }
    }

    /// The standard 1/3/6/12/24 month windows, shortest first.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("Last Month", 30),
            Self::new("Last 3 Months", 90),
            Self::new("Last 6 Months", 180),
            Self::new("Last 12 Months", 365),
            Self::new("Last 24 Months", 730),
        ]
    }
}

/// Global configuration for the `Dashboard`.
///
/// Every field has a default, so a partial TOML file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Ticker used when none is given on the command line.
    pub default_ticker: String,
    /// Days between the default start date and today.
    pub default_lookback_days: u32,
    /// Trailing-return windows in display order.
    pub windows: Vec<LookbackWindow>,
    /// Timeout for the provider history call, in milliseconds.
    pub provider_timeout_ms: u64,
    /// Rows used by the candlestick plot area.
    pub chart_height: u16,
    /// Columns used by the candlestick plot area (excluding the price axis).
    pub chart_width: u16,
    /// Prefix printed before prices (e.g. "R$", "$").
    pub currency_prefix: String,
    /// Emit ANSI colours for rising/falling candles and signed changes.
    pub color: bool,
}

impl DashboardConfig {
    /// Provider timeout as a `Duration`.
    #[must_use]
    pub const fn provider_timeout(&self) -> Duration {
        Duration::from_millis(self.provider_timeout_ms)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_ticker: "PETR4.SA".to_string(),
            default_lookback_days: 800,
            windows: LookbackWindow::defaults(),
            provider_timeout_ms: 10_000,
            chart_height: 20,
            chart_width: 80,
            currency_prefix: "R$".to_string(),
            color: true,
        }
    }
}
