use std::path::Path;

use tickerboard_core::{BoardError, DashboardConfig};

/// Parse a [`DashboardConfig`] from TOML text. Missing keys keep their defaults.
///
/// # Errors
/// Returns `InvalidArg` when the text is not valid TOML for the configuration,
/// or when it leaves the dashboard without any lookback window.
pub fn parse_config(text: &str) -> Result<DashboardConfig, BoardError> {
    let cfg: DashboardConfig =
        toml::from_str(text).map_err(|e| BoardError::InvalidArg(format!("config: {e}")))?;
    validate(&cfg)?;
    Ok(cfg)
}

/// Read and parse a TOML configuration file.
///
/// # Errors
/// Returns `InvalidArg` if the file cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<DashboardConfig, BoardError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| BoardError::InvalidArg(format!("config {}: {e}", path.display())))?;
    parse_config(&text)
}

fn validate(cfg: &DashboardConfig) -> Result<(), BoardError> {
    if cfg.windows.is_empty() {
        return Err(BoardError::InvalidArg(
            "config: at least one lookback window is required".to_string(),
        ));
    }
    if cfg.provider_timeout_ms == 0 {
        return Err(BoardError::InvalidArg(
            "config: provider_timeout_ms must be positive".to_string(),
        ));
    }
    Ok(())
}
