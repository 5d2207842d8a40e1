use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use chrono::{Days, Local, NaiveDate};
use clap::Parser;
use tickerboard::render::{RenderOptions, render_failure, render_report};
use tickerboard::{BoardConnector, BoardError, Dashboard, DashboardConfig, load_config};
use tickerboard_mock::MockConnector;
use tickerboard_yfinance::YfConnector;

#[derive(Parser)]
#[command(version, about = "Stock dashboard with a trailing-return calculator")]
struct Cli {
    /// Ticker symbol (defaults to the configured ticker, PETR4.SA out of the box).
    ticker: Option<String>,
    /// First day of the range, YYYY-MM-DD (defaults to the configured lookback before --end).
    #[arg(long, value_name = "DATE")]
    start: Option<NaiveDate>,
    /// Last day of the range, inclusive, YYYY-MM-DD (defaults to today).
    #[arg(long, value_name = "DATE")]
    end: Option<NaiveDate>,
    /// TOML configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Disable ANSI colours.
    #[arg(long)]
    no_color: bool,
    /// Serve deterministic fixture data instead of calling Yahoo Finance.
    #[arg(long)]
    mock: bool,
}

fn connector(mock: bool, today: NaiveDate) -> Result<Arc<dyn BoardConnector>, BoardError> {
    if mock {
        tracing::info!("using mock connector");
        return Ok(Arc::new(MockConnector::anchored_at(today)));
    }
    Ok(Arc::new(YfConnector::new_default()?))
}

async fn run(cli: Cli) -> Result<(), (String, BoardError)> {
    let mut cfg = match &cli.config {
        Some(path) => load_config(path).map_err(|e| (String::new(), e))?,
        None => DashboardConfig::default(),
    };
    if cli.no_color {
        cfg.color = false;
    }

    let ticker = cli
        .ticker
        .clone()
        .unwrap_or_else(|| cfg.default_ticker.clone());
    let today = Local::now().date_naive();
    let end = cli.end.unwrap_or(today);
    let start = cli.start.unwrap_or_else(|| {
        end.checked_sub_days(Days::new(u64::from(cfg.default_lookback_days)))
            .unwrap_or(end)
    });
    tracing::debug!(%ticker, %start, %end, "loading dashboard");

    let board = connector(cli.mock, end)
        .and_then(|c| Dashboard::builder().with_connector(c).config(cfg).build())
        .map_err(|e| (ticker.clone(), e))?;
    let report = board
        .load(&ticker, start, end)
        .await
        .map_err(|e| (ticker.clone(), e))?;

    println!("{}", render_report(&report, &RenderOptions::from_config(board.config())));
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err((ticker, err)) => {
            tracing::error!(error = %err, "dashboard load failed");
            eprintln!("{}", render_failure(&ticker, &err));
            ExitCode::FAILURE
        }
    }
}
