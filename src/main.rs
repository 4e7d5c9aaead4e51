//! riskplot binary: load a survey CSV and open the interactive scatter chart.
//!
//! Usage:
//!   riskplot [path/to/data.csv]
//!
//! Defaults to the bundled dataset. `RUST_LOG` controls log verbosity.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use riskplot::{run_riskplot, Dataset, RiskPlotConfig};

const DEFAULT_DATA_PATH: &str = "assets/data/data.csv";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse simple CLI args: an optional dataset path.
    let mut csv_path: Option<PathBuf> = None;
    for arg in std::env::args().skip(1) {
        if csv_path.is_none() {
            csv_path = Some(PathBuf::from(arg));
        }
    }
    let path = csv_path.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

    let dataset = Dataset::load_csv(&path);
    match &dataset {
        Ok(d) => tracing::info!(records = d.len(), path = %path.display(), "dataset loaded"),
        Err(e) => {
            tracing::warn!(error = %e, path = %path.display(), "dataset load failed; opening empty chart")
        }
    }

    run_riskplot(dataset, RiskPlotConfig::default())
}
