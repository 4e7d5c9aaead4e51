//! Main application module for the interactive scatter chart.
//!
//! Split into focused sub-modules:
//!
//! | Sub-module   | Responsibility |
//! | ------------ | -------------- |
//! | [`update`]   | Per-frame chart rendering, bounds animation, hover tooltip |
//! | [`labels`]   | The clickable axis-dimension label groups |
//! | [`layout`]   | Top bar, file dialogs, and the screenshot handler |
//! | [`run`]      | Top-level [`run_riskplot()`] entry point |

mod labels;
mod layout;
mod run;
mod update;

pub use run::run_riskplot;

use crate::config::RiskPlotConfig;
use crate::data::dataset::{Dataset, DatasetError};
use crate::state::ChartState;

/// The central widget owning the dataset, chart state, and UI flags.
///
/// Wrap it in [`run_riskplot`] for a standalone window, or call
/// [`ScatterPanel::update`] each frame to embed the chart in a parent
/// egui application.
pub struct ScatterPanel {
    /// The loaded record set. Empty when the startup load failed.
    pub dataset: Dataset,
    /// Axis selections and their domain motions.
    pub chart: ChartState,
    /// Chart configuration (canvas, looks, features, color scheme).
    pub config: RiskPlotConfig,
    /// Why the startup load produced no records, for the in-app notice.
    pub load_error: Option<String>,
    /// Set when the user asked for a screenshot; consumed next frame.
    pub(crate) request_window_shot: bool,
    /// Cleared when the color scheme changes so visuals are re-applied.
    pub(crate) scheme_applied: bool,
}

impl ScatterPanel {
    pub fn new(dataset: Dataset, config: RiskPlotConfig) -> Self {
        let chart = ChartState::new(&dataset);
        Self {
            dataset,
            chart,
            config,
            load_error: None,
            request_window_shot: false,
            scheme_applied: false,
        }
    }

    /// Build the panel from a load result, capturing the failure (if any)
    /// for the in-app notice.
    pub fn from_load(result: Result<Dataset, DatasetError>, config: RiskPlotConfig) -> Self {
        match result {
            Ok(dataset) => Self::new(dataset, config),
            Err(e) => {
                let mut panel = Self::new(Dataset::default(), config);
                panel.load_error = Some(e.to_string());
                panel
            }
        }
    }
}
