//! RiskPlot crate root: re-exports and module wiring.
//!
//! An interactive scatter-plot explorer for state health-risk survey data,
//! built on egui/eframe with egui_plot doing the axis/transform work.
//!
//! Module map:
//! - `data`: record set, CSV loading, dimension enums, snapshot export
//! - `scale`: linear data→pixel scales and transition easing
//! - `state`: chart state, events, and the axis-transition machine
//! - `tooltip`: tooltip text construction
//! - `app`: the egui panel, label controls, top bar, and run entry point
//! - `config` / `color_scheme`: chart configuration and theming

pub mod app;
pub mod color_scheme;
pub mod config;
pub mod data;
pub mod scale;
pub mod state;
pub mod tooltip;

// Public re-exports for a compact external API
pub use app::{run_riskplot, ScatterPanel};
pub use color_scheme::ColorScheme;
pub use config::{CanvasSpec, FeatureFlags, Margin, RiskPlotConfig};
pub use data::dataset::{Dataset, DatasetError, Record};
pub use data::dimension::{XDimension, YDimension};
pub use scale::LinearScale;
pub use state::{AxisMotion, ChartEvent, ChartState, TRANSITION_SECS};
pub use tooltip::tooltip_lines;
