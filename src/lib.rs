//! doseplot: trajectory charts with dosage-event markers.
//!
//! This crate renders a time series (for example a simulated tumor-burden
//! trajectory) as a 2D line chart overlaid with dashed vertical lines at
//! dosage events, in one of four axis scaling modes, through an explicit
//! renderer handle rather than ambient figure state.

pub mod core;
pub mod error;
pub mod plot;
pub mod render;
pub mod telemetry;

pub use error::{PlotError, PlotResult};
pub use plot::{PlotConfig, PlotSummary, render};
