//! Application layer: owns chart state and turns host events into repaints.

pub mod chart_widget;

pub use chart_widget::{ChartState, ChartWidget};
