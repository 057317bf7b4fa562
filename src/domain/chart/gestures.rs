//! Wheel gesture math.

use super::config::ChartConfig;
use super::viewport::{ViewportState, ZoomGeometry};
use super::window::VisibleWindow;

/// Raw `deltaX`/`deltaY` of a wheel event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDelta {
    pub delta_x: f64,
    pub delta_y: f64,
}

impl WheelDelta {
    pub fn new(delta_x: f64, delta_y: f64) -> Self {
        Self { delta_x, delta_y }
    }
}

/// Series length and canvas width the gesture is applied against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelContext {
    pub series_len: usize,
    pub canvas_width: f64,
}

/// Apply one wheel event: horizontal delta scrolls, vertical delta zooms.
///
/// After zooming the offset moves by `end_index * (new_pitch - old_pitch)`
/// so the column at the right edge keeps its screen position, then it is
/// clamped to the scroll bounds and rounded to a whole pixel.
pub fn apply_wheel(
    state: &ViewportState,
    delta: WheelDelta,
    config: &ChartConfig,
    context: WheelContext,
) -> ViewportState {
    if !delta.delta_x.is_finite() || !delta.delta_y.is_finite() {
        return *state;
    }

    let scrolled = state.scroll_offset + delta.delta_x * config.scroll_speed;
    let scale_multiplier = (state.scale_multiplier - delta.delta_y * config.zoom_sensitivity).max(0.0);
    let geometry = ZoomGeometry::for_multiplier(config, scale_multiplier);

    let end_index = VisibleWindow::resolve(state, context.series_len, context.canvas_width)
        .map_or(0, |window| window.end_index);
    let anchored = scrolled + end_index as f64 * (geometry.pitch() - state.pitch());

    let next = ViewportState {
        scroll_offset: anchored,
        scale_multiplier,
        candle_width: geometry.candle_width,
        candle_margin: geometry.candle_margin,
        wick_width: geometry.wick_width,
    }
    .clamp_scroll(context.series_len, context.canvas_width);

    ViewportState { scroll_offset: next.scroll_offset.round(), ..next }
}
