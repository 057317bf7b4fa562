use super::config::ChartConfig;

/// Horizontal scroll and candle geometry of the chart.
///
/// A value type: gesture handlers build a new snapshot instead of mutating
/// the current one, and the resolver and renderer only ever read it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    /// Pixel distance between the first column and the canvas left edge
    pub scroll_offset: f64,
    pub scale_multiplier: f64,
    pub candle_width: u32,
    pub candle_margin: u32,
    pub wick_width: u32,
}

impl ViewportState {
    /// Unscrolled state at zoom 1.0.
    pub fn new(config: &ChartConfig) -> Self {
        let geometry = ZoomGeometry::for_multiplier(config, 1.0);
        Self {
            scroll_offset: 0.0,
            scale_multiplier: 1.0,
            candle_width: geometry.candle_width,
            candle_margin: geometry.candle_margin,
            wick_width: geometry.wick_width,
        }
    }

    /// State right after loading: the newest candles fill `initial_view_ratio`
    /// of the canvas and the rest stays empty on the right.
    pub fn initial(config: &ChartConfig, series_len: usize, canvas_width: f64) -> Self {
        let state = Self::new(config);
        let total = state.pitch() * series_len as f64;
        let offset = total - (canvas_width * config.initial_view_ratio).floor();
        Self { scroll_offset: offset.max(-canvas_width), ..state }
    }

    /// Horizontal span of one candle including both margins, at least one pixel.
    pub fn pitch(&self) -> f64 {
        (self.candle_width as f64 + 2.0 * self.candle_margin as f64).max(1.0)
    }

    /// Allowed `scroll_offset` range: one canvas of blank space before the
    /// first candle up to the end of the last one.
    pub fn scroll_bounds(&self, series_len: usize, canvas_width: f64) -> (f64, f64) {
        (-canvas_width, self.pitch() * series_len as f64)
    }

    pub fn clamp_scroll(self, series_len: usize, canvas_width: f64) -> Self {
        let (min, max) = self.scroll_bounds(series_len, canvas_width);
        Self { scroll_offset: self.scroll_offset.max(min).min(max), ..self }
    }

    /// Screen x of the left edge of the candle body at `index`.
    pub fn body_left(&self, index: i64) -> f64 {
        (self.pitch() * index as f64 + self.candle_margin as f64).round() - self.scroll_offset
    }

    /// Screen x of the body centre of the candle at `index`; a half pixel for odd widths.
    pub fn column_center(&self, index: i64) -> f64 {
        self.pitch() * index as f64 + self.candle_margin as f64 + self.candle_width as f64 / 2.0
            - self.scroll_offset
    }
}

/// Candle geometry derived from a zoom multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomGeometry {
    pub candle_width: u32,
    pub candle_margin: u32,
    pub wick_width: u32,
}

impl ZoomGeometry {
    pub fn for_multiplier(config: &ChartConfig, multiplier: f64) -> Self {
        Self {
            candle_width: odd_pixels(config.candle_width as f64 * multiplier),
            candle_margin: whole_pixels(config.candle_margin as f64 * multiplier),
            wick_width: odd_pixels(config.wick_width as f64 * multiplier),
        }
    }

    pub fn pitch(&self) -> f64 {
        self.candle_width as f64 + 2.0 * self.candle_margin as f64
    }
}

fn whole_pixels(value: f64) -> u32 {
    // NaN saturates to 0
    value.round().clamp(0.0, (u32::MAX - 1) as f64) as u32
}

/// Round to whole pixels and bump even results up, so a one pixel column
/// sits exactly in the middle.
pub fn odd_pixels(value: f64) -> u32 {
    let pixels = whole_pixels(value);
    if pixels % 2 == 0 { pixels + 1 } else { pixels }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_pixels_bumps_even_values() {
        assert_eq!(odd_pixels(0.0), 1);
        assert_eq!(odd_pixels(12.6), 13);
        assert_eq!(odd_pixels(26.0), 27);
        assert_eq!(odd_pixels(f64::NAN), 1);
        assert_eq!(odd_pixels(f64::INFINITY) % 2, 1);
    }

    #[test]
    fn default_pitch_is_nineteen() {
        let state = ViewportState::new(&ChartConfig::default());
        assert_eq!(state.pitch(), 19.0);
        assert_eq!(state.body_left(2), 41.0);
        assert_eq!(state.column_center(0), 9.5);
    }

    #[test]
    fn initial_state_shows_newest_candles() {
        let state = ViewportState::initial(&ChartConfig::default(), 3, 800.0);
        assert_eq!(state.scroll_offset, 57.0 - 600.0);
        let state = ViewportState::initial(&ChartConfig::default(), 0, 800.0);
        assert_eq!(state.scroll_offset, -600.0);
        let state = ViewportState::initial(&ChartConfig::default(), 100, 500.0);
        assert_eq!(state.scroll_offset, 1900.0 - 375.0);
    }
}
