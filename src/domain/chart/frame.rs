//! Per-candle pixel geometry for one repaint of the chart surface.

use serde::Serialize;

use super::value_objects::{CandleDirection, PixelRect, SurfaceSize};
use super::viewport::ViewportState;
use super::window::VisibleWindow;
use crate::domain::errors::FrameError;
use crate::domain::market_data::{Candle, CandleSeries};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandleGeometry {
    pub index: usize,
    pub direction: CandleDirection,
    pub wick: PixelRect,
    pub body: PixelRect,
}

/// Everything the renderer needs to paint the chart surface once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFrame {
    pub window: VisibleWindow,
    pub min_low: f64,
    pub max_high: f64,
    /// Pixels per price unit
    pub y_scale: f64,
    pub candles: Vec<CandleGeometry>,
}

impl ChartFrame {
    /// Resolve the visible window and lay out its candles.
    ///
    /// Fails instead of producing non-finite geometry: an empty series or
    /// window, a flat price range and an unsized surface all mean the
    /// surface stays blank.
    pub fn resolve(
        viewport: &ViewportState,
        series: &CandleSeries,
        size: &SurfaceSize,
    ) -> Result<Self, FrameError> {
        if !size.is_drawable() {
            return Err(FrameError::SurfaceNotReady);
        }
        let window = VisibleWindow::resolve(viewport, series.len(), size.width_px())
            .ok_or(FrameError::EmptySeries)?;
        let (min_low, max_high) =
            series.price_range(window.range()).ok_or(FrameError::EmptyWindow)?;
        let (min_low, max_high) = (min_low.value(), max_high.value());

        let y_scale = size.height_px() / (max_high - min_low);
        if max_high <= min_low || !y_scale.is_finite() {
            return Err(FrameError::DegenerateRange { price: max_high });
        }

        let candles = series.candles()[window.range()]
            .iter()
            .zip(window.range())
            .map(|(candle, index)| layout_candle(viewport, candle, index, max_high, y_scale))
            .collect();

        Ok(Self { window, min_low, max_high, y_scale, candles })
    }
}

fn layout_candle(
    viewport: &ViewportState,
    candle: &Candle,
    index: usize,
    max_high: f64,
    y_scale: f64,
) -> CandleGeometry {
    let column = viewport.pitch() * index as f64 + viewport.candle_margin as f64;
    let candle_width = viewport.candle_width as f64;
    let wick_width = viewport.wick_width as f64;
    let to_y = |price: f64| ((max_high - price) * y_scale).round();

    let wick = PixelRect::new(
        (column + candle_width / 2.0 - wick_width / 2.0).round() - viewport.scroll_offset,
        to_y(candle.ohlcv.high.value()),
        wick_width,
        (candle.wick_size() * y_scale).round(),
    );
    let body = PixelRect::new(
        column.round() - viewport.scroll_offset,
        to_y(candle.body_top()),
        candle_width,
        (candle.body_size() * y_scale).round(),
    );
    let direction = if candle.is_bullish() { CandleDirection::Up } else { CandleDirection::Down };

    CandleGeometry { index, direction, wick, body }
}

/// Frame rectangles grouped into the three paths the renderer fills.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CandleBatch {
    pub wicks: Vec<PixelRect>,
    pub up_bodies: Vec<PixelRect>,
    pub down_bodies: Vec<PixelRect>,
}

impl CandleBatch {
    pub fn from_frame(frame: &ChartFrame) -> Self {
        let mut batch = Self {
            wicks: Vec::with_capacity(frame.candles.len()),
            ..Self::default()
        };
        for candle in &frame.candles {
            batch.wicks.push(candle.wick);
            match candle.direction {
                CandleDirection::Up => batch.up_bodies.push(candle.body),
                CandleDirection::Down => batch.down_bodies.push(candle.body),
            }
        }
        batch
    }

    pub fn is_empty(&self) -> bool {
        self.wicks.is_empty() && self.up_bodies.is_empty() && self.down_bodies.is_empty()
    }
}
