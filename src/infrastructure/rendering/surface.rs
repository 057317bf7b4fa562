//! Drawing surface abstraction and the two paint routines that use it.

use crate::domain::{
    chart::{CandleBatch, ChartPalette, Crosshair, PixelRect, SurfaceSize},
    errors::RenderingResult,
};

/// One 2D drawing surface (a canvas in the browser).
pub trait ChartSurface {
    /// Set the backing store size; this also wipes the surface.
    fn resize(&self, size: &SurfaceSize);

    fn clear(&self);

    /// Fill all `rects` as a single path. An empty slice issues no path operation.
    fn fill_rects(&self, color: &str, rects: &[PixelRect]) -> RenderingResult<()>;

    /// Stroke a dashed vertical line at `crosshair.x` and horizontal line at `crosshair.y`.
    fn stroke_crosshair(
        &self,
        crosshair: &Crosshair,
        size: &SurfaceSize,
        palette: &ChartPalette,
    ) -> RenderingResult<()>;
}

/// Clear the chart surface and fill wicks, up bodies and down bodies.
pub fn paint_candles<S: ChartSurface + ?Sized>(
    surface: &S,
    batch: &CandleBatch,
    palette: &ChartPalette,
) -> RenderingResult<()> {
    surface.clear();
    surface.fill_rects(&palette.wick, &batch.wicks)?;
    surface.fill_rects(&palette.up_candle, &batch.up_bodies)?;
    surface.fill_rects(&palette.down_candle, &batch.down_bodies)
}

/// Clear the overlay and stroke the crosshair when there is one.
pub fn paint_crosshair<S: ChartSurface + ?Sized>(
    surface: &S,
    crosshair: Option<&Crosshair>,
    size: &SurfaceSize,
    palette: &ChartPalette,
) -> RenderingResult<()> {
    surface.clear();
    match crosshair {
        Some(crosshair) => surface.stroke_crosshair(crosshair, size, palette),
        None => Ok(()),
    }
}
