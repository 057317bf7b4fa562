use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    domain::{
        chart::{
            CandleBatch, ChartConfig, ChartFrame, Crosshair, DevicePoint, SurfaceSize, ViewportState,
            VisibleWindow, WheelContext, WheelDelta, apply_wheel,
        },
        errors::{AppError, FrameError},
        logging::LogComponent,
        market_data::{CandleSeries, CandleSource},
    },
    infrastructure::rendering::{ChartSurface, RedrawScheduler, TickSource, paint_candles, paint_crosshair},
    log_debug, log_error, log_info, log_trace, log_warn,
};

const COMPONENT: LogComponent = LogComponent::Application("ChartWidget");

/// Everything the widget knows; repaint tasks read it when their frame runs.
#[derive(Debug, Clone)]
pub struct ChartState {
    pub config: ChartConfig,
    pub series: Option<CandleSeries>,
    /// Created once both the series and a surface size are known
    pub viewport: Option<ViewportState>,
    pub size: Option<SurfaceSize>,
    pub crosshair: Option<Crosshair>,
}

impl ChartState {
    pub fn new(config: ChartConfig) -> Self {
        Self { config, series: None, viewport: None, size: None, crosshair: None }
    }

    pub fn frame(&self) -> Result<ChartFrame, FrameError> {
        let size = self.size.as_ref().ok_or(FrameError::SurfaceNotReady)?;
        let series = self.series.as_ref().ok_or(FrameError::EmptySeries)?;
        let viewport = self.viewport.as_ref().ok_or(FrameError::EmptySeries)?;
        ChartFrame::resolve(viewport, series, size)
    }

    pub fn visible_window(&self) -> Option<VisibleWindow> {
        let (viewport, series, size) = (self.viewport?, self.series.as_ref()?, self.size?);
        VisibleWindow::resolve(&viewport, series.len(), size.width_px())
    }

    fn series_len(&self) -> usize {
        self.series.as_ref().map_or(0, CandleSeries::len)
    }

    /// Create the viewport on first opportunity, or pull it back inside the
    /// scroll bounds after the canvas changed width.
    fn settle_viewport(&mut self) {
        let (Some(size), Some(series)) = (self.size, self.series.as_ref()) else {
            return;
        };
        let width = size.width_px();
        self.viewport = Some(match self.viewport {
            Some(viewport) => viewport.clamp_scroll(series.len(), width),
            None => ViewportState::initial(&self.config, series.len(), width),
        });
    }
}

/// The candlestick chart: reacts to data, resize and pointer events and
/// repaints each surface at most once per frame.
pub struct ChartWidget<S: ChartSurface + 'static, T: TickSource> {
    state: Rc<RefCell<ChartState>>,
    chart_surface: Rc<S>,
    crosshair_surface: Rc<S>,
    chart_redraw: RedrawScheduler<T>,
    crosshair_redraw: RedrawScheduler<T>,
}

impl<S: ChartSurface + 'static, T: TickSource> ChartWidget<S, T> {
    pub fn new(
        config: ChartConfig,
        chart_surface: S,
        crosshair_surface: S,
        chart_ticks: T,
        crosshair_ticks: T,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(ChartState::new(config))),
            chart_surface: Rc::new(chart_surface),
            crosshair_surface: Rc::new(crosshair_surface),
            chart_redraw: RedrawScheduler::new(chart_ticks),
            crosshair_redraw: RedrawScheduler::new(crosshair_ticks),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ChartState {
        self.state.borrow().clone()
    }

    pub fn config(&self) -> ChartConfig {
        self.state.borrow().config.clone()
    }

    pub fn viewport(&self) -> Option<ViewportState> {
        self.state.borrow().viewport
    }

    pub fn crosshair(&self) -> Option<Crosshair> {
        self.state.borrow().crosshair
    }

    pub fn visible_window(&self) -> Option<VisibleWindow> {
        self.state.borrow().visible_window()
    }

    pub fn candle_count(&self) -> usize {
        self.state.borrow().series_len()
    }

    pub fn chart_surface(&self) -> &S {
        &self.chart_surface
    }

    pub fn crosshair_surface(&self) -> &S {
        &self.crosshair_surface
    }

    pub fn chart_redraw(&self) -> &RedrawScheduler<T> {
        &self.chart_redraw
    }

    pub fn crosshair_redraw(&self) -> &RedrawScheduler<T> {
        &self.crosshair_redraw
    }

    /// Fetch the series from `source` and show it. Failures are logged and
    /// returned; the current series, if any, stays on screen.
    pub async fn load(&self, source: &dyn CandleSource) -> Result<usize, AppError> {
        match source.fetch().await {
            Ok(series) => {
                let count = series.len();
                if count == 0 {
                    log_warn!(COMPONENT, "⚠️ {} holds no candles", source.location());
                }
                self.set_series(series);
                log_info!(COMPONENT, "📊 Showing {count} candles from {}", source.location());
                Ok(count)
            }
            Err(error) => {
                log_error!(COMPONENT, "❌ Loading {} failed: {error}", source.location());
                Err(error)
            }
        }
    }

    /// Replace the series and reset the viewport to show its newest candles.
    pub fn set_series(&self, series: CandleSeries) {
        {
            let mut state = self.state.borrow_mut();
            state.series = Some(series);
            state.viewport = None;
            state.settle_viewport();
        }
        self.request_chart_redraw();
    }

    /// Apply a new surface size; `None` means the host has no area yet.
    pub fn resize(&self, size: Option<SurfaceSize>) {
        {
            let mut state = self.state.borrow_mut();
            state.size = size;
            if let Some(size) = &size {
                self.chart_surface.resize(size);
                self.crosshair_surface.resize(size);
            }
            state.settle_viewport();
        }
        log_debug!(COMPONENT, "Surface resized to {:?}", size);
        self.request_chart_redraw();
        self.request_crosshair_redraw();
    }

    /// Scroll and zoom. Returns whether the viewport changed.
    pub fn wheel(&self, delta: WheelDelta) -> bool {
        let changed = {
            let mut state = self.state.borrow_mut();
            let (Some(viewport), Some(size)) = (state.viewport, state.size) else {
                return false;
            };
            let context = WheelContext { series_len: state.series_len(), canvas_width: size.width_px() };
            let next = apply_wheel(&viewport, delta, &state.config, context);
            state.viewport = Some(next);
            next != viewport
        };
        if changed {
            log_trace!(COMPONENT, "Wheel {:?} -> {:?}", delta, self.viewport());
            self.request_chart_redraw();
        }
        changed
    }

    /// Move the crosshair to a pointer position given in CSS pixels.
    pub fn pointer_move(&self, offset_x: f64, offset_y: f64) {
        {
            let mut state = self.state.borrow_mut();
            let Some(size) = state.size else {
                return;
            };
            // Before any data arrives the column grid still follows the configured widths.
            let viewport = state.viewport.unwrap_or_else(|| ViewportState::new(&state.config));
            let pointer = DevicePoint::from_css(offset_x, offset_y, &size);
            state.crosshair = Some(Crosshair::at(&viewport, pointer));
        }
        self.request_crosshair_redraw();
    }

    /// Hide the crosshair; the chart surface is left alone.
    pub fn pointer_leave(&self) {
        self.state.borrow_mut().crosshair = None;
        self.request_crosshair_redraw();
    }

    pub fn request_chart_redraw(&self) {
        let state = Rc::clone(&self.state);
        let surface = Rc::clone(&self.chart_surface);
        self.chart_redraw.schedule(move || paint_chart_surface(&state.borrow(), surface.as_ref()));
    }

    fn request_crosshair_redraw(&self) {
        let state = Rc::clone(&self.state);
        let surface = Rc::clone(&self.crosshair_surface);
        self.crosshair_redraw
            .schedule(move || paint_crosshair_surface(&state.borrow(), surface.as_ref()));
    }
}

fn paint_chart_surface<S: ChartSurface + ?Sized>(state: &ChartState, surface: &S) {
    match state.frame() {
        Ok(frame) => {
            let batch = CandleBatch::from_frame(&frame);
            if let Err(error) = paint_candles(surface, &batch, &state.config.palette) {
                log_error!(COMPONENT, "Chart paint failed: {error}");
            }
        }
        Err(FrameError::SurfaceNotReady) => {
            log_debug!(COMPONENT, "Skipping chart paint: {}", FrameError::SurfaceNotReady);
        }
        Err(reason) => {
            surface.clear();
            log_debug!(COMPONENT, "Nothing to draw: {}", reason);
        }
    }
}

fn paint_crosshair_surface<S: ChartSurface + ?Sized>(state: &ChartState, surface: &S) {
    let Some(size) = state.size else {
        return;
    };
    if let Err(error) = paint_crosshair(surface, state.crosshair.as_ref(), &size, &state.config.palette) {
        log_error!(COMPONENT, "Crosshair paint failed: {error}");
    }
}
