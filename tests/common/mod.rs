//! Fakes shared by the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use candlestick_chart::domain::{
    chart::{ChartPalette, Crosshair, PixelRect, SurfaceSize},
    errors::RenderingResult,
    market_data::{Candle, CandleSeries, OHLCV, Price, Timestamp, Volume},
};
use candlestick_chart::infrastructure::rendering::{ChartSurface, RedrawTask, TickSource};

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Resize(u32, u32),
    Clear,
    Fill { color: String, rects: Vec<PixelRect> },
    Crosshair { x: f64, y: f64 },
}

/// Surface that records every call instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: RefCell<Vec<SurfaceOp>>,
}

impl RecordingSurface {
    pub fn ops(&self) -> Vec<SurfaceOp> {
        self.ops.borrow().clone()
    }

    pub fn take_ops(&self) -> Vec<SurfaceOp> {
        self.ops.borrow_mut().drain(..).collect()
    }

    pub fn fills(&self) -> Vec<(String, usize)> {
        self.ops
            .borrow()
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Fill { color, rects } => Some((color.clone(), rects.len())),
                _ => None,
            })
            .collect()
    }
}

impl ChartSurface for RecordingSurface {
    fn resize(&self, size: &SurfaceSize) {
        self.ops.borrow_mut().push(SurfaceOp::Resize(size.width, size.height));
    }

    fn clear(&self) {
        self.ops.borrow_mut().push(SurfaceOp::Clear);
    }

    fn fill_rects(&self, color: &str, rects: &[PixelRect]) -> RenderingResult<()> {
        if !rects.is_empty() {
            self.ops
                .borrow_mut()
                .push(SurfaceOp::Fill { color: color.to_string(), rects: rects.to_vec() });
        }
        Ok(())
    }

    fn stroke_crosshair(
        &self,
        crosshair: &Crosshair,
        _size: &SurfaceSize,
        _palette: &ChartPalette,
    ) -> RenderingResult<()> {
        self.ops.borrow_mut().push(SurfaceOp::Crosshair { x: crosshair.x, y: crosshair.y });
        Ok(())
    }
}

/// Tick source fired by hand; clones share one queue.
#[derive(Default, Clone)]
pub struct ManualTicks {
    queued: Rc<RefCell<Vec<RedrawTask>>>,
}

impl ManualTicks {
    pub fn pending(&self) -> usize {
        self.queued.borrow().len()
    }

    pub fn fire(&self) {
        let due: Vec<RedrawTask> = self.queued.borrow_mut().drain(..).collect();
        for callback in due {
            callback();
        }
    }
}

impl TickSource for ManualTicks {
    fn request_tick(&self, callback: RedrawTask) {
        self.queued.borrow_mut().push(callback);
    }
}

pub fn candle(ts: u64, open: f64, high: f64, low: f64, close: f64) -> Candle {
    Candle::new(
        Timestamp::from(ts),
        OHLCV::new(Price::from(open), Price::from(high), Price::from(low), Price::from(close), Volume::from(1.0)),
    )
}

/// `len` candles alternating up and down around 100, one per minute.
pub fn zigzag_series(len: usize) -> CandleSeries {
    let candles = (0..len)
        .map(|i| {
            let base = 100.0 + (i % 7) as f64;
            if i % 2 == 0 {
                candle(i as u64 * 60_000, base, base + 3.0, base - 2.0, base + 1.0)
            } else {
                candle(i as u64 * 60_000, base + 1.0, base + 2.0, base - 3.0, base)
            }
        })
        .collect();
    CandleSeries::from_candles(candles).unwrap()
}

pub fn flat_series(len: usize, price: f64) -> CandleSeries {
    let candles = (0..len).map(|i| candle(i as u64, price, price, price, price)).collect();
    CandleSeries::from_candles(candles).unwrap()
}
