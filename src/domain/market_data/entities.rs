pub use super::value_objects::{OHLCV, Price, Timestamp, Volume};
use crate::domain::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::sync::Arc;

/// Domain entity - Candle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: Timestamp,
    pub ohlcv: OHLCV,
}

impl Candle {
    pub fn new(timestamp: Timestamp, ohlcv: OHLCV) -> Self {
        Self { timestamp, ohlcv }
    }

    /// Up candles close above their open; flat candles count as down.
    pub fn is_bullish(&self) -> bool {
        self.ohlcv.open < self.ohlcv.close
    }

    pub fn body_top(&self) -> f64 {
        self.ohlcv.open.value().max(self.ohlcv.close.value())
    }

    pub fn body_size(&self) -> f64 {
        (self.ohlcv.open.value() - self.ohlcv.close.value()).abs()
    }

    pub fn wick_size(&self) -> f64 {
        self.ohlcv.high.value() - self.ohlcv.low.value()
    }
}

/// Domain entity - the loaded, read-only candle series
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CandleSeries {
    candles: Arc<[Candle]>,
}

impl CandleSeries {
    /// Validate every record and the time ordering before accepting the series.
    pub fn from_candles(candles: Vec<Candle>) -> Result<Self, ValidationError> {
        for (index, candle) in candles.iter().enumerate() {
            if let Some(reason) = candle.ohlcv.violation() {
                return Err(ValidationError::InvalidRecord { index, reason: reason.to_string() });
            }
        }
        if let Some(index) = candles
            .windows(2)
            .position(|pair| pair[1].timestamp < pair[0].timestamp)
        {
            return Err(ValidationError::OutOfOrder { index: index + 1 });
        }
        Ok(Self { candles: candles.into() })
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Candle> {
        self.candles.get(index)
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn latest(&self) -> Option<&Candle> {
        self.candles.last()
    }

    /// Lowest low and highest high over `range`, or `None` when it selects nothing.
    pub fn price_range(&self, range: Range<usize>) -> Option<(Price, Price)> {
        let slice = self.candles.get(range)?;
        let first = slice.first()?;
        let init = (first.ohlcv.low, first.ohlcv.high);
        Some(slice.iter().fold(init, |(min_low, max_high), candle| {
            let low = if candle.ohlcv.low < min_low { candle.ohlcv.low } else { min_low };
            let high = if candle.ohlcv.high > max_high { candle.ohlcv.high } else { max_high };
            (low, high)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(ts: u64, low: f64, high: f64) -> Candle {
        Candle::new(
            Timestamp::from(ts),
            OHLCV::new(low.into(), high.into(), low.into(), high.into(), Volume::default()),
        )
    }

    #[test]
    fn price_range_spans_requested_slice_only() {
        let series =
            CandleSeries::from_candles(vec![candle(1, 1.0, 2.0), candle(2, 5.0, 9.0), candle(3, 0.5, 3.0)])
                .unwrap();
        let (low, high) = series.price_range(0..2).unwrap();
        assert_eq!((low.value(), high.value()), (1.0, 9.0));
        assert!(series.price_range(1..1).is_none());
        assert!(series.price_range(2..7).is_none());
    }

    #[test]
    fn out_of_order_series_is_rejected() {
        let err = CandleSeries::from_candles(vec![candle(5, 1.0, 2.0), candle(4, 1.0, 2.0)]).unwrap_err();
        assert_eq!(err, ValidationError::OutOfOrder { index: 1 });
    }

    #[test]
    fn flat_candle_counts_as_down() {
        assert!(!candle(1, 2.0, 2.0).is_bullish());
        assert!(candle(1, 1.0, 2.0).is_bullish());
    }
}
