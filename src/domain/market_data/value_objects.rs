use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Value Object - Price
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Display, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - Volume
#[derive(Debug, Clone, Copy, PartialEq, Default, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Volume(f64);

impl Volume {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - Timestamp, as delivered by the data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Value Object - OHLCV data
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct OHLCV {
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    pub volume: Volume,
}

impl OHLCV {
    /// Describe the first broken OHLC invariant, if any.
    pub fn violation(&self) -> Option<&'static str> {
        let fields = [self.open, self.high, self.low, self.close];
        if fields.iter().any(|p| !p.value().is_finite()) || !self.volume.value().is_finite() {
            return Some("non-finite value");
        }
        if self.low > self.high {
            return Some("low is above high");
        }
        if self.open > self.high || self.close > self.high {
            return Some("open or close is above high");
        }
        if self.open < self.low || self.close < self.low {
            return Some("open or close is below low");
        }
        if self.volume.value() < 0.0 {
            return Some("negative volume");
        }
        None
    }

    pub fn is_valid(&self) -> bool {
        self.violation().is_none()
    }
}
