use serde::Deserialize;

use crate::domain::{
    errors::{AppError, InfrastructureError, ValidationError},
    market_data::{Candle, CandleSeries, OHLCV, Price, Timestamp, Volume},
};

/// A JSON number, or a string holding one (exchange APIs quote prices as strings)
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    fn to_f64(&self) -> Option<f64> {
        match self {
            Numeric::Number(value) => Some(*value),
            Numeric::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// DTO for one record row: `[timestamp, open, high, low, close]` with an
/// optional trailing volume.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecordRow {
    WithVolume(Numeric, Numeric, Numeric, Numeric, Numeric, Numeric),
    Ohlc(Numeric, Numeric, Numeric, Numeric, Numeric),
}

impl RecordRow {
    /// Converts the DTO into a domain candle; `index` only labels errors.
    pub fn to_domain_candle(&self, index: usize) -> Result<Candle, ValidationError> {
        let (ts, open, high, low, close, volume) = match self {
            RecordRow::WithVolume(ts, o, h, l, c, v) => (ts, o, h, l, c, Some(v)),
            RecordRow::Ohlc(ts, o, h, l, c) => (ts, o, h, l, c, None),
        };
        let field = |value: &Numeric, name: &str| {
            value.to_f64().filter(|v| v.is_finite()).ok_or_else(|| ValidationError::InvalidRecord {
                index,
                reason: format!("{name} is not a finite number"),
            })
        };

        let timestamp = field(ts, "timestamp")?;
        if timestamp < 0.0 {
            return Err(ValidationError::InvalidRecord { index, reason: "timestamp is negative".to_string() });
        }
        let volume = match volume {
            Some(volume) => field(volume, "volume")?,
            None => 0.0,
        };

        Ok(Candle::new(
            Timestamp::from(timestamp as u64),
            OHLCV::new(
                Price::from(field(open, "open")?),
                Price::from(field(high, "high")?),
                Price::from(field(low, "low")?),
                Price::from(field(close, "close")?),
                Volume::from(volume),
            ),
        ))
    }
}

/// Parse a JSON array of record rows into a validated series.
pub fn parse_candle_series(body: &str) -> Result<CandleSeries, AppError> {
    let rows: Vec<RecordRow> = serde_json::from_str(body)
        .map_err(|e| InfrastructureError::Parse(format!("expected an array of records: {e}")))?;
    let candles = rows
        .iter()
        .enumerate()
        .map(|(index, row)| row.to_domain_candle(index))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CandleSeries::from_candles(candles)?)
}
