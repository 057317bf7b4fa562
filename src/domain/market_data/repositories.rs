use futures::future::LocalBoxFuture;

use super::CandleSeries;
use crate::domain::errors::AppError;

/// Where the chart gets its one-shot series from
pub trait CandleSource {
    /// Human readable location, used in log lines
    fn location(&self) -> &str;

    fn fetch(&self) -> LocalBoxFuture<'_, Result<CandleSeries, AppError>>;
}
