use futures::future::{FutureExt, LocalBoxFuture};
use gloo::net::http::Request;

use super::dto::parse_candle_series;
use crate::domain::{
    errors::{AppError, NetworkError},
    logging::LogComponent,
    market_data::{CandleSeries, CandleSource},
};
use crate::log_info;

const COMPONENT: LogComponent = LogComponent::Infrastructure("HttpCandleSource");

/// Loads the whole series with a single GET of a static JSON file
#[derive(Debug, Clone)]
pub struct HttpCandleSource {
    url: String,
}

impl HttpCandleSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn get_candles(&self) -> Result<CandleSeries, AppError> {
        log_info!(COMPONENT, "📡 Fetching candles from {}", self.url);

        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| NetworkError::HttpRequestFailed(format!("{}: {e}", self.url)))?;

        if !response.ok() {
            return Err(NetworkError::HttpStatus {
                status: response.status(),
                status_text: response.status_text(),
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| NetworkError::HttpRequestFailed(format!("failed to read body: {e}")))?;

        let series = parse_candle_series(&body)?;
        log_info!(COMPONENT, "✅ Loaded {} candles", series.len());
        Ok(series)
    }
}

impl CandleSource for HttpCandleSource {
    fn location(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> LocalBoxFuture<'_, Result<CandleSeries, AppError>> {
        self.get_candles().boxed_local()
    }
}
