//! Chart configuration.
//!
//! Every field has a default, so the host only passes what it wants to
//! change. Options arrive from JavaScript as a camelCase object.

use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

pub const DEFAULT_DATA_URL: &str = "data/data.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    pub data_url: String,
    /// Candle body width at zoom 1.0; must be odd
    pub candle_width: u32,
    pub candle_margin: u32,
    /// Wick width at zoom 1.0; must be odd
    pub wick_width: u32,
    /// Pixels scrolled per unit of horizontal wheel delta
    pub scroll_speed: f64,
    /// Zoom multiplier change per unit of vertical wheel delta
    pub zoom_sensitivity: f64,
    /// Share of the canvas width filled by candles after loading
    pub initial_view_ratio: f64,
    pub palette: ChartPalette,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            candle_width: 13,
            candle_margin: 3,
            wick_width: 1,
            scroll_speed: 2.0,
            zoom_sensitivity: 0.001,
            initial_view_ratio: 0.75,
            palette: ChartPalette::default(),
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let invalid = |reason: &str| -> Result<(), ValidationError> {
            Err(ValidationError::InvalidConfig(reason.to_string()))
        };
        if self.data_url.trim().is_empty() {
            return invalid("dataUrl must not be empty");
        }
        if self.candle_width % 2 == 0 {
            return invalid("candleWidth must be an odd number of pixels");
        }
        if self.wick_width % 2 == 0 {
            return invalid("wickWidth must be an odd number of pixels");
        }
        if !self.scroll_speed.is_finite() || self.scroll_speed < 0.0 {
            return invalid("scrollSpeed must be a non-negative number");
        }
        if !self.zoom_sensitivity.is_finite() || self.zoom_sensitivity < 0.0 {
            return invalid("zoomSensitivity must be a non-negative number");
        }
        if !(self.initial_view_ratio > 0.0 && self.initial_view_ratio <= 1.0) {
            return invalid("initialViewRatio must be in (0, 1]");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartPalette {
    pub wick: String,
    pub up_candle: String,
    pub down_candle: String,
    pub crosshair: String,
    /// Dash and gap lengths of the crosshair lines
    pub crosshair_dash: [f64; 2],
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self {
            wick: "#4a4948".to_string(),
            up_candle: "#B8D8BE".to_string(),
            down_candle: "#EE6969".to_string(),
            crosshair: "#4a4948".to_string(),
            crosshair_dash: [5.0, 5.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_options_keep_defaults() {
        let config: ChartConfig =
            serde_json::from_str(r#"{"dataUrl":"prices.json","zoomSensitivity":0.002}"#).unwrap();
        assert_eq!(config.data_url, "prices.json");
        assert_eq!(config.zoom_sensitivity, 0.002);
        assert_eq!(config.candle_width, 13);
        assert_eq!(config.palette, ChartPalette::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn even_widths_are_rejected() {
        let config = ChartConfig { candle_width: 12, ..ChartConfig::default() };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidConfig(_))));
        let config = ChartConfig { wick_width: 0, ..ChartConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn speeds_must_be_non_negative() {
        let config = ChartConfig { scroll_speed: -2.0, ..ChartConfig::default() };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidConfig(_))));
        let config = ChartConfig { scroll_speed: f64::INFINITY, ..ChartConfig::default() };
        assert!(config.validate().is_err());
        let config = ChartConfig { zoom_sensitivity: -0.001, ..ChartConfig::default() };
        assert!(config.validate().is_err());
        let config = ChartConfig { scroll_speed: 0.0, zoom_sensitivity: 0.0, ..ChartConfig::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn view_ratio_must_be_a_share() {
        let config = ChartConfig { initial_view_ratio: 1.5, ..ChartConfig::default() };
        assert!(config.validate().is_err());
        let config = ChartConfig { initial_view_ratio: f64::NAN, ..ChartConfig::default() };
        assert!(config.validate().is_err());
    }
}
