use serde::Serialize;
use strum::{AsRefStr, Display};

/// Value Object - drawing surface size in device pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
    pub device_pixel_ratio: f64,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32, device_pixel_ratio: f64) -> Self {
        Self { width, height, device_pixel_ratio }
    }

    /// Size a CSS box for the device, truncating like `canvas.width = css * dpr` does.
    pub fn from_css(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        let ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        let scale = |css: f64| (css * ratio).max(0.0) as u32;
        Self::new(scale(css_width), scale(css_height), ratio)
    }

    pub fn width_px(&self) -> f64 {
        self.width as f64
    }

    pub fn height_px(&self) -> f64 {
        self.height as f64
    }

    pub fn is_drawable(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Value Object - whole-pixel rectangle handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// Value Object - pointer position in device pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DevicePoint {
    pub x: f64,
    pub y: f64,
}

impl DevicePoint {
    /// Convert an `offsetX`/`offsetY` pair to device pixels.
    pub fn from_css(offset_x: f64, offset_y: f64, size: &SurfaceSize) -> Self {
        Self { x: offset_x * size.device_pixel_ratio, y: offset_y * size.device_pixel_ratio }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, Serialize)]
#[strum(serialize_all = "lowercase")]
pub enum CandleDirection {
    Up,
    Down,
}

/// The two stacked canvases of a chart; each is repainted independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum SurfaceKind {
    Chart,
    Crosshair,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_size_scales_by_device_pixel_ratio() {
        assert_eq!(SurfaceSize::from_css(400.5, 300.0, 2.0), SurfaceSize::new(801, 600, 2.0));
        assert_eq!(SurfaceSize::from_css(100.0, 50.0, f64::NAN), SurfaceSize::new(100, 50, 1.0));
        assert!(!SurfaceSize::from_css(0.0, 50.0, 1.0).is_drawable());
    }

    #[test]
    fn surface_kinds_name_themselves() {
        assert_eq!(SurfaceKind::Crosshair.as_ref(), "crosshair");
        assert_eq!(CandleDirection::Up.to_string(), "up");
    }
}
