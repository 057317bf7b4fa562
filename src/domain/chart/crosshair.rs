use super::value_objects::DevicePoint;
use super::viewport::ViewportState;

/// Crosshair snapped to the hovered column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crosshair {
    /// Column under the pointer; may lie outside the series
    pub column_index: i64,
    /// Centre of that column's candle body
    pub x: f64,
    /// Pointer y rounded to the nearest half pixel
    pub y: f64,
}

impl Crosshair {
    pub fn at(viewport: &ViewportState, pointer: DevicePoint) -> Self {
        let column_index = ((pointer.x + viewport.scroll_offset) / viewport.pitch()).floor() as i64;
        Self {
            column_index,
            x: viewport.column_center(column_index),
            y: (pointer.y / 0.5).round() * 0.5,
        }
    }

    /// Index of the hovered record, if the column holds one.
    pub fn record_index(&self, series_len: usize) -> Option<usize> {
        usize::try_from(self.column_index).ok().filter(|index| *index < series_len)
    }
}
