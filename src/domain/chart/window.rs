use serde::Serialize;
use std::ops::Range;

use super::viewport::ViewportState;

/// Index range of the series whose columns intersect the canvas.
///
/// Both indices are clamped to `[0, len - 1]`; the records drawn are the
/// half-open range `start_index..end_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleWindow {
    pub start_index: usize,
    pub end_index: usize,
}

impl VisibleWindow {
    /// `None` for an empty series, which has no valid index to clamp to.
    pub fn resolve(viewport: &ViewportState, series_len: usize, canvas_width: f64) -> Option<Self> {
        let last = series_len.checked_sub(1)? as f64;
        let pitch = viewport.pitch();
        // clamp keeps NaN, and the cast below turns it into 0
        let column = |x: f64| (x / pitch).floor().clamp(0.0, last) as usize;
        let start_index = column(viewport.scroll_offset);
        let end_index = column(viewport.scroll_offset + canvas_width.max(0.0)).max(start_index);
        Some(Self { start_index, end_index })
    }

    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    pub fn is_empty(&self) -> bool {
        self.start_index == self.end_index
    }
}
