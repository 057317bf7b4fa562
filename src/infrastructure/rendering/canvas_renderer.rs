use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Path2d};

use super::surface::ChartSurface;
use crate::domain::{
    chart::{ChartPalette, Crosshair, PixelRect, SurfaceSize},
    errors::{InfrastructureError, RenderingError, RenderingResult},
};
use crate::infrastructure::describe_js;

/// Canvas 2D implementation of [`ChartSurface`]
#[derive(Clone)]
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Create a detached canvas with the given inline style.
    pub fn create(document: &Document, css: &str) -> Result<Self, InfrastructureError> {
        let canvas = document
            .create_element("canvas")
            .map_err(|e| InfrastructureError::BrowserApi(describe_js(&e)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| RenderingError::CanvasAccessFailed("element is not a canvas".to_string()))?;
        canvas.style().set_css_text(css);
        Self::from_canvas(canvas)
    }

    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self, InfrastructureError> {
        let context = canvas
            .get_context("2d")
            .map_err(|e| RenderingError::CanvasAccessFailed(describe_js(&e)))?
            .ok_or_else(|| RenderingError::CanvasAccessFailed("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RenderingError::CanvasAccessFailed("not a 2d context".to_string()))?;
        Ok(Self { canvas, context })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl ChartSurface for CanvasSurface {
    fn resize(&self, size: &SurfaceSize) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
    }

    fn clear(&self) {
        let (width, height) = (self.canvas.width() as f64, self.canvas.height() as f64);
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_rects(&self, color: &str, rects: &[PixelRect]) -> RenderingResult<()> {
        if rects.is_empty() {
            return Ok(());
        }
        let path = Path2d::new().map_err(|e| RenderingError::PathFailed(describe_js(&e)))?;
        for rect in rects {
            path.rect(rect.x, rect.y, rect.width, rect.height);
        }
        self.context.set_fill_style_str(color);
        self.context.fill_with_path_2d(&path);
        Ok(())
    }

    fn stroke_crosshair(
        &self,
        crosshair: &Crosshair,
        size: &SurfaceSize,
        palette: &ChartPalette,
    ) -> RenderingResult<()> {
        let [dash, gap] = palette.crosshair_dash;
        let pattern = Array::of2(&JsValue::from_f64(dash), &JsValue::from_f64(gap));
        self.context
            .set_line_dash(&pattern)
            .map_err(|e| RenderingError::PathFailed(describe_js(&e)))?;

        self.context.begin_path();
        self.context.move_to(crosshair.x, 0.0);
        self.context.line_to(crosshair.x, size.height_px());
        self.context.move_to(0.0, crosshair.y);
        self.context.line_to(size.width_px(), crosshair.y);
        self.context.set_stroke_style_str(&palette.crosshair);
        self.context.stroke();
        Ok(())
    }
}
