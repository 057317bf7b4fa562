//! Host element plumbing: the two stacked canvases and their measurement.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::describe_js;
use super::rendering::CanvasSurface;
use crate::domain::{
    chart::{SurfaceKind, SurfaceSize},
    errors::InfrastructureError,
};

const CHART_CANVAS_CSS: &str = "width: 100%; height: 100%; cursor: crosshair;";
const CROSSHAIR_CANVAS_CSS: &str =
    "width: 100%; height: 100%; position: absolute; top: 0; left: 0; pointer-events: none;";

/// Chart canvas plus the crosshair overlay stacked on top of it
pub struct HostSurfaces {
    container: HtmlElement,
    pub chart: CanvasSurface,
    pub crosshair: CanvasSurface,
}

impl HostSurfaces {
    pub fn attach(container: HtmlElement) -> Result<Self, InfrastructureError> {
        let document = container
            .owner_document()
            .or_else(|| gloo::utils::window().document())
            .ok_or_else(|| InfrastructureError::BrowserApi("document not available".to_string()))?;

        container
            .style()
            .set_property("position", "relative")
            .map_err(|e| InfrastructureError::BrowserApi(describe_js(&e)))?;

        let chart = CanvasSurface::create(&document, CHART_CANVAS_CSS)?;
        let crosshair = CanvasSurface::create(&document, CROSSHAIR_CANVAS_CSS)?;
        for (kind, surface) in [(SurfaceKind::Chart, &chart), (SurfaceKind::Crosshair, &crosshair)] {
            surface.canvas().set_class_name(&format!("candlestick-{kind}"));
            container
                .append_child(surface.canvas())
                .map_err(|e| InfrastructureError::BrowserApi(describe_js(&e)))?;
        }

        Ok(Self { container, chart, crosshair })
    }

    /// Container content box in device pixels; `None` while it has no area.
    pub fn measure(&self) -> Option<SurfaceSize> {
        let rect = self.container.get_bounding_client_rect();
        let ratio = gloo::utils::window().device_pixel_ratio();
        Some(SurfaceSize::from_css(rect.width(), rect.height(), ratio)).filter(SurfaceSize::is_drawable)
    }

    /// The element pointer listeners attach to.
    pub fn event_target(&self) -> web_sys::EventTarget {
        self.chart.canvas().clone().unchecked_into()
    }

    pub fn detach(&self) {
        self.chart.canvas().remove();
        self.crosshair.canvas().remove();
    }
}
