//! JavaScript entry point: mounts the chart into a host element and wires
//! browser events to the widget.

use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::format::JsValueSerdeExt;
use js_sys::Promise;
use wasm_bindgen::{JsCast, prelude::*};
use wasm_bindgen_futures::future_to_promise;
use web_sys::{HtmlElement, MouseEvent, WheelEvent};

use crate::{
    application::ChartWidget,
    domain::{
        chart::{ChartConfig, WheelDelta},
        errors::{AppError, ValidationError},
        logging::LogComponent,
    },
    infrastructure::{
        HostSurfaces, HttpCandleSource,
        rendering::{AnimationFrameTicks, CanvasSurface},
    },
    log_info,
};

type BrowserWidget = ChartWidget<CanvasSurface, AnimationFrameTicks>;

const COMPONENT: LogComponent = LogComponent::Presentation("CandleStickChart");

/// Interactive candlestick chart living inside a host element.
///
/// Dropping (or calling `free()` from JavaScript) removes its canvases and
/// listeners.
#[wasm_bindgen]
pub struct CandleStickChart {
    widget: Rc<BrowserWidget>,
    host: Rc<HostSurfaces>,
    source: Rc<HttpCandleSource>,
    _listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl CandleStickChart {
    /// Attach to `container`. `options` is an optional object with
    /// [`ChartConfig`] fields in camelCase.
    ///
    /// The chart stays empty until the host calls `load()`; use `mount` to
    /// attach and fetch in one step.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement, options: JsValue) -> Result<CandleStickChart, JsValue> {
        let config = parse_options(&options)?;
        Ok(Self::attach(container, config)?)
    }

    /// Attach and load in one step; resolves once the data is on screen.
    pub async fn mount(container: HtmlElement, options: JsValue) -> Result<CandleStickChart, JsValue> {
        let chart = Self::new(container, options)?;
        chart.load_series().await?;
        Ok(chart)
    }

    /// Fetch the configured data URL. Resolves with the candle count.
    pub fn load(&self) -> Promise {
        let widget = Rc::clone(&self.widget);
        let source = Rc::clone(&self.source);
        future_to_promise(async move {
            let count = widget.load(source.as_ref()).await?;
            Ok(JsValue::from_f64(count as f64))
        })
    }

    /// Re-measure the host element, e.g. after a layout change that did not
    /// fire a window resize.
    pub fn resize(&self) {
        self.widget.resize(self.host.measure());
    }

    #[wasm_bindgen(getter, js_name = candleCount)]
    pub fn candle_count(&self) -> usize {
        self.widget.candle_count()
    }

    /// `{ startIndex, endIndex }` of the drawn records, or `null` before data.
    #[wasm_bindgen(js_name = visibleRange)]
    pub fn visible_range(&self) -> JsValue {
        self.widget
            .visible_window()
            .and_then(|window| JsValue::from_serde(&window).ok())
            .unwrap_or(JsValue::NULL)
    }
}

impl CandleStickChart {
    /// Rust-side constructor with an already-built config.
    pub fn attach(container: HtmlElement, config: ChartConfig) -> Result<Self, AppError> {
        config.validate()?;
        let host = Rc::new(HostSurfaces::attach(container)?);
        let source = Rc::new(HttpCandleSource::new(config.data_url.clone()));
        let widget = Rc::new(ChartWidget::new(
            config,
            host.chart.clone(),
            host.crosshair.clone(),
            AnimationFrameTicks::default(),
            AnimationFrameTicks::default(),
        ));
        let listeners = bind_listeners(&widget, &host);
        widget.resize(host.measure());

        log_info!(COMPONENT, "🕯️ Chart attached, data from {}", source.url());
        Ok(Self { widget, host, source, _listeners: listeners })
    }

    pub async fn load_series(&self) -> Result<usize, AppError> {
        self.widget.load(self.source.as_ref()).await
    }

    pub fn widget(&self) -> &BrowserWidget {
        &self.widget
    }
}

impl Drop for CandleStickChart {
    fn drop(&mut self) {
        self.host.detach();
    }
}

fn parse_options(options: &JsValue) -> Result<ChartConfig, AppError> {
    if options.is_undefined() || options.is_null() {
        return Ok(ChartConfig::default());
    }
    options
        .into_serde::<ChartConfig>()
        .map_err(|e| ValidationError::InvalidConfig(e.to_string()).into())
}

fn bind_listeners(widget: &Rc<BrowserWidget>, host: &Rc<HostSurfaces>) -> Vec<EventListener> {
    let target = host.event_target();
    let window = gloo::utils::window();
    let mut listeners = Vec::with_capacity(5);

    // Non-passive so the page does not scroll underneath the chart.
    let on_wheel = Rc::clone(widget);
    listeners.push(EventListener::new_with_options(
        &target,
        "wheel",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(event) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            event.prevent_default();
            on_wheel.wheel(WheelDelta::new(event.delta_x(), event.delta_y()));
        },
    ));

    let on_move = Rc::clone(widget);
    listeners.push(EventListener::new(&target, "mousemove", move |event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            on_move.pointer_move(f64::from(event.offset_x()), f64::from(event.offset_y()));
        }
    }));

    let on_leave = Rc::clone(widget);
    listeners.push(EventListener::new(&target, "mouseleave", move |_| on_leave.pointer_leave()));

    for event_type in ["resize", "load"] {
        let (widget, host) = (Rc::clone(widget), Rc::clone(host));
        listeners.push(EventListener::new(&window, event_type, move |_| {
            widget.resize(host.measure());
        }));
    }

    listeners
}
