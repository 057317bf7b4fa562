pub mod dom;
pub mod dto;
pub mod http;
pub mod rendering;
pub mod services;

pub use dom::HostSurfaces;
pub use http::HttpCandleSource;
pub use services::ConsoleLogger;

use wasm_bindgen::JsValue;

/// Best-effort text for an exception thrown by a browser API.
pub(crate) fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
