use wasm_bindgen::prelude::*;

use crate::domain::logging::LogComponent;

pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

pub use presentation::CandleStickChart;

/// Install the panic hook and the console logger
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = if cfg!(debug_assertions) {
        infrastructure::ConsoleLogger::new_development()
    } else {
        infrastructure::ConsoleLogger::new_production()
    };
    domain::logging::init_logger(Box::new(console_logger));

    log_info!(LogComponent::Presentation("Initialize"), "🚀 Candlestick chart module ready");
}

/// Render the demo [`app::App`] into `<body>`
#[wasm_bindgen(js_name = runApp)]
pub fn run_app() {
    leptos::mount_to_body(app::App);
}
