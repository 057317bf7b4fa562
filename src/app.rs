use leptos::html::Div;
use leptos::*;
use std::rc::Rc;
use wasm_bindgen::JsCast;

use crate::{
    domain::{
        chart::ChartConfig,
        logging::LogComponent,
    },
    log_error,
    presentation::CandleStickChart,
};

/// 🕯️ Candlestick chart mounted into its own host `div`
#[component]
pub fn CandleChart(
    #[prop(optional)] config: Option<ChartConfig>,
    #[prop(default = 480)] height: u32,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let host_ref = create_node_ref::<Div>();
    let (status, set_status) = create_signal(String::from("⏳ Loading candles..."));
    let chart = store_value::<Option<Rc<CandleStickChart>>>(None);

    create_effect(move |_| {
        let Some(host) = host_ref.get() else {
            return;
        };
        if chart.with_value(Option::is_some) {
            return;
        }
        let element = (*host).clone().unchecked_into::<web_sys::HtmlElement>();
        match CandleStickChart::attach(element, config.clone()) {
            Ok(mounted) => {
                let mounted = Rc::new(mounted);
                chart.set_value(Some(Rc::clone(&mounted)));
                spawn_local(async move {
                    match mounted.load_series().await {
                        Ok(count) => set_status.set(format!("✅ {count} candles")),
                        Err(e) => set_status.set(format!("❌ {e}")),
                    }
                });
            }
            Err(e) => {
                log_error!(LogComponent::Presentation("CandleChart"), "Mount failed: {e}");
                set_status.set(format!("❌ {e}"));
            }
        }
    });

    view! {
        <div class="candlestick-chart">
            <div
                class="candlestick-host"
                node_ref=host_ref
                style=format!("width: 100%; height: {height}px;")
            ></div>
            <div class="status">{move || status.get()}</div>
        </div>
    }
}

/// Demo page: a single full-width chart over the bundled data file
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="candlestick-app">
            <h1>"🕯️ Candlesticks"</h1>
            <CandleChart />
        </div>
    }
}
