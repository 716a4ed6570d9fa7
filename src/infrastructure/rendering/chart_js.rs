use gloo::utils::format::JsValueSerdeExt;
use js_sys::{Array, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::log_debug;
use crate::domain::{
    chart::ChartSeries,
    errors::{PanelError, PanelResult},
    logging::{LogComponent, get_logger},
};

use super::chart_config::LineChartConfig;

#[wasm_bindgen]
extern "C" {
    /// Chart.js instance (global `Chart` constructor)
    #[wasm_bindgen(js_name = Chart)]
    pub type ChartJs;

    #[wasm_bindgen(catch, constructor, js_class = "Chart")]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<ChartJs, JsValue>;

    #[wasm_bindgen(method, js_class = "Chart")]
    fn update(this: &ChartJs);
}

fn js_error(context: &str, error: JsValue) -> PanelError {
    PanelError::BrowserApi(format!("{}: {:?}", context, error))
}

/// Owns the Chart.js instance on the panel canvas and pushes series into it
pub struct ChartJsRenderer {
    chart: ChartJs,
}

impl ChartJsRenderer {
    pub fn mount(canvas_id: &str, config: &LineChartConfig) -> PanelResult<Self> {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(canvas_id))
            .ok_or_else(|| PanelError::BrowserApi(format!("Canvas '#{}' not found", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| PanelError::BrowserApi(format!("'#{}' is not a canvas", canvas_id)))?;

        let js_config = JsValue::from_serde(config)
            .map_err(|e| PanelError::BrowserApi(format!("Chart config: {}", e)))?;
        let chart = ChartJs::new(&canvas, &js_config).map_err(|e| js_error("new Chart", e))?;

        get_logger().info(
            LogComponent::Infrastructure("ChartJs"),
            &format!("📈 Chart mounted on #{}", canvas_id),
        );
        Ok(Self { chart })
    }

    /// Replace both datasets and redraw
    pub fn redraw(&self, series: &ChartSeries) -> PanelResult<()> {
        let data = Reflect::get(&self.chart, &JsValue::from_str("data"))
            .map_err(|e| js_error("chart.data", e))?;
        let datasets: Array = Reflect::get(&data, &JsValue::from_str("datasets"))
            .map_err(|e| js_error("chart.data.datasets", e))?
            .dyn_into()
            .map_err(|e| js_error("chart.data.datasets is not an array", e))?;

        for (index, values) in [&series.history, &series.forecast].into_iter().enumerate() {
            let values = JsValue::from_serde(values)
                .map_err(|e| PanelError::BrowserApi(format!("Series {}: {}", index, e)))?;
            Reflect::set(&datasets.get(index as u32), &JsValue::from_str("data"), &values)
                .map_err(|e| js_error("dataset.data", e))?;
        }

        log_debug!(LogComponent::Infrastructure("ChartJs"), "Redrawing {} slots", series.len());
        self.chart.update();
        Ok(())
    }
}
