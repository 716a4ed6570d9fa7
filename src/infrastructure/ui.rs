use leptos::{RwSignal, SignalSet};

use crate::{
    log_debug,
    application::ports::PanelSurface,
    config::ElementIds,
    domain::{
        chart::ChartSeries,
        errors::{PanelError, PanelResult},
        logging::{LogComponent, get_logger},
    },
    infrastructure::rendering::ChartJsRenderer,
};

/// Direct DOM writes for the prediction element
#[derive(Debug, Clone)]
pub struct DomPanel {
    elements: ElementIds,
}

impl DomPanel {
    pub fn new(elements: ElementIds) -> Self {
        Self { elements }
    }

    /// Writes the payload as HTML, unsanitized
    pub fn set_prediction_html(&self, html: &str) -> PanelResult<()> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| PanelError::BrowserApi("Document not available".to_string()))?;

        match document.get_element_by_id(&self.elements.prediction) {
            Some(element) => {
                element.set_inner_html(html);
                Ok(())
            }
            None => {
                get_logger().warn(
                    LogComponent::Infrastructure("UI"),
                    &format!("Prediction element '#{}' not found in DOM", self.elements.prediction),
                );
                Ok(())
            }
        }
    }
}

/// Browser implementation of the panel surface: DOM text, Chart.js, and the
/// Leptos status line.
pub struct BrowserSurface {
    dom: DomPanel,
    chart: ChartJsRenderer,
    status: RwSignal<String>,
}

impl BrowserSurface {
    pub fn new(dom: DomPanel, chart: ChartJsRenderer, status: RwSignal<String>) -> Self {
        Self { dom, chart, status }
    }
}

impl PanelSurface for BrowserSurface {
    fn show_payload(&self, raw: &str) -> PanelResult<()> {
        log_debug!(LogComponent::Infrastructure("UI"), "Displaying prediction ({} bytes)", raw.len());
        self.dom.set_prediction_html(raw)
    }

    fn redraw(&self, series: &ChartSeries) -> PanelResult<()> {
        self.chart.redraw(series)
    }

    fn show_authorized(&self, user_id: &str) -> PanelResult<()> {
        self.status.set(format!("Signed in as {}", user_id));
        Ok(())
    }
}
