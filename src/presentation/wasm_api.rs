use gloo::utils::format::JsValueSerdeExt;
use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::{
    app::{PanelCtx, mount_panel_markup},
    application::PanelCoordinator,
    config::PanelConfig,
    domain::{
        chart::ChartState,
        errors::{PanelError, PanelResult},
        logging::{LogComponent, get_logger},
    },
    infrastructure::{
        BrowserSpawner, BrowserSurface, DomPanel, GatewayClient, TwitchExtensionHost,
        rendering::{ChartJsRenderer, LineChartConfig},
    },
};

type BrowserCoordinator = PanelCoordinator<GatewayClient, BrowserSurface>;

/// `undefined`/`null` means defaults; anything else must decode and validate
pub fn decode_config(value: &JsValue) -> PanelResult<PanelConfig> {
    let config = if value.is_undefined() || value.is_null() {
        PanelConfig::default()
    } else {
        value
            .into_serde::<PanelConfig>()
            .map_err(|e| PanelError::Configuration(e.to_string()))?
    };
    config.validate()?;
    Ok(config)
}

/// JS handle for the sentiment panel
#[wasm_bindgen]
pub struct SentimentPanel {
    config: PanelConfig,
    ctx: PanelCtx,
    coordinator: Option<BrowserCoordinator>,
}

#[wasm_bindgen]
impl SentimentPanel {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SentimentPanel, JsValue> {
        let config = decode_config(&config)?;
        Ok(Self {
            config,
            ctx: PanelCtx::new(),
            coordinator: None,
        })
    }

    /// Render the panel markup with Leptos
    #[wasm_bindgen(js_name = mountMarkup)]
    pub fn mount_markup(&self) {
        mount_panel_markup(self.config.elements.clone(), self.ctx);
    }

    /// Mount the chart and register every host handler. Calling twice is a no-op.
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.coordinator.is_some() {
            return Ok(());
        }

        let initial = ChartState::new(self.config.axis(), self.config.sentiment_scale).series();
        let renderer = ChartJsRenderer::mount(
            &self.config.elements.chart_canvas,
            &LineChartConfig::new(&self.config, &initial),
        )?;
        let surface = BrowserSurface::new(DomPanel::new(self.config.elements.clone()), renderer, self.ctx.status);

        let coordinator = PanelCoordinator::new(self.config.clone(), GatewayClient::new(), surface, BrowserSpawner);
        coordinator.attach(&TwitchExtensionHost::new(self.config.elements.clone()))?;
        self.coordinator = Some(coordinator);

        get_logger().info(LogComponent::Presentation("SentimentPanel"), "🚀 Panel started");
        Ok(())
    }

    pub fn history(&self) -> Vec<f64> {
        self.coordinator.as_ref().map(|c| c.history()).unwrap_or_default()
    }

    pub fn forecast(&self) -> Vec<f64> {
        self.coordinator.as_ref().map(|c| c.forecast()).unwrap_or_default()
    }

    #[wasm_bindgen(js_name = isAuthorized)]
    pub fn is_authorized(&self) -> bool {
        self.coordinator.as_ref().is_some_and(|c| c.is_authorized())
    }

    /// Post a comment without going through the DOM button
    #[wasm_bindgen(js_name = submitComment)]
    pub fn submit_comment(&self, comment: String) -> Promise {
        let coordinator = self.coordinator.clone();
        future_to_promise(async move {
            let coordinator = coordinator.ok_or_else(|| JsValue::from_str("panel not started"))?;
            coordinator
                .submit_comment(&comment)
                .await
                .map(|body| JsValue::from_str(&body))
                .map_err(JsValue::from)
        })
    }
}

/// Create, mount and start a panel in one call
#[wasm_bindgen(js_name = mountPanel)]
pub fn mount_panel(config: JsValue) -> Result<SentimentPanel, JsValue> {
    let mut panel = SentimentPanel::new(config)?;
    panel.mount_markup();
    panel.start()?;
    Ok(panel)
}
