use serde::Deserialize;

use crate::domain::{
    chart::TimeAxis,
    errors::{PanelError, PanelResult},
};

/// API gateway fronting the prediction service
pub const DEFAULT_GATEWAY_URL: &str = "https://89yx33v036.execute-api.eu-central-1.amazonaws.com/default/";

/// Upper bound for `historySlots` and `forecastSlots`
pub const MAX_AXIS_SLOTS: usize = 256;

/// Panel configuration, passed from JS as a plain object.
///
/// Every field is optional on the JS side; missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelConfig {
    pub gateway_base_url: String,
    /// Path segment of both request templates and the pub/sub target
    pub broadcast_target: String,
    pub history_slots: usize,
    pub forecast_slots: usize,
    /// Raw sentiment is in [-0.2, 0.2]; the chart axis is [-1, 1]
    pub sentiment_scale: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub y_step: f64,
    pub fetch_state_on_authorize: bool,
    pub elements: ElementIds,
}

/// DOM ids of the panel surface
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub prediction: String,
    pub send_button: String,
    pub comment_input: String,
    pub chart_canvas: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            prediction: "prediction".to_string(),
            send_button: "send".to_string(),
            comment_input: "sendComment".to_string(),
            chart_canvas: "myChart".to_string(),
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            gateway_base_url: DEFAULT_GATEWAY_URL.to_string(),
            broadcast_target: "broadcast".to_string(),
            history_slots: 7,
            forecast_slots: 3,
            sentiment_scale: 5.0,
            y_min: -1.0,
            y_max: 1.0,
            y_step: 0.5,
            fetch_state_on_authorize: false,
            elements: ElementIds::default(),
        }
    }
}

impl PanelConfig {
    pub fn validate(&self) -> PanelResult<()> {
        if self.gateway_base_url.trim().is_empty() {
            return Err(PanelError::Configuration("gatewayBaseUrl is empty".to_string()));
        }
        if self.broadcast_target.trim().is_empty() {
            return Err(PanelError::Configuration("broadcastTarget is empty".to_string()));
        }
        if self.history_slots == 0 {
            return Err(PanelError::Configuration("historySlots must be at least 1".to_string()));
        }
        if self.history_slots > MAX_AXIS_SLOTS || self.forecast_slots > MAX_AXIS_SLOTS {
            return Err(PanelError::Configuration(format!(
                "historySlots ({}) and forecastSlots ({}) must not exceed {}",
                self.history_slots, self.forecast_slots, MAX_AXIS_SLOTS
            )));
        }
        if !(self.sentiment_scale.is_finite() && self.sentiment_scale > 0.0) {
            return Err(PanelError::Configuration(format!(
                "sentimentScale must be positive, got {}",
                self.sentiment_scale
            )));
        }
        if !(self.y_min.is_finite() && self.y_max.is_finite()) {
            return Err(PanelError::Configuration(format!(
                "yMin ({}) and yMax ({}) must be finite",
                self.y_min, self.y_max
            )));
        }
        if !(self.y_step.is_finite() && self.y_step > 0.0) {
            return Err(PanelError::Configuration(format!("yStep must be positive, got {}", self.y_step)));
        }
        if self.y_min >= self.y_max {
            return Err(PanelError::Configuration(format!(
                "yMin ({}) must be below yMax ({})",
                self.y_min, self.y_max
            )));
        }
        Ok(())
    }

    pub fn axis(&self) -> TimeAxis {
        TimeAxis::new(self.history_slots, self.forecast_slots)
    }

    /// `{gateway}/{broadcast_target}` with exactly one slash between
    pub fn broadcast_url(&self) -> String {
        format!(
            "{}/{}",
            self.gateway_base_url.trim_end_matches('/'),
            self.broadcast_target.trim_start_matches('/')
        )
    }
}
