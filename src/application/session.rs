use crate::{
    config::PanelConfig,
    domain::{
        chart::{ChartSeries, ChartState},
        errors::{PanelError, PanelResult},
        events::Credentials,
        requests::{CommentBody, OutboundRequest, RequestTemplates},
        sentiment::Prediction,
    },
};

/// Everything the handlers share: credentials, request templates and chart
/// state. Owned by the coordinator and passed to each handler.
#[derive(Debug, Clone)]
pub struct PanelSession {
    config: PanelConfig,
    credentials: Option<Credentials>,
    requests: RequestTemplates,
    chart: ChartState,
    latest_payload: Option<String>,
}

impl PanelSession {
    pub fn new(config: PanelConfig) -> Self {
        let requests = RequestTemplates::new(config.broadcast_url());
        let chart = ChartState::new(config.axis(), config.sentiment_scale);
        Self {
            config,
            credentials: None,
            requests,
            chart,
            latest_payload: None,
        }
    }

    /// Store credentials and attach the bearer header to both templates
    pub fn authorize(&mut self, credentials: Credentials) {
        self.requests.set_auth(&credentials.token);
        self.credentials = Some(credentials);
    }

    pub fn is_authorized(&self) -> bool {
        self.credentials.as_ref().is_some_and(Credentials::is_usable)
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Materialize the `set` template for a comment
    pub fn comment_request(&self, comment: &str) -> PanelResult<OutboundRequest> {
        if !self.is_authorized() {
            return Err(PanelError::Unauthorized);
        }
        self.requests.set.with_json_body(&CommentBody { message: comment })
    }

    /// Materialize the `get` template for the stored panel state
    pub fn state_request(&self) -> PanelResult<OutboundRequest> {
        if !self.is_authorized() {
            return Err(PanelError::Unauthorized);
        }
        Ok(self.requests.get.without_body())
    }

    /// Decode a broadcast body and fold it into the chart.
    ///
    /// The raw body is recorded even when decoding fails; chart state is only
    /// touched on success.
    pub fn receive_broadcast(&mut self, body: &str) -> PanelResult<ChartSeries> {
        self.latest_payload = Some(body.to_string());
        let prediction = Prediction::decode(body)?;
        self.chart.apply(&prediction)
    }

    pub fn latest_payload(&self) -> Option<&str> {
        self.latest_payload.as_deref()
    }

    pub fn requests(&self) -> &RequestTemplates {
        &self.requests
    }

    pub fn chart(&self) -> &ChartState {
        &self.chart
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }
}
