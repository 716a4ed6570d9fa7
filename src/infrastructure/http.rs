//! gloo-net client for the prediction gateway.

use gloo_net::http::{Request, RequestBuilder};

use crate::{
    application::ports::CommentGateway,
    domain::{
        errors::{NetworkError, PanelResult},
        logging::{LogComponent, get_logger},
        requests::{HttpMethod, OutboundRequest},
    },
};

/// gloo-net client for the prediction gateway
#[derive(Debug, Clone, Default)]
pub struct GatewayClient;

impl GatewayClient {
    pub fn new() -> Self {
        Self
    }

    fn builder(request: &OutboundRequest) -> RequestBuilder {
        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
        };
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }
        builder
    }
}

impl CommentGateway for GatewayClient {
    async fn send(&self, request: &OutboundRequest) -> PanelResult<String> {
        get_logger().debug(
            LogComponent::Infrastructure("HTTP"),
            &format!("🌐 {}: {}", request.method, request.url),
        );

        let builder = Self::builder(request);
        let response = match &request.body {
            Some(body) => builder
                .body(body.clone())
                .map_err(|e| NetworkError::RequestFailed(format!("Failed to create request body: {:?}", e)))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| NetworkError::RequestFailed(format!("{:?}", e)))?;

        if !response.ok() {
            return Err(NetworkError::HttpStatus {
                status: response.status(),
                status_text: response.status_text(),
            }
            .into());
        }

        let text = response
            .text()
            .await
            .map_err(|e| NetworkError::RequestFailed(format!("Failed to read response: {:?}", e)))?;

        get_logger().debug(
            LogComponent::Infrastructure("HTTP"),
            &format!("✅ {} response: {} bytes", request.method, text.len()),
        );

        Ok(text)
    }
}
