//! Request templates for the prediction gateway.
//!
//! Templates are prepared at load time and gain their bearer header once the
//! viewer is authorized; each send materializes an `OutboundRequest`.

use std::collections::BTreeMap;

use serde::Serialize;
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

use super::errors::{NetworkError, PanelResult};

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, AsRefStr, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

/// A prepared request: method, url and headers, no body yet
#[derive(Debug, Clone, PartialEq)]
pub struct RequestTemplate {
    pub method: HttpMethod,
    pub url: String,
    headers: BTreeMap<String, String>,
}

impl RequestTemplate {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: BTreeMap::new(),
        }
    }

    /// Attach bearer credentials and the JSON content type
    pub fn set_auth(&mut self, token: &str) {
        self.headers.insert(AUTHORIZATION.to_string(), format!("Bearer {}", token));
        self.headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn is_authorized(&self) -> bool {
        self.headers.contains_key(AUTHORIZATION)
    }

    pub fn with_json_body<T: Serialize>(&self, body: &T) -> PanelResult<OutboundRequest> {
        let json = serde_json::to_string(body)
            .map_err(|e| NetworkError::Serialization(e.to_string()))?;
        Ok(OutboundRequest {
            method: self.method,
            url: self.url.clone(),
            headers: self.headers.clone(),
            body: Some(json),
        })
    }

    pub fn without_body(&self) -> OutboundRequest {
        OutboundRequest {
            method: self.method,
            url: self.url.clone(),
            headers: self.headers.clone(),
            body: None,
        }
    }
}

/// The two templates the panel prepares at load time
#[derive(Debug, Clone, PartialEq)]
pub struct RequestTemplates {
    pub get: RequestTemplate,
    pub set: RequestTemplate,
}

impl RequestTemplates {
    /// `GET` and `POST` templates against the same endpoint
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            get: RequestTemplate::new(HttpMethod::Get, url.clone()),
            set: RequestTemplate::new(HttpMethod::Post, url),
        }
    }

    pub fn set_auth(&mut self, token: &str) {
        for template in [&mut self.get, &mut self.set] {
            template.set_auth(token);
        }
    }
}

/// Body of a comment submission
#[derive(Debug, Serialize)]
pub struct CommentBody<'a> {
    pub message: &'a str,
}

/// A fully materialized request ready for the wire
#[derive(Clone, PartialEq)]
pub struct OutboundRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

// Authorization header stays out of logs.
impl std::fmt::Debug for OutboundRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutboundRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .field("body", &self.body)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_strings() {
        assert_eq!(HttpMethod::Post.as_ref(), "POST");
        assert_eq!("GET".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
    }

    #[test]
    fn templates_share_broadcast_url() {
        let templates = RequestTemplates::new("https://gw/default/broadcast");
        assert_eq!(templates.set.url, "https://gw/default/broadcast");
        assert_eq!(templates.get.url, templates.set.url);
        assert!(!templates.set.is_authorized());
    }

    #[test]
    fn debug_hides_header_values() {
        let mut template = RequestTemplate::new(HttpMethod::Post, "https://gw/broadcast");
        template.set_auth("s3cret");
        let printed = format!("{:?}", template.without_body());
        assert!(!printed.contains("s3cret"));
        assert!(printed.contains("Authorization"));
    }
}
