use std::fmt;

use serde::Deserialize;

/// Common surface of the payloads delivered by the extension host
pub trait DomainEvent: fmt::Debug {
    fn event_type(&self) -> &'static str;
}

/// Credentials handed over by the host's authorization callback
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub token: String,
    pub user_id: String,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
}

impl Credentials {
    pub fn new(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_id: user_id.into(),
            channel_id: None,
            client_id: None,
        }
    }

    /// An empty token counts as not authorized.
    pub fn is_usable(&self) -> bool {
        !self.token.is_empty()
    }
}

// Token stays out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("user_id", &self.user_id)
            .field("channel_id", &self.channel_id)
            .field("client_id", &self.client_id)
            .finish()
    }
}

impl DomainEvent for Credentials {
    fn event_type(&self) -> &'static str {
        "Authorized"
    }
}

/// A pub/sub message as delivered by the host's `listen` callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastMessage {
    pub target: String,
    pub content_type: String,
    pub body: String,
}

impl BroadcastMessage {
    pub fn new(target: impl Into<String>, content_type: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            content_type: content_type.into(),
            body: body.into(),
        }
    }
}

impl DomainEvent for BroadcastMessage {
    fn event_type(&self) -> &'static str {
        "BroadcastReceived"
    }
}

/// Viewer interactions with the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    SubmitComment(String),
}

impl DomainEvent for UserAction {
    fn event_type(&self) -> &'static str {
        match self {
            UserAction::SubmitComment(_) => "SubmitComment",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_token() {
        let creds = Credentials::new("secret-token", "42");
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("secret-token"));
        assert!(printed.contains("42"));
    }

    #[test]
    fn decodes_host_auth_object() {
        let creds: Credentials = serde_json::from_str(
            r#"{"token":"abc","userId":"U1","channelId":"C1","clientId":"X","helixToken":"h"}"#,
        )
        .unwrap();
        assert_eq!(creds.token, "abc");
        assert_eq!(creds.user_id, "U1");
        assert_eq!(creds.channel_id.as_deref(), Some("C1"));
    }
}
