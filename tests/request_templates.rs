use sentiment_panel_wasm::application::PanelSession;
use sentiment_panel_wasm::config::PanelConfig;
use sentiment_panel_wasm::domain::errors::PanelError;
use sentiment_panel_wasm::domain::events::Credentials;
use sentiment_panel_wasm::domain::requests::{CommentBody, HttpMethod, RequestTemplates};

#[test]
fn both_templates_carry_bearer_token() {
    let mut templates = RequestTemplates::new(PanelConfig::default().broadcast_url());
    templates.set_auth("abc");

    for template in [&templates.get, &templates.set] {
        assert_eq!(template.header("Authorization"), Some("Bearer abc"));
        assert_eq!(template.header("Content-Type"), Some("application/json"));
    }
    assert_eq!(templates.get.method, HttpMethod::Get);
    assert_eq!(templates.set.method, HttpMethod::Post);
}

#[test]
fn reauthorization_replaces_token() {
    let mut session = PanelSession::new(PanelConfig::default());
    session.authorize(Credentials::new("first", "u1"));
    session.authorize(Credentials::new("second", "u1"));
    assert_eq!(session.requests().set.header("Authorization"), Some("Bearer second"));
    assert_eq!(session.requests().set.headers().len(), 2);
}

#[test]
fn comment_request_needs_authorization() {
    let session = PanelSession::new(PanelConfig::default());
    assert_eq!(session.comment_request("hi").unwrap_err(), PanelError::Unauthorized);
    assert_eq!(session.state_request().unwrap_err(), PanelError::Unauthorized);
}

#[test]
fn comment_request_posts_json_message() {
    let mut session = PanelSession::new(PanelConfig {
        gateway_base_url: "https://gateway.test/default".to_string(),
        ..PanelConfig::default()
    });
    session.authorize(Credentials::new("abc", "u1"));

    let request = session.comment_request("what a play").unwrap();
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.url, "https://gateway.test/default/broadcast");
    assert_eq!(request.headers.get("Authorization").map(String::as_str), Some("Bearer abc"));
    assert_eq!(request.body.as_deref(), Some(r#"{"message":"what a play"}"#));
}

#[test]
fn comment_body_shape() {
    insta::assert_json_snapshot!(CommentBody { message: "hi" }, @r#"
    {
      "message": "hi"
    }
    "#);
}
