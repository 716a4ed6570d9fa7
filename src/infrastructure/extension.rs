//! Bindings to the extension helper (`window.Twitch.ext`) and the panel's
//! submit controls.

use gloo::events::EventListener;
use gloo::utils::format::JsValueSerdeExt;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;

use crate::{
    application::ports::{AuthorizedHandler, ContextHandler, ExtensionHost, MessageHandler, UserActionHandler},
    config::ElementIds,
    domain::{
        errors::{PanelError, PanelResult},
        events::{BroadcastMessage, Credentials, UserAction},
        logging::{LogComponent, get_logger},
    },
};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["Twitch", "ext"], js_name = onAuthorized)]
    fn ext_on_authorized(callback: &Closure<dyn FnMut(JsValue)>) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["Twitch", "ext"], js_name = onContext)]
    fn ext_on_context(callback: &Closure<dyn FnMut(JsValue, JsValue)>) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["Twitch", "ext"], js_name = listen)]
    fn ext_listen(target: &str, callback: &Closure<dyn FnMut(String, String, String)>) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["Twitch", "ext", "rig"], js_name = log)]
    fn ext_rig_log(message: &str) -> Result<(), JsValue>;
}

/// Write to the developer rig's debug log. Silently does nothing outside the rig.
pub fn rig_log(message: &str) {
    let _ = ext_rig_log(message);
}

fn sdk_error(call: &str, error: JsValue) -> PanelError {
    PanelError::BrowserApi(format!("Twitch.ext.{} unavailable: {:?}", call, error))
}

/// `ExtensionHost` backed by the extension helper script and the DOM.
///
/// Registered callbacks live for the page session, so their closures are
/// leaked on registration.
#[derive(Debug, Clone)]
pub struct TwitchExtensionHost {
    elements: ElementIds,
}

impl TwitchExtensionHost {
    pub fn new(elements: ElementIds) -> Self {
        Self { elements }
    }

    fn read_comment(&self) -> Option<String> {
        let document = web_sys::window()?.document()?;
        let input = document
            .get_element_by_id(&self.elements.comment_input)?
            .dyn_into::<HtmlInputElement>()
            .ok()?;
        Some(input.value())
    }
}

impl ExtensionHost for TwitchExtensionHost {
    fn on_authorized(&self, mut handler: AuthorizedHandler) -> PanelResult<()> {
        let callback = Closure::wrap(Box::new(move |auth: JsValue| match auth.into_serde::<Credentials>() {
            Ok(credentials) => handler(credentials),
            Err(e) => get_logger().error(
                LogComponent::Infrastructure("Extension"),
                &format!("Unreadable authorization payload: {}", e),
            ),
        }) as Box<dyn FnMut(JsValue)>);

        ext_on_authorized(&callback).map_err(|e| sdk_error("onAuthorized", e))?;
        callback.forget();
        Ok(())
    }

    fn on_message(&self, target: &str, mut handler: MessageHandler) -> PanelResult<()> {
        let callback = Closure::wrap(Box::new(move |target: String, content_type: String, body: String| {
            handler(BroadcastMessage::new(target, content_type, body));
        }) as Box<dyn FnMut(String, String, String)>);

        ext_listen(target, &callback).map_err(|e| sdk_error("listen", e))?;
        callback.forget();
        Ok(())
    }

    fn on_user_action(&self, mut handler: UserActionHandler) -> PanelResult<()> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| PanelError::BrowserApi("Document not available".to_string()))?;
        let button = document.get_element_by_id(&self.elements.send_button).ok_or_else(|| {
            PanelError::BrowserApi(format!("Send button '#{}' not found", self.elements.send_button))
        })?;

        let host = self.clone();
        EventListener::new(&button, "click", move |_event| match host.read_comment() {
            Some(comment) => handler(UserAction::SubmitComment(comment)),
            None => get_logger().warn(
                LogComponent::Infrastructure("Extension"),
                &format!("Comment input '#{}' not found", host.elements.comment_input),
            ),
        })
        .forget();
        Ok(())
    }

    fn on_context(&self, mut handler: ContextHandler) -> PanelResult<()> {
        let callback = Closure::wrap(Box::new(move |context: JsValue, _changed: JsValue| {
            let text = js_sys::JSON::stringify(&context)
                .map(String::from)
                .unwrap_or_else(|_| format!("{:?}", context));
            handler(text);
        }) as Box<dyn FnMut(JsValue, JsValue)>);

        ext_on_context(&callback).map_err(|e| sdk_error("onContext", e))?;
        callback.forget();
        Ok(())
    }
}
