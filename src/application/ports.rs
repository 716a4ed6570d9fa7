//! Capabilities the panel needs from the page it runs in.

use std::future::Future;
use std::pin::Pin;

use crate::{
    domain::{
        chart::ChartSeries,
        errors::PanelResult,
        events::{BroadcastMessage, Credentials, UserAction},
        requests::OutboundRequest,
    },
};

pub type AuthorizedHandler = Box<dyn FnMut(Credentials)>;
pub type MessageHandler = Box<dyn FnMut(BroadcastMessage)>;
pub type UserActionHandler = Box<dyn FnMut(UserAction)>;
pub type ContextHandler = Box<dyn FnMut(String)>;

/// Background work for the page's single-threaded event loop
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Event source: the extension SDK plus the panel's own controls.
///
/// Handlers are registered once and stay registered for the page session.
pub trait ExtensionHost {
    fn on_authorized(&self, handler: AuthorizedHandler) -> PanelResult<()>;
    fn on_message(&self, target: &str, handler: MessageHandler) -> PanelResult<()>;
    fn on_user_action(&self, handler: UserActionHandler) -> PanelResult<()>;
    fn on_context(&self, handler: ContextHandler) -> PanelResult<()>;
}

/// Outbound HTTP to the prediction service
#[allow(async_fn_in_trait)]
pub trait CommentGateway {
    async fn send(&self, request: &OutboundRequest) -> PanelResult<String>;
}

/// Runs fire-and-forget work spawned from event handlers
pub trait TaskSpawner {
    fn spawn(&self, task: LocalTask);
}

/// Where results are shown
pub trait PanelSurface {
    /// Raw broadcast or gateway response, shown as-is
    fn show_payload(&self, raw: &str) -> PanelResult<()>;
    fn redraw(&self, series: &ChartSeries) -> PanelResult<()>;
    fn show_authorized(&self, user_id: &str) -> PanelResult<()>;
}
