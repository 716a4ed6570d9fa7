pub mod extension;
pub mod http;
pub mod rendering;
pub mod services;
pub mod ui;

pub use extension::TwitchExtensionHost;
pub use http::GatewayClient;
pub use services::BrowserSpawner;
pub use ui::{BrowserSurface, DomPanel};
