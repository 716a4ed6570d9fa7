use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, LogLevel, get_logger};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use presentation::{SentimentPanel, mount_panel};

/// Install panic hook, logger and clock when the module loads
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LogLevel::Debug } else { LogLevel::Info };
    domain::logging::init_logger(Box::new(infrastructure::services::RigLogger::new(level)));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    get_logger().info(LogComponent::Presentation("Initialize"), "🚀 Sentiment panel module loaded");
}
