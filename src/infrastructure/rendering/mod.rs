pub mod chart_config;
pub mod chart_js;

pub use chart_config::LineChartConfig;
pub use chart_js::ChartJsRenderer;
