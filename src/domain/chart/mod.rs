pub mod axis;
pub mod series;
pub mod state;

pub use axis::TimeAxis;
pub use series::ChartSeries;
pub use state::ChartState;
