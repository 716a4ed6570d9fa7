pub mod chart;
pub mod errors;
pub mod events;
pub mod logging;
pub mod requests;
pub mod sentiment;
