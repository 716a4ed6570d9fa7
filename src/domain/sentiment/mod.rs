//! Sentiment values received from the prediction service.
//!
//! `HistoryBuffer` keeps the observed sentiment, `ForecastSequence` the latest
//! prediction, and `Prediction` is the decoded broadcast payload feeding both.

pub mod forecast;
pub mod history;
pub mod prediction;

pub use forecast::ForecastSequence;
pub use history::HistoryBuffer;
pub use prediction::Prediction;
