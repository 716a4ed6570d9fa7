use crate::domain::{
    errors::{PanelError, PanelResult},
    logging::{LogComponent, get_logger},
    sentiment::{ForecastSequence, HistoryBuffer, Prediction},
};

use super::{axis::TimeAxis, series::ChartSeries};

/// Rolling chart state: observed history plus the latest forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartState {
    axis: TimeAxis,
    history: HistoryBuffer,
    forecast: ForecastSequence,
    sentiment_scale: f64,
}

impl ChartState {
    /// Zero-filled state: `axis.history_slots` zeros of history and
    /// `axis.forecast_slots` zeros of forecast.
    pub fn new(axis: TimeAxis, sentiment_scale: f64) -> Self {
        Self {
            axis,
            history: HistoryBuffer::zeroed(axis.history_slots),
            forecast: ForecastSequence::zeroed(axis.forecast_slots),
            sentiment_scale,
        }
    }

    /// Fold a decoded prediction into the state and return the new series.
    ///
    /// A sentiment that overflows once scaled is rejected before any slot
    /// changes.
    pub fn apply(&mut self, prediction: &Prediction) -> PanelResult<ChartSeries> {
        let scaled = prediction.sentiment * self.sentiment_scale;
        if !scaled.is_finite() {
            return Err(PanelError::MalformedPayload(format!(
                "sentiment {} out of range after scaling by {}",
                prediction.sentiment, self.sentiment_scale
            )));
        }
        self.history.push(scaled);

        if prediction.pred.len() > self.axis.forecast_slots {
            get_logger().warn(
                LogComponent::Domain("Chart"),
                &format!(
                    "forecast has {} points, axis shows {}",
                    prediction.pred.len(),
                    self.axis.forecast_slots
                ),
            );
        }
        self.forecast.replace(prediction.pred.clone());

        Ok(self.series())
    }

    pub fn series(&self) -> ChartSeries {
        ChartSeries::build(self.axis, &self.history.to_vec(), self.forecast.as_slice())
    }

    pub fn axis(&self) -> TimeAxis {
        self.axis
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn forecast(&self) -> &ForecastSequence {
        &self.forecast
    }
}

impl Default for ChartState {
    fn default() -> Self {
        Self::new(TimeAxis::default(), 5.0)
    }
}
