use serde::Serialize;

use super::axis::TimeAxis;

/// The two display series handed to the renderer.
///
/// Both vectors always have `axis.len()` slots; `None` is an empty slot
/// (serialized as `null`, which the chart draws as a gap).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub history: Vec<Option<f64>>,
    pub forecast: Vec<Option<f64>>,
}

impl ChartSeries {
    /// Align history and forecast on the axis.
    ///
    /// The forecast series starts at `t0` with the last history value so the
    /// two curves meet. Forecast values beyond the axis are dropped.
    pub fn build(axis: TimeAxis, history: &[f64], forecast: &[f64]) -> Self {
        let total = axis.len();

        let history_series = pad_to(
            history.iter().take(axis.history_slots).map(|v| Some(*v)),
            total,
        );

        let bridge = history.last().copied().filter(|_| axis.history_slots > 0);
        let leading_gaps = axis.history_slots.saturating_sub(1);
        let forecast_series = pad_to(
            std::iter::repeat(None)
                .take(leading_gaps)
                .chain(bridge.map(Some))
                .chain(forecast.iter().take(axis.forecast_slots).map(|v| Some(*v))),
            total,
        );

        Self {
            labels: axis.labels(),
            history: history_series,
            forecast: forecast_series,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

fn pad_to(values: impl Iterator<Item = Option<f64>>, total: usize) -> Vec<Option<f64>> {
    let mut out: Vec<Option<f64>> = values.take(total).collect();
    out.resize(total, None);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_forecast_is_right_padded() {
        let series = ChartSeries::build(TimeAxis::new(2, 3), &[1.0, 2.0], &[0.5]);
        assert_eq!(series.history, vec![Some(1.0), Some(2.0), None, None, None]);
        assert_eq!(series.forecast, vec![None, Some(2.0), Some(0.5), None, None]);
    }

    #[test]
    fn long_forecast_is_truncated() {
        let series = ChartSeries::build(TimeAxis::new(1, 2), &[3.0], &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(series.forecast, vec![Some(3.0), Some(1.0), Some(2.0)]);
    }
}
