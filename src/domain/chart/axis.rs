/// Fixed label axis: `history_slots` past points ending at `t0`, then
/// `forecast_slots` predicted points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeAxis {
    pub history_slots: usize,
    pub forecast_slots: usize,
}

impl TimeAxis {
    pub fn new(history_slots: usize, forecast_slots: usize) -> Self {
        Self { history_slots, forecast_slots }
    }

    pub fn len(&self) -> usize {
        self.history_slots.saturating_add(self.forecast_slots)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `t-6 … t0, t+1 … t+3` for a 7+3 axis
    pub fn labels(&self) -> Vec<String> {
        let past = (0..self.history_slots).rev().map(|back| match back {
            0 => "t0".to_string(),
            n => format!("t-{}", n),
        });
        let future = (1..=self.forecast_slots).map(|ahead| format!("t+{}", ahead));
        past.chain(future).collect()
    }
}

impl Default for TimeAxis {
    fn default() -> Self {
        Self::new(7, 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_labels() {
        assert_eq!(
            TimeAxis::default().labels(),
            vec!["t-6", "t-5", "t-4", "t-3", "t-2", "t-1", "t0", "t+1", "t+2", "t+3"]
        );
    }

    #[test]
    fn forecast_only_axis_has_no_t0() {
        assert_eq!(TimeAxis::new(0, 2).labels(), vec!["t+1", "t+2"]);
    }
}
