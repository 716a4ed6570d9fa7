/// Predicted future sentiment, replaced wholesale on every broadcast.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastSequence(Vec<f64>);

impl ForecastSequence {
    pub fn zeroed(len: usize) -> Self {
        Self(vec![0.0; len])
    }

    pub fn replace(&mut self, values: Vec<f64>) {
        self.0 = values;
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<f64>> for ForecastSequence {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}
