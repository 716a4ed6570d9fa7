use std::collections::VecDeque;

/// Fixed-capacity FIFO of past sentiment values.
///
/// The buffer is always full: it starts zero-filled and every push evicts the
/// oldest value.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryBuffer {
    values: VecDeque<f64>,
    capacity: usize,
}

impl HistoryBuffer {
    pub fn zeroed(capacity: usize) -> Self {
        Self {
            values: std::iter::repeat(0.0).take(capacity).collect(),
            capacity,
        }
    }

    pub fn push(&mut self, value: f64) {
        if self.capacity == 0 {
            return;
        }
        if self.values.len() >= self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    /// Most recent value, used to bridge into the forecast series
    pub fn latest(&self) -> Option<f64> {
        self.values.back().copied()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_evicts_oldest() {
        let mut buf = HistoryBuffer::zeroed(3);
        buf.push(1.0);
        buf.push(2.0);
        buf.push(3.0);
        buf.push(4.0);
        assert_eq!(buf.to_vec(), vec![2.0, 3.0, 4.0]);
        assert_eq!(buf.latest(), Some(4.0));
    }

    #[test]
    fn zero_capacity_stays_empty() {
        let mut buf = HistoryBuffer::zeroed(0);
        buf.push(1.0);
        assert!(buf.is_empty());
        assert_eq!(buf.latest(), None);
    }
}
