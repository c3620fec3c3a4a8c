use super::{Pattern, PatternState};

/// Plays a fixed list of values, optionally a limited number of times
///
/// With no repeat limit the list loops forever. An empty list is exhausted
/// immediately.
#[derive(Debug, Clone)]
pub struct Sequence {
    values: Vec<f64>,
    /// Number of passes through `values`; `None` loops forever
    repeats: Option<usize>,
    position: usize,
    pass: usize,
}

impl Sequence {
    /// Create a sequence that loops forever
    ///
    /// # Example
    /// ```
    /// use unary_pattern::pattern::{Pattern, Sequence};
    ///
    /// let mut seq = Sequence::new(vec![60.0, 64.0, 67.0]);
    /// assert_eq!(seq.next_n(4), vec![60.0, 64.0, 67.0, 60.0]);
    /// ```
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            repeats: None,
            position: 0,
            pass: 0,
        }
    }

    /// Create a sequence that plays its values once, then ends
    pub fn once(values: Vec<f64>) -> Self {
        Self::with_repeats(values, 1)
    }

    /// Create a sequence that plays its values `repeats` times, then ends
    pub fn with_repeats(values: Vec<f64>, repeats: usize) -> Self {
        Self {
            repeats: Some(repeats),
            ..Self::new(values)
        }
    }
}

impl Pattern for Sequence {
    fn next_value(&mut self) -> Option<f64> {
        if self.state() == PatternState::Exhausted {
            return None;
        }

        let value = self.values[self.position];
        self.position += 1;
        if self.position >= self.values.len() {
            self.position = 0;
            self.pass += 1;
        }
        Some(value)
    }

    fn reset(&mut self) {
        self.position = 0;
        self.pass = 0;
    }

    fn state(&self) -> PatternState {
        let out_of_passes = self.repeats.is_some_and(|repeats| self.pass >= repeats);
        if self.values.is_empty() || out_of_passes {
            PatternState::Exhausted
        } else {
            PatternState::Active
        }
    }
}

/// Arithmetic series: `start, start + step, start + 2 * step, ...`
#[derive(Debug, Clone)]
pub struct Series {
    start: f64,
    step: f64,
    /// Number of values to produce; `None` is unbounded
    length: Option<usize>,
    index: usize,
}

impl Series {
    /// Create an unbounded series
    pub fn new(start: f64, step: f64) -> Self {
        Self {
            start,
            step,
            length: None,
            index: 0,
        }
    }

    /// Limit the series to `length` values
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }
}

impl Pattern for Series {
    fn next_value(&mut self) -> Option<f64> {
        if self.state() == PatternState::Exhausted {
            return None;
        }
        let value = self.start + self.step * self.index as f64;
        self.index += 1;
        Some(value)
    }

    fn reset(&mut self) {
        self.index = 0;
    }

    fn state(&self) -> PatternState {
        match self.length {
            Some(length) if self.index >= length => PatternState::Exhausted,
            _ => PatternState::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_repeats() {
        let mut seq = Sequence::with_repeats(vec![1.0, 2.0], 2);
        assert_eq!(seq.next_n(10), vec![1.0, 2.0, 1.0, 2.0]);
        assert_eq!(seq.state(), PatternState::Exhausted);
        assert_eq!(seq.next_value(), None);
    }

    #[test]
    fn test_sequence_loops_forever() {
        let mut seq = Sequence::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(seq.next_n(7), vec![1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 1.0]);
        assert_eq!(seq.state(), PatternState::Active);
    }

    #[test]
    fn test_empty_sequence() {
        let mut seq = Sequence::new(vec![]);
        assert_eq!(seq.state(), PatternState::Exhausted);
        assert_eq!(seq.next_value(), None);
    }

    #[test]
    fn test_sequence_reset() {
        let mut seq = Sequence::once(vec![5.0, 6.0]);
        let first = seq.next_n(2);
        assert_eq!(seq.next_value(), None);

        seq.reset();
        assert_eq!(seq.state(), PatternState::Active);
        assert_eq!(seq.next_n(2), first);
    }

    #[test]
    fn test_series() {
        let mut series = Series::new(0.0, 0.5).with_length(3);
        assert_eq!(series.next_n(5), vec![0.0, 0.5, 1.0]);
        assert_eq!(series.state(), PatternState::Exhausted);

        series.reset();
        assert_eq!(series.next_value(), Some(0.0));
    }
}
