//! Value resolution
//!
//! A `Value` is either a plain constant or a nested lazy source. Resolving it
//! yields a concrete scalar: constants pass through unchanged, sources are
//! advanced by one step.

use std::fmt;

use super::Pattern;

/// A constant or a lazy source of values
pub enum Value {
    /// Returned unchanged on every read
    Constant(f64),
    /// Advanced by one step on every read
    Source(Box<dyn Pattern>),
}

impl Value {
    /// Wrap a pattern as a lazily-resolved value
    pub fn source(pattern: impl Pattern + 'static) -> Self {
        Value::Source(Box::new(pattern))
    }

    /// Resolve to a concrete scalar
    ///
    /// Returns `None` only when a wrapped source is exhausted.
    pub fn resolve(&mut self) -> Option<f64> {
        match self {
            Value::Constant(value) => Some(*value),
            Value::Source(source) => source.next_value(),
        }
    }

    /// Reset a wrapped source; constants are unaffected
    pub fn reset(&mut self) {
        if let Value::Source(source) = self {
            source.reset();
        }
    }

    /// The constant this value holds, if it is one
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Value::Constant(value) => Some(*value),
            Value::Source(_) => None,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Constant(value)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Constant(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Constant(value as f64)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Constant(value) => write!(f, "{}", value),
            Value::Source(_) => write!(f, "<source>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Sequence;

    #[test]
    fn test_constant_passes_through() {
        let mut value = Value::from(5.0);
        assert_eq!(value.resolve(), Some(5.0));
        assert_eq!(value.resolve(), Some(5.0));
        assert_eq!(value.as_constant(), Some(5.0));
    }

    #[test]
    fn test_source_advances() {
        let mut value = Value::source(Sequence::once(vec![1.0, 2.0]));
        assert_eq!(value.resolve(), Some(1.0));
        assert_eq!(value.resolve(), Some(2.0));
        assert_eq!(value.resolve(), None);
        assert_eq!(value.as_constant(), None);

        value.reset();
        assert_eq!(value.resolve(), Some(1.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(100usize).to_string(), "100");
        assert_eq!(Value::source(Sequence::once(vec![1.0])).to_string(), "<source>");
    }
}
