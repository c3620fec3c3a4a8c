//! Shaping parameters
//!
//! Each shaping parameter of a sampler is bound once, at construction, to one
//! of three modes: a constant, a lazy source, or a callable of normalized
//! progress `t`. The mode never changes afterwards.

use std::fmt;

use super::value::Value;
use super::Pattern;

/// Names of the six shaping parameters, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamName {
    Start,
    Stop,
    Rate,
    Phase,
    Mul,
    Offset,
}

impl ParamName {
    pub const ALL: [ParamName; 6] = [
        ParamName::Start,
        ParamName::Stop,
        ParamName::Rate,
        ParamName::Phase,
        ParamName::Mul,
        ParamName::Offset,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParamName::Start => "start",
            ParamName::Stop => "stop",
            ParamName::Rate => "rate",
            ParamName::Phase => "phase",
            ParamName::Mul => "mul",
            ParamName::Offset => "offset",
        }
    }
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a parameter is resolved on each step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamMode {
    Constant,
    Source,
    Callable,
}

/// A shaping parameter bound to its resolution mode
pub enum Param {
    /// Same value on every step
    Constant(f64),
    /// Advanced by one step on every read
    Source(Box<dyn Pattern>),
    /// Invoked with normalized progress `t` on every read
    Callable(Box<dyn Fn(f64) -> f64>),
}

impl Param {
    pub fn callable(f: impl Fn(f64) -> f64 + 'static) -> Self {
        Param::Callable(Box::new(f))
    }

    pub fn source(pattern: impl Pattern + 'static) -> Self {
        Param::Source(Box::new(pattern))
    }

    /// Resolve this parameter for the step at progress `t`
    ///
    /// `t` is only consulted by callables. Returns `None` when a wrapped
    /// source is exhausted.
    pub fn resolve(&mut self, t: f64) -> Option<f64> {
        match self {
            Param::Constant(value) => Some(*value),
            Param::Source(source) => source.next_value(),
            Param::Callable(f) => Some(f(t)),
        }
    }

    pub fn reset(&mut self) {
        if let Param::Source(source) = self {
            source.reset();
        }
    }

    pub fn mode(&self) -> ParamMode {
        match self {
            Param::Constant(_) => ParamMode::Constant,
            Param::Source(_) => ParamMode::Source,
            Param::Callable(_) => ParamMode::Callable,
        }
    }

    pub fn is_callable(&self) -> bool {
        self.mode() == ParamMode::Callable
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Param::Constant(value)
    }
}

impl From<Value> for Param {
    fn from(value: Value) -> Self {
        match value {
            Value::Constant(value) => Param::Constant(value),
            Value::Source(source) => Param::Source(source),
        }
    }
}

impl fmt::Debug for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Constant(value) => write!(f, "{}", value),
            Param::Source(_) => write!(f, "<source>"),
            Param::Callable(_) => write!(f, "<fn>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Series;

    #[test]
    fn test_modes() {
        assert_eq!(Param::from(1.0).mode(), ParamMode::Constant);
        assert_eq!(Param::source(Series::new(0.0, 1.0)).mode(), ParamMode::Source);
        assert_eq!(Param::callable(|t| t).mode(), ParamMode::Callable);
        assert!(Param::callable(|t| t).is_callable());
        assert!(!Param::from(Value::from(2.0)).is_callable());
    }

    #[test]
    fn test_resolve_by_mode() {
        let mut constant = Param::from(3.0);
        assert_eq!(constant.resolve(0.5), Some(3.0));

        let mut callable = Param::callable(|t| t * 10.0);
        assert_eq!(callable.resolve(0.5), Some(5.0));

        // Sources ignore t and advance instead
        let mut source = Param::source(Series::new(1.0, 1.0).with_length(2));
        assert_eq!(source.resolve(0.9), Some(1.0));
        assert_eq!(source.resolve(0.9), Some(2.0));
        assert_eq!(source.resolve(0.9), None);

        source.reset();
        assert_eq!(source.resolve(0.0), Some(1.0));
    }

    #[test]
    fn test_param_name_display() {
        let names: Vec<String> = ParamName::ALL.iter().map(|n| n.to_string()).collect();
        assert_eq!(names, ["start", "stop", "rate", "phase", "mul", "offset"]);
    }
}
