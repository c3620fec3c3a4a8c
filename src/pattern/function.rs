//! Function samplers
//!
//! Sample a unary function across an input domain, one value per pull.
//!
//! Two variants share a single stepping routine:
//! - [`UnaryFunction`] accepts each shaping parameter as a constant, a lazy
//!   source or a callable of normalized progress `t`.
//! - [`CallableUnaryFunction`] requires every shaping parameter to be a
//!   callable and rejects anything else at construction.

use std::fmt;

use tracing::{debug, trace};

use super::param::{Param, ParamMode, ParamName};
use super::value::Value;
use super::{Pattern, PatternState};
use crate::error::{PatternError, Result};

/// Shaping parameters and step count for a sampler
///
/// # Example
/// ```
/// use unary_pattern::pattern::{Param, SamplerParams};
///
/// let params = SamplerParams {
///     stop: Param::from(2.0),
///     mul: Param::callable(|t| 1.0 - t),
///     ..SamplerParams::default().with_steps(16)
/// };
/// ```
#[derive(Debug)]
pub struct SamplerParams {
    /// Start of the input domain
    pub start: Param,
    /// End of the input domain
    pub stop: Param,
    /// Number of samples per run, re-read on every step
    pub steps: Value,
    /// Multiplies the domain position
    pub rate: Param,
    /// Offsets the domain position
    pub phase: Param,
    /// Multiplies the function output
    pub mul: Param,
    /// Offsets the function output
    pub offset: Param,
}

impl Default for SamplerParams {
    fn default() -> Self {
        Self {
            start: Param::Constant(0.0),
            stop: Param::Constant(1.0),
            steps: Value::Constant(100.0),
            rate: Param::Constant(1.0),
            phase: Param::Constant(0.0),
            mul: Param::Constant(1.0),
            offset: Param::Constant(0.0),
        }
    }
}

impl SamplerParams {
    /// Defaults expressed as constant-returning callables
    pub fn callable_defaults() -> Self {
        Self {
            start: Param::callable(|_| 0.0),
            stop: Param::callable(|_| 1.0),
            steps: Value::Constant(100.0),
            rate: Param::callable(|_| 1.0),
            phase: Param::callable(|_| 0.0),
            mul: Param::callable(|_| 1.0),
            offset: Param::callable(|_| 0.0),
        }
    }

    pub fn with_steps(mut self, steps: impl Into<Value>) -> Self {
        self.steps = steps.into();
        self
    }

    pub fn param(&self, name: ParamName) -> &Param {
        match name {
            ParamName::Start => &self.start,
            ParamName::Stop => &self.stop,
            ParamName::Rate => &self.rate,
            ParamName::Phase => &self.phase,
            ParamName::Mul => &self.mul,
            ParamName::Offset => &self.offset,
        }
    }

    fn reset(&mut self) {
        self.start.reset();
        self.stop.reset();
        self.steps.reset();
        self.rate.reset();
        self.phase.reset();
        self.mul.reset();
        self.offset.reset();
    }
}

/// Stepping state shared by both sampler variants
struct FunctionSampler {
    function: Box<dyn Fn(f64) -> f64>,
    params: SamplerParams,
    /// Index of the next sample
    cursor: usize,
    /// Latched once a pull ends the run; cleared by reset
    exhausted: bool,
}

impl FunctionSampler {
    fn new(variant: &'static str, function: Box<dyn Fn(f64) -> f64>, params: SamplerParams) -> Self {
        debug!(
            variant,
            steps = %params.steps,
            start = ?params.start.mode(),
            stop = ?params.stop.mode(),
            rate = ?params.rate.mode(),
            phase = ?params.phase.mode(),
            mul = ?params.mul.mode(),
            offset = ?params.offset.mode(),
            "created function sampler"
        );
        Self {
            function,
            params,
            cursor: 0,
            exhausted: false,
        }
    }

    fn next_value(&mut self) -> Option<f64> {
        if self.exhausted {
            return None;
        }

        let value = self.step();
        if value.is_none() {
            self.exhausted = true;
            trace!(cursor = self.cursor, "function sampler exhausted");
        }
        value
    }

    fn step(&mut self) -> Option<f64> {
        let steps = self.params.steps.resolve()?;
        let cursor = self.cursor as f64;
        if steps.is_nan() || cursor >= steps {
            return None;
        }

        let t = if steps <= 1.0 {
            0.0
        } else {
            cursor / (steps - 1.0)
        };

        let start = self.params.start.resolve(t)?;
        let stop = self.params.stop.resolve(t)?;
        let mut x = if steps <= 1.0 {
            start
        } else {
            start + (stop - start) * t
        };

        let rate = self.params.rate.resolve(t)?;
        let phase = self.params.phase.resolve(t)?;
        x = x * rate + phase;

        // Advance before evaluating so the position already reflects this sample
        self.cursor += 1;
        let value = (self.function)(x);

        let mul = self.params.mul.resolve(t)?;
        let offset = self.params.offset.resolve(t)?;
        let shaped = value * mul + offset;

        trace!(cursor, t, x, value = shaped, "sampled function");
        Some(shaped)
    }

    fn reset(&mut self) {
        self.cursor = 0;
        self.exhausted = false;
        self.params.reset();
        debug!("function sampler reset");
    }

    fn state(&self) -> PatternState {
        if self.exhausted {
            return PatternState::Exhausted;
        }
        match self.params.steps.as_constant() {
            Some(steps) if steps.is_nan() || self.cursor as f64 >= steps => {
                PatternState::Exhausted
            }
            _ => PatternState::Active,
        }
    }

    fn fmt_with(&self, f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
        let p = &self.params;
        write!(
            f,
            "{}(<fn>, {}, {}, {}, rate={}, phase={}, mul={}, offset={})",
            name, p.start, p.stop, p.steps, p.rate, p.phase, p.mul, p.offset
        )
    }
}

/// Samples a function with constant, source or callable shaping parameters
///
/// # Example
/// ```
/// use unary_pattern::pattern::{Pattern, SamplerParams, UnaryFunction};
///
/// let mut square = UnaryFunction::new(|x| x * x, SamplerParams::default().with_steps(5));
/// assert_eq!(square.next_n(5), vec![0.0, 0.0625, 0.25, 0.5625, 1.0]);
/// assert_eq!(square.next_value(), None);
/// ```
pub struct UnaryFunction {
    sampler: FunctionSampler,
}

impl UnaryFunction {
    pub const ABBREVIATION: &'static str = "punary";

    /// Create a sampler; `function` is not evaluated until the first pull
    pub fn new(function: impl Fn(f64) -> f64 + 'static, params: SamplerParams) -> Self {
        Self {
            sampler: FunctionSampler::new(Self::ABBREVIATION, Box::new(function), params),
        }
    }

    /// Sample `function` over `[start, stop]` with default shaping
    pub fn sample(
        function: impl Fn(f64) -> f64 + 'static,
        start: impl Into<Param>,
        stop: impl Into<Param>,
        steps: impl Into<Value>,
    ) -> Self {
        let params = SamplerParams {
            start: start.into(),
            stop: stop.into(),
            ..SamplerParams::default().with_steps(steps)
        };
        Self::new(function, params)
    }

    /// Index of the next sample
    pub fn cursor(&self) -> usize {
        self.sampler.cursor
    }

    pub fn mode(&self, name: ParamName) -> ParamMode {
        self.sampler.params.param(name).mode()
    }
}

impl Pattern for UnaryFunction {
    fn next_value(&mut self) -> Option<f64> {
        self.sampler.next_value()
    }

    fn reset(&mut self) {
        self.sampler.reset();
    }

    fn state(&self) -> PatternState {
        self.sampler.state()
    }
}

impl Iterator for UnaryFunction {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.next_value()
    }
}

impl fmt::Debug for UnaryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.sampler.fmt_with(f, "UnaryFunction")
    }
}

impl fmt::Display for UnaryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.sampler.fmt_with(f, "UnaryFunction")
    }
}

/// Samples a function whose shaping parameters are all callables of `t`
///
/// The step count may still be a constant or a source.
pub struct CallableUnaryFunction {
    sampler: FunctionSampler,
}

impl CallableUnaryFunction {
    pub const ABBREVIATION: &'static str = "pcallunary";

    /// Create a sampler, rejecting any shaping parameter that is not callable
    ///
    /// # Errors
    /// [`PatternError::NotCallable`] naming the first offending parameter.
    ///
    /// # Example
    /// ```
    /// use unary_pattern::pattern::{CallableUnaryFunction, Param, Pattern, SamplerParams};
    ///
    /// let params = SamplerParams {
    ///     mul: Param::callable(|_| 2.0),
    ///     offset: Param::callable(|t| t),
    ///     ..SamplerParams::callable_defaults().with_steps(3)
    /// };
    /// let mut f = CallableUnaryFunction::new(|x| x * x, params).unwrap();
    /// assert_eq!(f.next_n(3), vec![0.0, 1.0, 3.0]);
    /// ```
    pub fn new(function: impl Fn(f64) -> f64 + 'static, params: SamplerParams) -> Result<Self> {
        if let Some(param) = ParamName::ALL
            .into_iter()
            .find(|&name| !params.param(name).is_callable())
        {
            return Err(PatternError::NotCallable { param });
        }

        Ok(Self {
            sampler: FunctionSampler::new(Self::ABBREVIATION, Box::new(function), params),
        })
    }

    /// Index of the next sample
    pub fn cursor(&self) -> usize {
        self.sampler.cursor
    }
}

impl Pattern for CallableUnaryFunction {
    fn next_value(&mut self) -> Option<f64> {
        self.sampler.next_value()
    }

    fn reset(&mut self) {
        self.sampler.reset();
    }

    fn state(&self) -> PatternState {
        self.sampler.state()
    }
}

impl Iterator for CallableUnaryFunction {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.next_value()
    }
}

impl fmt::Debug for CallableUnaryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.sampler.fmt_with(f, "CallableUnaryFunction")
    }
}

impl fmt::Display for CallableUnaryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.sampler.fmt_with(f, "CallableUnaryFunction")
    }
}
