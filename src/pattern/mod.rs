pub mod function;
pub mod param;
pub mod sequence;
pub mod value;

pub use function::{CallableUnaryFunction, SamplerParams, UnaryFunction};
pub use param::{Param, ParamMode, ParamName};
pub use sequence::{Sequence, Series};
pub use value::Value;

/// Represents the current state of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternState {
    /// Pattern can still produce values
    Active,
    /// Pattern has run out and will produce nothing until reset
    Exhausted,
}

/// Core trait for all lazy value sources
///
/// Patterns produce values one at a time, only when pulled.
/// Each pattern owns its own playback position; nothing is shared between instances.
pub trait Pattern {
    /// Pull the next value
    ///
    /// # Returns
    /// * `Some(value)` while the pattern is active
    /// * `None` once the pattern is exhausted (end of sequence)
    fn next_value(&mut self) -> Option<f64>;

    /// Reset the pattern to its initial state
    ///
    /// This allows patterns to be replayed rather than recreated.
    fn reset(&mut self);

    /// Current state of the pattern
    ///
    /// Sources that cannot know their length ahead of time report
    /// `Active` until a pull has actually returned `None`.
    fn state(&self) -> PatternState;

    /// Pull up to `n` values, stopping early at end of sequence
    fn next_n(&mut self, n: usize) -> Vec<f64> {
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            match self.next_value() {
                Some(value) => values.push(value),
                None => break,
            }
        }
        values
    }
}

impl<P: Pattern + ?Sized> Pattern for Box<P> {
    fn next_value(&mut self) -> Option<f64> {
        (**self).next_value()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn state(&self) -> PatternState {
        (**self).state()
    }
}
