//! Lazy numeric patterns built by sampling unary functions
//!
//! - [`pattern`]: the pattern trait, value resolution, and the function samplers
//! - [`plot`]: SVG rendering of pulled sequences

pub mod error;
pub mod pattern;
pub mod plot;

pub use error::{PatternError, Result};
pub use pattern::{
    CallableUnaryFunction, Param, ParamMode, ParamName, Pattern, PatternState, SamplerParams,
    UnaryFunction, Value,
};
