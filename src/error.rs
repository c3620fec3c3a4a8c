//! Error types
//!
//! Running out of values is not an error: patterns signal end of sequence by
//! returning `None`. Errors here are usage errors raised at construction.

use thiserror::Error;

use crate::pattern::ParamName;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A callable-only sampler was given a constant or source parameter
    #[error("{param} must be callable")]
    NotCallable { param: ParamName },
}

pub type Result<T> = std::result::Result<T, PatternError>;
