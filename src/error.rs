// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types.
//!
//! Only genuinely exceptional conditions are errors. Lookup misses (unknown
//! array index, array not present, unregistered signature) are reported as
//! `None` by the query methods.

use thiserror::Error;

/// Rejected enumeration parameters.
///
/// Raised by [`ArrayParams::new`](crate::array::ArrayParams::new) before any
/// enumeration work starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The alphabet must have at least two symbols.
    #[error("sigma must be at least 2 (got {sigma})")]
    SigmaTooSmall { sigma: usize },

    /// Every symbol must appear, so the array cannot be shorter than the alphabet.
    #[error("sigma must be at most n (got n={length}, sigma={sigma})")]
    LengthBelowSigma { length: usize, sigma: usize },

    /// The signature of longer arrays would not fit in 128 bits.
    #[error("n must be at most {max} (got {length})")]
    LengthTooLarge { length: usize, max: usize },
}

/// Failure to read an array literal such as `1,2,1` or `1 2 1`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseArrayError {
    #[error("array literal is empty")]
    Empty,

    #[error("invalid symbol {token:?}")]
    InvalidToken { token: String },

    /// Symbols are written 1-based, so 0 cannot be mapped to a symbol value.
    #[error("symbols are numbered from 1 (got 0 at position {position})")]
    ZeroSymbol { position: usize },
}

/// A shell command that was recognised but could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("usage: {usage}")]
    MissingArgument { usage: &'static str },

    #[error("invalid array number {token:?}")]
    InvalidIndex { token: String },

    #[error(transparent)]
    InvalidArray(#[from] ParseArrayError),
}
