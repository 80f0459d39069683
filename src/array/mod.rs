// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Normalized arrays and their enumeration parameters.
//!
//! A normalized array of length `n` over an alphabet of size `sigma` is a
//! restricted-growth string: every symbol `0..sigma` occurs, and the first
//! occurrence of symbol `k + 1` comes after the first occurrence of symbol `k`.
//! It is the canonical representative of a sequence under symbol relabeling.
//!
//! Symbols are stored 0-based and displayed 1-based.
//!
//! # Examples
//!
//! ```
//! use distinct_arrays::array::{is_normalized, parse_literal, ArrayParams};
//!
//! let params = ArrayParams::new(3, 2).unwrap();
//! assert_eq!(params.pair_count(), 3);
//!
//! let symbols = parse_literal("1,2,1").unwrap();
//! assert_eq!(symbols, vec![0, 1, 0]);
//! assert!(is_normalized(&symbols, 2));
//! assert!(!is_normalized(&[1, 0, 0], 2));
//! ```

pub mod signature;

pub use signature::{compute_signature, exists_unique, subrange_pairs, Signature};

use crate::error::{ConfigError, ParseArrayError};
use std::fmt;

/// Longest supported array.
///
/// A signature holds one bit per subrange `[i, j]` with `i < j`, which is
/// `16 * 15 / 2 = 120` bits at this length.
pub const MAX_LENGTH: usize = 16;

/// Validated enumeration parameters `(n, sigma)`.
///
/// Invariant: `2 <= sigma <= n <= MAX_LENGTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArrayParams {
    length: usize,
    sigma: usize,
}

impl ArrayParams {
    /// Validate `length` (n) and `sigma`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first violated bound.
    pub fn new(length: usize, sigma: usize) -> Result<Self, ConfigError> {
        if length > MAX_LENGTH {
            return Err(ConfigError::LengthTooLarge {
                length,
                max: MAX_LENGTH,
            });
        }
        if sigma < 2 {
            return Err(ConfigError::SigmaTooSmall { sigma });
        }
        if sigma > length {
            return Err(ConfigError::LengthBelowSigma { length, sigma });
        }
        Ok(Self { length, sigma })
    }

    /// Array length `n`.
    pub fn length(self) -> usize {
        self.length
    }

    /// Alphabet size.
    pub fn sigma(self) -> usize {
        self.sigma
    }

    /// Number of subranges `[i, j]` with `i < j`, i.e. the signature width in bits.
    pub fn pair_count(self) -> usize {
        self.length * (self.length - 1) / 2
    }
}

impl fmt::Display for ArrayParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={} and sigma={}", self.length, self.sigma)
    }
}

/// Check the normalized-array invariant for `symbols` over `sigma` symbols.
///
/// Symbols must be introduced in increasing order and all `sigma` of them
/// must occur.
pub fn is_normalized(symbols: &[u8], sigma: usize) -> bool {
    let mut introduced = 0usize;
    for &symbol in symbols {
        let symbol = symbol as usize;
        if symbol == introduced {
            introduced += 1;
        } else if symbol > introduced {
            return false;
        }
    }
    introduced == sigma
}

/// Parse a 1-based array literal such as `1,2,1`, `1 2 1` or `[1, 2, 1]`.
///
/// Returns 0-based symbols. The result is not checked for normalization.
pub fn parse_literal(text: &str) -> Result<Vec<u8>, ParseArrayError> {
    let tokens = text
        .split(|c: char| c == ',' || c == '[' || c == ']' || c.is_whitespace())
        .filter(|token| !token.is_empty());

    let mut symbols = Vec::new();
    for (position, token) in tokens.enumerate() {
        let value: u8 = token.parse().map_err(|_| ParseArrayError::InvalidToken {
            token: token.to_string(),
        })?;
        if value == 0 {
            return Err(ParseArrayError::ZeroSymbol {
                position: position + 1,
            });
        }
        symbols.push(value - 1);
    }

    if symbols.is_empty() {
        Err(ParseArrayError::Empty)
    } else {
        Ok(symbols)
    }
}

/// A complete normalized array, as yielded by the enumerators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedArray(Vec<u8>);

impl NormalizedArray {
    /// Wrap `symbols` if they form a normalized array over `sigma` symbols.
    pub fn new(symbols: Vec<u8>, sigma: usize) -> Option<Self> {
        if is_normalized(&symbols, sigma) {
            Some(Self(symbols))
        } else {
            None
        }
    }

    /// Wrap symbols produced by an enumerator, which are normalized by construction.
    pub(crate) fn from_enumeration(symbols: Vec<u8>) -> Self {
        debug_assert!(
            is_normalized(&symbols, Self::distinct(&symbols)),
            "enumerator produced a non-normalized array {:?}",
            symbols
        );
        Self(symbols)
    }

    fn distinct(symbols: &[u8]) -> usize {
        symbols.iter().max().map_or(0, |&max| max as usize + 1)
    }

    /// The 0-based symbols.
    pub fn symbols(&self) -> &[u8] {
        &self.0
    }

    /// Array length `n`.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct symbols. For a normalized array this is its `sigma`.
    pub fn sigma(&self) -> usize {
        Self::distinct(&self.0)
    }

    /// Whether some symbol occurs exactly once in positions `start..=end`.
    pub fn exists_unique(&self, start: usize, end: usize) -> bool {
        exists_unique(&self.0, self.sigma(), start, end)
    }

    /// The subrange signature of this array.
    pub fn signature(&self) -> Signature {
        compute_signature(&self.0, self.sigma())
    }
}

impl AsRef<[u8]> for NormalizedArray {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for NormalizedArray {
    /// Format as `[1,2,1]` (1-based symbols).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, symbol) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", *symbol as usize + 1)?;
        }
        write!(f, "]")
    }
}
