// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Subrange signatures packed into a 128-bit integer.
//!
//! For an array of length `n`, the signature has one bit for every subrange
//! `[i, j]` with `i < j`: the bit is set when some symbol occurs exactly once
//! in positions `i..=j`. Pairs are visited with `i` ascending and, for each
//! `i`, `j` ascending; each visited bit is shifted in as the new least
//! significant bit. The first pair `(0, 1)` therefore ends up in the most
//! significant used bit.
//!
//! # Examples
//!
//! ```
//! use distinct_arrays::array::{compute_signature, exists_unique, Signature};
//!
//! // [1,2,1]: every subrange of length >= 2 has a unique symbol
//! let symbols = [0, 1, 0];
//! assert!(exists_unique(&symbols, 2, 0, 2));
//! assert_eq!(compute_signature(&symbols, 2), Signature::from_bits(0b111));
//!
//! // [1,1,2]: the subrange [0, 1] has none
//! assert_eq!(compute_signature(&[0, 0, 1], 2).bits(), 0b011);
//! ```

use super::MAX_LENGTH;
use std::fmt;

/// A subrange signature.
///
/// Only the low `n * (n - 1) / 2` bits are used. Equality of signatures is
/// exactly agreement on every subrange.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature(u128);

impl Signature {
    /// The signature with no bits shifted in.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a signature from its raw bits.
    pub const fn from_bits(bits: u128) -> Self {
        Self(bits)
    }

    /// The raw bits.
    pub fn bits(self) -> u128 {
        self.0
    }

    /// Shift in `bit` as the new least significant bit.
    #[must_use]
    pub fn push(self, bit: bool) -> Self {
        Self((self.0 << 1) | bit as u128)
    }

    /// High 64-bit half.
    pub fn high(self) -> u64 {
        (self.0 >> 64) as u64
    }

    /// Low 64-bit half.
    pub fn low(self) -> u64 {
        self.0 as u64
    }

    /// Number of subranges that contain a unique symbol.
    pub fn count_unique(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Read back the bit for subrange `[start, end]` of an array of `length`.
    ///
    /// # Panics
    ///
    /// Panics unless `start < end < length`.
    pub fn subrange(self, length: usize, start: usize, end: usize) -> bool {
        assert!(
            start < end && end < length,
            "subrange [{}, {}] has no signature bit for length {}",
            start,
            end,
            length
        );
        let pairs = length * (length - 1) / 2;
        let offset = pair_offset(length, start, end);
        (self.0 >> (pairs - 1 - offset)) & 1 != 0
    }
}

impl fmt::Display for Signature {
    /// Format as 32 hex digits, high half first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.high(), self.low())
    }
}

impl fmt::LowerHex for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Position of `(start, end)` in the canonical pair order.
fn pair_offset(length: usize, start: usize, end: usize) -> usize {
    // Rows 0..start contribute (length - 1) + (length - 2) + ... pairs
    start * (length - 1) - start * start.saturating_sub(1) / 2 + (end - start - 1)
}

/// All subranges `[i, j]` with `i < j < length`, in signature order.
pub fn subrange_pairs(length: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..length.saturating_sub(1)).flat_map(move |i| (i + 1..length).map(move |j| (i, j)))
}

/// Whether some symbol occurs exactly once in `symbols[start..=end]`.
///
/// A single position always qualifies.
///
/// # Panics
///
/// Panics if `start > end`, `end` is out of bounds, `sigma > MAX_LENGTH`, or a
/// symbol in the range is not below `sigma`. These are caller bugs.
pub fn exists_unique(symbols: &[u8], sigma: usize, start: usize, end: usize) -> bool {
    assert!(
        start <= end && end < symbols.len(),
        "subrange [{}, {}] out of bounds for length {}",
        start,
        end,
        symbols.len()
    );
    assert!(sigma <= MAX_LENGTH, "sigma {} exceeds {}", sigma, MAX_LENGTH);

    if start == end {
        return true;
    }

    let mut freq = [0u8; MAX_LENGTH];
    for &symbol in &symbols[start..=end] {
        let symbol = symbol as usize;
        assert!(symbol < sigma, "symbol {} out of range for sigma {}", symbol, sigma);
        freq[symbol] += 1;
    }
    freq[..sigma].contains(&1)
}

/// Compute the signature of `symbols` over an alphabet of `sigma` symbols.
///
/// Each row `i` is scanned once, growing `j` and keeping a running count of
/// symbols seen exactly once, so every bit agrees with
/// [`exists_unique`]`(symbols, sigma, i, j)`.
///
/// # Panics
///
/// Panics if the array is longer than [`MAX_LENGTH`] or holds a symbol not
/// below `sigma`.
pub fn compute_signature(symbols: &[u8], sigma: usize) -> Signature {
    let length = symbols.len();
    assert!(length <= MAX_LENGTH, "array length {} exceeds {}", length, MAX_LENGTH);
    assert!(sigma <= MAX_LENGTH, "sigma {} exceeds {}", sigma, MAX_LENGTH);

    let mut signature = Signature::empty();
    for start in 0..length.saturating_sub(1) {
        let mut freq = [0u8; MAX_LENGTH];
        let first = symbols[start] as usize;
        assert!(first < sigma, "symbol {} out of range for sigma {}", first, sigma);
        freq[first] = 1;
        let mut singletons = 1usize;

        for &symbol in &symbols[start + 1..] {
            let symbol = symbol as usize;
            assert!(symbol < sigma, "symbol {} out of range for sigma {}", symbol, sigma);
            freq[symbol] += 1;
            match freq[symbol] {
                1 => singletons += 1,
                2 => singletons -= 1,
                _ => {}
            }
            signature = signature.push(singletons > 0);
        }
    }
    signature
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_order() {
        let signature = Signature::empty().push(true).push(false).push(true);
        assert_eq!(signature.bits(), 0b101);
    }

    #[test]
    fn test_halves() {
        let signature = Signature::from_bits((7u128 << 64) | 9);
        assert_eq!(signature.high(), 7);
        assert_eq!(signature.low(), 9);
        assert_eq!(
            format!("{}", signature),
            "00000000000000070000000000000009"
        );
    }

    #[test]
    fn test_subrange_pairs_order() {
        let pairs: Vec<_> = subrange_pairs(3).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
        assert_eq!(subrange_pairs(16).count(), 120);
        assert_eq!(subrange_pairs(1).count(), 0);
        assert_eq!(subrange_pairs(0).count(), 0);
    }

    #[test]
    fn test_pair_offset_matches_iteration() {
        for length in 2..=MAX_LENGTH {
            for (offset, (i, j)) in subrange_pairs(length).enumerate() {
                assert_eq!(pair_offset(length, i, j), offset);
            }
        }
    }

    #[test]
    fn test_exists_unique_singleton_range() {
        let symbols = [0, 0, 1, 1];
        for i in 0..symbols.len() {
            assert!(exists_unique(&symbols, 2, i, i));
        }
    }

    #[test]
    fn test_exists_unique_ranges() {
        let symbols = [0, 1, 0];
        assert!(exists_unique(&symbols, 2, 0, 1));
        assert!(exists_unique(&symbols, 2, 0, 2));
        assert!(exists_unique(&symbols, 2, 1, 2));

        let symbols = [0, 1, 1, 0];
        assert!(!exists_unique(&symbols, 2, 0, 3));
        assert!(!exists_unique(&symbols, 2, 1, 2));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_exists_unique_reversed_range() {
        exists_unique(&[0, 1, 0], 2, 2, 1);
    }

    #[test]
    #[should_panic(expected = "out of range for sigma")]
    fn test_exists_unique_symbol_out_of_range() {
        exists_unique(&[0, 2, 0], 2, 0, 2);
    }

    #[test]
    fn test_signatures_n3() {
        assert_eq!(compute_signature(&[0, 0, 1], 2).bits(), 0b011);
        assert_eq!(compute_signature(&[0, 1, 0], 2).bits(), 0b111);
        assert_eq!(compute_signature(&[0, 1, 1], 2).bits(), 0b110);
    }

    #[test]
    fn test_signature_matches_exists_unique() {
        let symbols = [0, 1, 0, 2, 2, 1, 3, 0];
        let signature = compute_signature(&symbols, 4);
        for (i, j) in subrange_pairs(symbols.len()) {
            assert_eq!(
                signature.subrange(symbols.len(), i, j),
                exists_unique(&symbols, 4, i, j),
                "pair ({}, {})",
                i,
                j
            );
        }
    }

    #[test]
    fn test_full_width_signature() {
        // Alternating symbols
        let symbols: Vec<u8> = (0..16).map(|i| (i % 2) as u8).collect();
        let signature = compute_signature(&symbols, 2);
        assert!(signature.bits() < 1u128 << 120);
        assert!(signature.subrange(16, 0, 1));
        assert!(!signature.subrange(16, 0, 3));
        assert!(signature.subrange(16, 0, 2));
    }
}
