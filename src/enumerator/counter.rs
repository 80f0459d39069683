// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Increment-and-test enumeration.
//!
//! The array is treated as an `n`-digit base-`sigma` counter. Each step
//! increments it and keeps going until the value is normalized, so most
//! visited values are discarded. It yields exactly the arrays of
//! [`Enumerator`](super::Enumerator), in the same order.
//!
//! The walk stops once no further increment can produce a normalized array:
//! when positions `0..sigma-2` hold `0, 1, ..., sigma-3` and position
//! `sigma-2` has passed `sigma-2`. The last normalized array is
//! `0, 1, ..., sigma-1, sigma-1, ...`, and the next counter value that keeps
//! the ascending prefix already has `sigma-1` at position `sigma-2`.
//! For `sigma = 2` the prefix is empty and the test is `array[0] <= 0`.

use crate::array::{is_normalized, ArrayParams, NormalizedArray};

/// Enumerator that filters a mixed-radix counter.
#[derive(Debug, Clone)]
pub struct CounterEnumerator {
    sigma: usize,
    digits: Vec<u8>,
    /// Whether `digits` holds a normalized array not yet handed out.
    pending: bool,
    index: usize,
}

impl CounterEnumerator {
    pub fn new(params: ArrayParams) -> Self {
        let mut enumerator = Self {
            sigma: params.sigma(),
            digits: vec![0; params.length()],
            pending: false,
            index: 0,
        };
        // All zeros is never normalized for sigma >= 2
        enumerator.pending = enumerator.advance();
        enumerator
    }

    /// Whether a normalized array can still be reached by incrementing.
    pub fn has_next(&self) -> bool {
        let prefix_len = self.sigma - 2;
        let ascending_prefix = self.digits[..prefix_len]
            .iter()
            .enumerate()
            .all(|(position, &digit)| digit as usize == position);

        !ascending_prefix || self.digits[prefix_len] as usize <= prefix_len
    }

    /// The current counter value, normalized or not.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Ripple-increment from the last digit. Returns false on overflow.
    fn increment(&mut self) -> bool {
        for digit in self.digits.iter_mut().rev() {
            if *digit as usize + 1 == self.sigma {
                *digit = 0;
            } else {
                *digit += 1;
                return true;
            }
        }
        false
    }

    /// Move to the next normalized value. Returns false if there is none.
    fn advance(&mut self) -> bool {
        while self.has_next() {
            if !self.increment() {
                return false;
            }
            if is_normalized(&self.digits, self.sigma) {
                return true;
            }
        }
        false
    }
}

impl Iterator for CounterEnumerator {
    type Item = (usize, NormalizedArray);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.pending {
            return None;
        }
        let array = NormalizedArray::from_enumeration(self.digits.clone());
        self.index += 1;
        self.pending = self.advance();
        Some((self.index, array))
    }
}

impl std::iter::FusedIterator for CounterEnumerator {}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(length: usize, sigma: usize) -> ArrayParams {
        ArrayParams::new(length, sigma).unwrap()
    }

    #[test]
    fn test_counter_n3_sigma2() {
        let arrays: Vec<_> = CounterEnumerator::new(params(3, 2))
            .map(|(_, array)| array.symbols().to_vec())
            .collect();
        assert_eq!(arrays, vec![vec![0, 0, 1], vec![0, 1, 0], vec![0, 1, 1]]);
    }

    #[test]
    fn test_sigma2_stops_when_first_digit_would_change() {
        let mut enumerator = CounterEnumerator::new(params(3, 2));
        assert_eq!(enumerator.by_ref().count(), 3);
        // Stopped on the first value past the last normalized array
        assert_eq!(enumerator.digits(), &[1, 0, 0]);
        assert!(!enumerator.has_next());
    }

    #[test]
    fn test_sigma2_n2_single_array() {
        let arrays: Vec<_> = CounterEnumerator::new(params(2, 2)).collect();
        assert_eq!(arrays.len(), 1);
        assert_eq!(arrays[0].1.symbols(), &[0, 1]);
    }

    #[test]
    fn test_sigma3_stop_position() {
        let mut enumerator = CounterEnumerator::new(params(4, 3));
        assert_eq!(enumerator.by_ref().count(), 6);
        // Prefix [0] ascending and position 1 has reached 2
        assert_eq!(enumerator.digits(), &[0, 2, 0, 0]);
    }

    #[test]
    fn test_n_equals_sigma() {
        let arrays: Vec<_> = CounterEnumerator::new(params(4, 4)).collect();
        assert_eq!(arrays.len(), 1);
        assert_eq!(arrays[0].1.symbols(), &[0, 1, 2, 3]);
    }
}
