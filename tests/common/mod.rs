// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use distinct_arrays::array::{is_normalized, ArrayParams};

pub fn params(length: usize, sigma: usize) -> ArrayParams {
    ArrayParams::new(length, sigma).unwrap()
}

/// Stirling number of the second kind, by the explicit recurrence.
pub fn stirling2(n: usize, k: usize) -> u64 {
    match (n, k) {
        (0, 0) => 1,
        (_, 0) | (0, _) => 0,
        _ if k > n => 0,
        _ => k as u64 * stirling2(n - 1, k) + stirling2(n - 1, k - 1),
    }
}

/// Every array in `0..sigma` of the given length that is normalized, in
/// lexicographic order. Visits all `sigma^length` arrays.
pub fn brute_force(length: usize, sigma: usize) -> Vec<Vec<u8>> {
    let total = (sigma as u64).pow(length as u32);
    (0..total)
        .map(|mut value| {
            let mut digits = vec![0u8; length];
            for digit in digits.iter_mut().rev() {
                *digit = (value % sigma as u64) as u8;
                value /= sigma as u64;
            }
            digits
        })
        .filter(|digits| is_normalized(digits, sigma))
        .collect()
}

/// Whether some symbol occurs exactly once in `symbols[start..=end]`, by
/// counting each candidate directly.
pub fn naive_exists_unique(symbols: &[u8], start: usize, end: usize) -> bool {
    let range = &symbols[start..=end];
    range
        .iter()
        .any(|symbol| range.iter().filter(|&other| other == symbol).count() == 1)
}
