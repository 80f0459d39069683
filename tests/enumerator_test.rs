// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the two enumerators.
//!
//! These tests validate that:
//! - Both enumerators yield exactly S(n, sigma) arrays
//! - Arrays come out normalized, distinct and in lexicographic order
//! - The backtracking and counter enumerators agree with brute force

mod common;

use common::{brute_force, params, stirling2};
use distinct_arrays::array::is_normalized;
use distinct_arrays::enumerator::{expected_count, CounterEnumerator, Enumerator};
use distinct_arrays::state::Counters;

fn backtracking(length: usize, sigma: usize) -> Vec<Vec<u8>> {
    Enumerator::new(params(length, sigma))
        .map(|(_, array)| array.symbols().to_vec())
        .collect()
}

fn counter(length: usize, sigma: usize) -> Vec<Vec<u8>> {
    CounterEnumerator::new(params(length, sigma))
        .map(|(_, array)| array.symbols().to_vec())
        .collect()
}

#[test]
fn test_counts_match_stirling_numbers() {
    for length in 2..=9 {
        for sigma in 2..=length {
            let count = Enumerator::new(params(length, sigma)).count() as u64;
            assert_eq!(count, stirling2(length, sigma), "n={} sigma={}", length, sigma);
            assert_eq!(count, expected_count(params(length, sigma)));
        }
    }
}

#[test]
fn test_arrays_are_normalized_and_sorted() {
    let arrays = backtracking(7, 3);
    assert_eq!(arrays.len(), 301);
    for array in &arrays {
        assert!(is_normalized(array, 3), "{:?}", array);
    }
    for pair in arrays.windows(2) {
        assert!(pair[0] < pair[1], "{:?} !< {:?}", pair[0], pair[1]);
    }
}

#[test]
fn test_backtracking_matches_brute_force() {
    for length in 2..=8 {
        for sigma in 2..=length.min(5) {
            assert_eq!(
                backtracking(length, sigma),
                brute_force(length, sigma),
                "n={} sigma={}",
                length,
                sigma
            );
        }
    }
}

#[test]
fn test_counter_matches_backtracking() {
    for length in 2..=8 {
        for sigma in 2..=length {
            assert_eq!(
                counter(length, sigma),
                backtracking(length, sigma),
                "n={} sigma={}",
                length,
                sigma
            );
        }
    }
}

#[test]
fn test_sigma_equals_length() {
    for length in 2..=16 {
        let arrays = backtracking(length, length);
        let expected: Vec<u8> = (0..length as u8).collect();
        assert_eq!(arrays, vec![expected]);
    }
}

#[test]
fn test_sigma_two() {
    // Every array is 0 followed by a non-zero bit pattern
    let arrays = backtracking(5, 2);
    assert_eq!(arrays.len(), 15);
    assert_eq!(arrays.first().unwrap(), &vec![0, 0, 0, 0, 1]);
    assert_eq!(arrays.last().unwrap(), &vec![0, 1, 1, 1, 1]);
    assert_eq!(counter(5, 2), arrays);
}

#[test]
fn test_n4_sigma3_listing() {
    assert_eq!(
        backtracking(4, 3),
        vec![
            vec![0, 0, 1, 2],
            vec![0, 1, 0, 2],
            vec![0, 1, 1, 2],
            vec![0, 1, 2, 0],
            vec![0, 1, 2, 1],
            vec![0, 1, 2, 2],
        ]
    );
}

#[test]
fn test_largest_length() {
    let enumerator = Enumerator::new(params(16, 15));
    assert_eq!(enumerator.count() as u64, stirling2(16, 15));
    assert_eq!(stirling2(16, 15), 120);
}

#[test]
fn test_statistics_after_exhaustion() {
    let mut enumerator = Enumerator::new(params(6, 3));
    let produced = enumerator.by_ref().count();
    assert_eq!(produced, 90);
    assert_eq!(
        enumerator.statistics().get(Counters::NormalizedArrays),
        90
    );
    // No dead ends: every placed symbol leads to at least one array
    assert!(enumerator.statistics().get(Counters::Candidates) >= 90);
    assert!(enumerator.engine_statistics().is_none());
    assert!(enumerator.next().is_none());
}
