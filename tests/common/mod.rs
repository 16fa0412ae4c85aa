#![allow(dead_code)]

use additive_fft::{BinaryField, Polynomial};
use proptest::prelude::*;

/// Field elements from integer literals
pub fn elems<F: BinaryField>(values: &[u64]) -> Vec<F> {
    values
        .iter()
        .map(|&v| F::from_bits(v).expect("value fits in field"))
        .collect()
}

/// Polynomial from integer literals
pub fn poly<F: BinaryField>(values: &[u64]) -> Polynomial<F> {
    Polynomial::from_bits(values).expect("coefficients fit in field")
}

/// Integers of a field with `degree` bits
pub fn field_bits(degree: u32) -> impl Strategy<Value = u64> {
    0u64..(1u64 << degree)
}

/// `(k, coefficients of length 2^k)` with `k <= max_k`
pub fn sized_vector(degree: u32, max_k: usize) -> impl Strategy<Value = (usize, Vec<u64>)> {
    (0..=max_k).prop_flat_map(move |k| {
        (
            Just(k),
            proptest::collection::vec(field_bits(degree), 1usize << k),
        )
    })
}
