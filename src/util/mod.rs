//! Utility functions
//!
//! Bit-level helpers shared by the table builders and the transform:
//! an index `i` is read as coordinates over the basis v_0..v_{m-1}.

use bitvec::prelude::*;

/// Smallest `k` with `2^k > degree`
///
/// Determines recursion depth and padded vector length `2^k`.
pub fn msb(degree: usize) -> usize {
    (usize::BITS - degree.leading_zeros()) as usize
}

/// Positions of the set bits of `index`, least significant first
pub fn set_bits(index: usize) -> impl Iterator<Item = usize> {
    let bits = BitArray::<usize, Lsb0>::new(index);
    bits.into_iter()
        .enumerate()
        .filter_map(|(position, bit)| bit.then_some(position))
}
