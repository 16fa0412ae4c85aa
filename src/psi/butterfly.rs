//! Twiddle tables and the in-place butterfly network
//!
//! At level j the sub-coset handled by a butterfly is β + ω + span{v_0..v_j}
//! with ω ∈ span{v_{j+1}..}. Its twiddle is s_j(β + ω)/s_j(v_j), which by
//! additivity of s_j splits into
//!
//! precomputed[j] + Σ_{l ∈ bits(ω)} s_j(v_l)/s_j(v_j)
//!
//! so both tables are built once and every call only sums table entries.

use crate::algebra::BinaryField;
use crate::subspace::SubspaceBasis;
use crate::util::set_bits;

/// Per-level ratio constants shared by every transform call
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TwiddleTable<F: BinaryField> {
    /// s_j(β)/s_j(v_j)
    precomputed: Vec<F>,
    /// ratios[j][l] = s_j(v_l)/s_j(v_j)
    ratios: Vec<Vec<F>>,
}

impl<F: BinaryField> TwiddleTable<F> {
    pub(crate) fn build(basis: &SubspaceBasis<F>, shift: F) -> Self {
        let degree = basis.dimension();
        let mut precomputed = Vec::with_capacity(degree);
        let mut ratios = Vec::with_capacity(degree);

        for j in 0..degree {
            let inv = basis.vanishing_at_basis_inv(j);
            precomputed.push(basis.vanishing_at(j, shift) * inv);

            // s_j vanishes on v_0..v_{j-1} and s_j(v_j)/s_j(v_j) = 1
            let row = (0..degree)
                .map(|l| match l.cmp(&j) {
                    std::cmp::Ordering::Less => F::ZERO,
                    std::cmp::Ordering::Equal => F::ONE,
                    std::cmp::Ordering::Greater => basis.vanishing_at(j, basis.vector(l)) * inv,
                })
                .collect();
            ratios.push(row);
        }

        Self {
            precomputed,
            ratios,
        }
    }

    pub(crate) fn precomputed(&self) -> &[F] {
        &self.precomputed
    }

    /// Twiddle for `level` on the sub-coset whose offset has coordinates `offset`
    pub(crate) fn twiddle(&self, level: usize, offset: usize) -> F {
        let row = &self.ratios[level];
        set_bits(offset).fold(self.precomputed[level], |acc, l| acc + row[l])
    }
}

/// Forward network over `data` of length 2^k, native coefficients in,
/// evaluations out
pub(crate) fn forward_in_place<F: BinaryField>(
    twiddles: &TwiddleTable<F>,
    data: &mut [F],
    k: usize,
) {
    for level in (0..k).rev() {
        let half = 1usize << level;
        for (block, chunk) in data.chunks_exact_mut(half << 1).enumerate() {
            let twiddle = twiddles.twiddle(level, block << (level + 1));
            let (low, high) = chunk.split_at_mut(half);
            for (lo, hi) in low.iter_mut().zip(high.iter_mut()) {
                *lo += twiddle * *hi;
                *hi += *lo;
            }
        }
    }
}

/// Inverse network, undoing [`forward_in_place`] level by level
pub(crate) fn inverse_in_place<F: BinaryField>(
    twiddles: &TwiddleTable<F>,
    data: &mut [F],
    k: usize,
) {
    for level in 0..k {
        let half = 1usize << level;
        for (block, chunk) in data.chunks_exact_mut(half << 1).enumerate() {
            let twiddle = twiddles.twiddle(level, block << (level + 1));
            let (low, high) = chunk.split_at_mut(half);
            for (lo, hi) in low.iter_mut().zip(high.iter_mut()) {
                *hi += *lo;
                *lo += twiddle * *hi;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::Gf16;
    use ff::Field;

    fn table(shift: u64) -> TwiddleTable<Gf16> {
        let basis = SubspaceBasis::standard(4).unwrap();
        TwiddleTable::build(&basis, Gf16::from_bits_truncated(shift))
    }

    #[test]
    fn test_zero_shift_has_zero_precomputed() {
        let twiddles = table(0);
        assert!(twiddles.precomputed().iter().all(|t| *t == Gf16::ZERO));
    }

    #[test]
    fn test_twiddle_matches_direct_ratio() {
        let basis = SubspaceBasis::<Gf16>::standard(4).unwrap();
        for shift in 0..16 {
            let twiddles = table(shift);
            for level in 0..4 {
                for coset in 0..(16 >> (level + 1)) {
                    let offset = coset << (level + 1);
                    let point = Gf16::from_bits_truncated(shift) + basis.span_element(offset);
                    let expected = basis.vanishing_at(level, point)
                        * basis.vanishing_at_basis_inv(level);
                    assert_eq!(twiddles.twiddle(level, offset), expected);
                }
            }
        }
    }

    #[test]
    fn test_network_round_trip() {
        let twiddles = table(7);
        let original: Vec<Gf16> = (0..16).map(|v| Gf16::from_bits_truncated(v * 3 + 1)).collect();
        let mut data = original.clone();
        forward_in_place(&twiddles, &mut data, 4);
        inverse_in_place(&twiddles, &mut data, 4);
        assert_eq!(data, original);
    }
}
