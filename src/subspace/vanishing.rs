//! Subspace polynomials
//!
//! s_0(ω) = ω, s_k(ω) = s_{k-1}(ω) · s_{k-1}(ω − v_{k-1}).
//! s_k has degree 2^k and vanishes exactly on span{v_0, …, v_{k-1}}.

use crate::algebra::BinaryField;

/// Evaluate s_k at `omega` for the basis `vectors`
///
/// Cost: O(2^k) multiplications. Only used to build tables.
pub fn evaluate_vanishing<F: BinaryField>(k: usize, omega: F, vectors: &[F]) -> F {
    if k == 0 {
        return omega;
    }
    evaluate_vanishing(k - 1, omega, vectors)
        * evaluate_vanishing(k - 1, omega - vectors[k - 1], vectors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::Gf16;
    use ff::Field;

    fn standard() -> Vec<Gf16> {
        (0..4).map(|i| Gf16::from_bits_truncated(1 << i)).collect()
    }

    #[test]
    fn test_s0_is_identity() {
        let basis = standard();
        for v in 0..16 {
            let omega = Gf16::from_bits_truncated(v);
            assert_eq!(evaluate_vanishing(0, omega, &basis), omega);
        }
    }

    #[test]
    fn test_vanishes_exactly_on_span() {
        let basis = standard();
        for k in 0..=4 {
            for v in 0..16u64 {
                let value = evaluate_vanishing(k, Gf16::from_bits_truncated(v), &basis);
                let in_span = v < (1 << k);
                assert_eq!(
                    value == Gf16::ZERO,
                    in_span,
                    "s_{}({}) = {}",
                    k,
                    v,
                    value
                );
            }
        }
    }

    #[test]
    fn test_additive() {
        let basis = standard();
        for k in 0..4 {
            for a in 0..16 {
                for b in 0..16 {
                    let x = Gf16::from_bits_truncated(a);
                    let y = Gf16::from_bits_truncated(b);
                    assert_eq!(
                        evaluate_vanishing(k, x + y, &basis),
                        evaluate_vanishing(k, x, &basis) + evaluate_vanishing(k, y, &basis)
                    );
                }
            }
        }
    }
}
