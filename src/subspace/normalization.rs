//! Normalization constants
//!
//! p_i = Π_{b ∈ bits(i)} s_b(v_b). Multiplying coefficient i by p_i maps the
//! unnormalized basis X̂_i = Π s_b(x) onto the transform's native basis
//! X_i = Π s_b(x)/s_b(v_b); dividing maps back.

use super::SubspaceBasis;
use crate::algebra::BinaryField;
use crate::util::set_bits;

/// Table of p_i and 1/p_i for i in [0, 2^degree)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationTable<F: BinaryField> {
    constants: Vec<F>,
    inverses: Vec<F>,
}

impl<F: BinaryField> NormalizationTable<F> {
    /// Build the table for the first `degree` basis vectors
    pub fn build(basis: &SubspaceBasis<F>, degree: usize) -> Self {
        let size = 1usize << degree;
        let mut constants = Vec::with_capacity(size);
        let mut inverses = Vec::with_capacity(size);

        for i in 0..size {
            let mut constant = F::ONE;
            let mut inverse = F::ONE;
            for bit in set_bits(i) {
                constant *= basis.vanishing_at_basis(bit);
                inverse *= basis.vanishing_at_basis_inv(bit);
            }
            constants.push(constant);
            inverses.push(inverse);
        }

        Self {
            constants,
            inverses,
        }
    }

    /// Number of constants (2^degree)
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    /// Never true for a built table: degree 0 still holds p_0 = 1
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    /// All constants p_0..p_{2^degree - 1}
    pub fn constants(&self) -> &[F] {
        &self.constants
    }

    /// Multiply coefficient i by p_i (unnormalized → native)
    pub fn scale(&self, coeffs: &mut [F]) {
        for (coeff, constant) in coeffs.iter_mut().zip(&self.constants) {
            *coeff *= constant;
        }
    }

    /// Divide coefficient i by p_i (native → unnormalized)
    pub fn unscale(&self, coeffs: &mut [F]) {
        for (coeff, inverse) in coeffs.iter_mut().zip(&self.inverses) {
            *coeff *= inverse;
        }
    }
}
