//! Basis of the field as a GF(2)-vector space
//!
//! Standard choice: v_i = x^i, i.e. the element with integer value 2^i,
//! so the span element with coordinates `i` is the element with value `i`.

use tracing::debug;

use super::evaluate_vanishing;
use crate::algebra::BinaryField;
use crate::util::set_bits;
use crate::FftError;

/// Validated basis vectors v_0..v_{d-1} with their vanishing values
///
/// Invariant: every nonempty GF(2)-combination of the vectors is nonzero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubspaceBasis<F: BinaryField> {
    vectors: Vec<F>,
    /// s_j(v_j) for each level j
    vanishing: Vec<F>,
    /// 1 / s_j(v_j)
    vanishing_inv: Vec<F>,
}

impl<F: BinaryField> SubspaceBasis<F> {
    /// Monomial basis 1, x, …, x^{degree-1}
    pub fn standard(degree: usize) -> Result<Self, FftError> {
        Self::check_dimension(degree)?;
        let vectors = (0..degree)
            .map(|i| F::from_bits(1u64 << i))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_vectors(vectors)
    }

    /// Validate caller-supplied basis vectors
    pub fn from_vectors(vectors: Vec<F>) -> Result<Self, FftError> {
        Self::check_dimension(vectors.len())?;
        Self::validate(&vectors)?;

        let vanishing: Vec<F> = (0..vectors.len())
            .map(|j| evaluate_vanishing(j, vectors[j], &vectors))
            .collect();
        let vanishing_inv = vanishing
            .iter()
            .map(|value| F::ONE.try_div(value))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(dimension = vectors.len(), "validated subspace basis");

        Ok(Self {
            vectors,
            vanishing,
            vanishing_inv,
        })
    }

    /// Check that no nonempty 0/1 combination of `vectors` sums to zero
    ///
    /// Walks all 2^d − 1 combinations in Gray-code order, one addition each.
    pub fn validate(vectors: &[F]) -> Result<(), FftError> {
        Self::check_dimension(vectors.len())?;

        let mut sum = F::ZERO;
        for step in 1u64..(1u64 << vectors.len()) {
            sum += vectors[step.trailing_zeros() as usize];
            if bool::from(sum.is_zero()) {
                return Err(FftError::Basis {
                    combination: step ^ (step >> 1),
                });
            }
        }
        Ok(())
    }

    fn check_dimension(dimension: usize) -> Result<(), FftError> {
        if dimension > F::DEGREE as usize {
            return Err(FftError::DegreeExceedsField {
                degree: dimension,
                field_degree: F::DEGREE,
            });
        }
        Ok(())
    }

    /// Number of basis vectors
    pub fn dimension(&self) -> usize {
        self.vectors.len()
    }

    /// Basis vectors in order
    pub fn vectors(&self) -> &[F] {
        &self.vectors
    }

    /// v_i
    pub fn vector(&self, i: usize) -> F {
        self.vectors[i]
    }

    /// Span element ω_i whose coordinates over the basis are the bits of `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= 2^dimension`.
    pub fn span_element(&self, index: usize) -> F {
        set_bits(index).map(|b| self.vectors[b]).sum()
    }

    /// s_k(ω)
    pub fn vanishing_at(&self, k: usize, omega: F) -> F {
        evaluate_vanishing(k, omega, &self.vectors)
    }

    /// s_j(v_j), precomputed
    pub fn vanishing_at_basis(&self, j: usize) -> F {
        self.vanishing[j]
    }

    /// 1 / s_j(v_j), precomputed
    pub fn vanishing_at_basis_inv(&self, j: usize) -> F {
        self.vanishing_inv[j]
    }
}
