//! # Additive FFT over Binary Extension Fields
//!
//! Fast evaluation and interpolation of polynomials over GF(2^m) using the
//! characteristic-2 analogue of the FFT, giving O(n log n) polynomial
//! multiplication in place of O(n²) convolution.
//!
//! ## Core Algorithm
//!
//! 1. **Subspace basis**: v_0..v_{m-1} spanning GF(2^m) over GF(2)
//! 2. **Subspace polynomials**: s_k vanishes exactly on span{v_0..v_{k-1}}
//! 3. **Tables**: ratio constants s_j(β)/s_j(v_j) and normalization constants p_i
//! 4. **Butterfly network**: recursive split onto two half-dimensional cosets
//!
//! Result: 2^k evaluations on the coset β + span{v_0..v_{k-1}} in O(k·2^k)
//! field operations.
//!
//! ## Usage Example
//!
//! ```
//! use additive_fft::algebra::{BinaryField, Gf16, Polynomial};
//! use additive_fft::Psi;
//!
//! let psi = Psi::new(4, Gf16::from_bits(0)?)?;
//! let f = Polynomial::<Gf16>::from_bits(&[15, 12, 3, 6])?;
//! let g = Polynomial::<Gf16>::from_bits(&[2, 7])?;
//!
//! let product = f.mul_with(&g, &psi)?;
//! assert_eq!(product, Polynomial::from_bits(&[13, 2, 2, 4, 1])?);
//! # Ok::<(), additive_fft::FftError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules - each implements a key component of the algorithm
pub mod algebra;    // Field arithmetic and the polynomial container
pub mod subspace;   // Basis, subspace polynomials, normalization table
pub mod psi;        // Forward/inverse additive FFT operator
pub mod multiplier; // Evaluate-multiply-interpolate convolution
pub mod util;       // Helper functions

// Re-exports for convenience
pub use algebra::{BinaryField, FieldError, Gf16, Gf256, Gf65536, Polynomial};
pub use multiplier::PolynomialMultiplier;
pub use psi::Psi;
pub use subspace::{NormalizationTable, SubspaceBasis};

use thiserror::Error;

/// Configuration parameters for an FFT operator
///
/// Tables depend only on field, degree and shift, so one configuration
/// describes one immutable operator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperatorConfig {
    /// Number of basis vectors m; transforms accept any `k ≤ degree`.
    pub degree: usize,

    /// Shift β as an integer in monomial coordinates.
    pub shift: u64,

    /// Default coefficient representation for callers of the operator.
    ///
    /// Operator tables do not depend on it: [`Psi::from_config`] ignores it
    /// and each transform call takes its own `normalized` argument.
    pub normalized: bool,
}

impl OperatorConfig {
    /// Full-size operator over `F`: degree = extension degree, zero shift
    pub fn for_field<F: BinaryField>() -> Self {
        Self {
            degree: F::DEGREE as usize,
            shift: 0,
            normalized: false,
        }
    }

    /// Smallest operator able to multiply into a product of `product_degree`
    pub fn for_product_degree(product_degree: usize) -> Self {
        Self {
            degree: util::msb(product_degree),
            shift: 0,
            normalized: false,
        }
    }

    /// Set the shift β.
    pub fn with_shift(mut self, shift: u64) -> Self {
        self.shift = shift;
        self
    }

    /// Set the coefficient representation.
    pub fn with_normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }

    /// Set the number of basis vectors.
    pub fn with_degree(mut self, degree: usize) -> Self {
        self.degree = degree;
        self
    }

    /// Largest vector length a transform with this configuration accepts
    pub fn transform_len(&self) -> usize {
        1usize << self.degree
    }

    /// Check the configuration against field `F`.
    pub fn validate<F: BinaryField>(&self) -> Result<(), FftError> {
        if self.degree > F::DEGREE as usize {
            return Err(FftError::DegreeExceedsField {
                degree: self.degree,
                field_degree: F::DEGREE,
            });
        }
        F::from_bits(self.shift)?;
        Ok(())
    }
}

/// Errors that can occur while building or applying a transform
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FftError {
    /// Basis vectors are linearly dependent over GF(2)
    #[error("not a basis: combination {combination:#b} of basis vectors sums to zero")]
    Basis {
        /// Bit mask of the basis vectors whose sum vanished.
        combination: u64,
    },

    /// Field arithmetic failed
    #[error("field error: {0}")]
    Field(#[from] FieldError),

    /// Input vector length is not `2^k`
    #[error("length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// Required length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },

    /// Requested transform size exceeds the operator's degree
    #[error("transform size 2^{requested} exceeds operator degree {max}")]
    DegreeTooLarge {
        /// Requested `k`.
        requested: usize,
        /// Configured degree.
        max: usize,
    },

    /// More basis vectors requested than the field dimension
    #[error("degree {degree} exceeds field extension degree {field_degree}")]
    DegreeExceedsField {
        /// Requested number of basis vectors.
        degree: usize,
        /// Extension degree of the field.
        field_degree: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_degree_config() {
        let config = OperatorConfig::for_product_degree(4);
        assert_eq!(config.degree, 3);
        assert_eq!(config.transform_len(), 8);

        let config = OperatorConfig::for_product_degree(7);
        assert_eq!(config.degree, 3);
    }

    #[test]
    fn test_config_validation() {
        assert!(OperatorConfig::for_field::<Gf16>().validate::<Gf16>().is_ok());
        assert_eq!(
            OperatorConfig::for_field::<Gf256>().validate::<Gf16>(),
            Err(FftError::DegreeExceedsField {
                degree: 8,
                field_degree: 4
            })
        );
        assert!(matches!(
            OperatorConfig::for_field::<Gf16>()
                .with_shift(16)
                .validate::<Gf16>(),
            Err(FftError::Field(FieldError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_normalized_flag_does_not_change_operator() {
        let plain = OperatorConfig::for_field::<Gf16>().with_shift(7);
        let normalized = plain.clone().with_normalized(true);
        assert_eq!(
            Psi::<Gf16>::from_config(&plain).unwrap(),
            Psi::<Gf16>::from_config(&normalized).unwrap()
        );
    }
}
