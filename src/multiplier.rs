//! Evaluate–multiply–interpolate convolution
//!
//! For degrees d1, d2: k = msb(d1 + d2), both operands are zero-padded to
//! 2^k, transformed, multiplied pointwise and interpolated. The evaluation
//! domain has 2^k > d1 + d2 points, so the product is recovered exactly.

use tracing::trace;

use crate::algebra::{BinaryField, Polynomial};
use crate::psi::Psi;
use crate::util::msb;
use crate::FftError;

/// Polynomial multiplication on top of an explicit operator
#[derive(Debug, Clone, Copy)]
pub struct PolynomialMultiplier<'a, F: BinaryField> {
    psi: &'a Psi<F>,
    normalized: bool,
    trim: bool,
}

impl<'a, F: BinaryField> PolynomialMultiplier<'a, F> {
    /// Multiplier over `psi`, unnormalized coefficients, no trimming
    pub fn new(psi: &'a Psi<F>) -> Self {
        Self {
            psi,
            normalized: false,
            trim: false,
        }
    }

    /// Interpret coefficients in the normalized basis.
    pub fn with_normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }

    /// Strip trailing zero coefficients from products.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Transform size `k` needed for `lhs · rhs`
    pub fn product_size(lhs: &Polynomial<F>, rhs: &Polynomial<F>) -> usize {
        msb(lhs.degree() + rhs.degree())
    }

    /// `lhs · rhs`, with `degree() == lhs.degree() + rhs.degree()` unless trimming
    pub fn multiply(
        &self,
        lhs: &Polynomial<F>,
        rhs: &Polynomial<F>,
    ) -> Result<Polynomial<F>, FftError> {
        let product_degree = lhs.degree() + rhs.degree();
        let k = msb(product_degree);
        if k > self.psi.degree() {
            return Err(FftError::DegreeTooLarge {
                requested: k,
                max: self.psi.degree(),
            });
        }
        trace!(product_degree, k, "multiplying polynomials");

        let mut left = lhs.padded(k)?;
        let mut right = rhs.padded(k)?;
        self.psi.transform_in_place(&mut left, k, self.normalized)?;
        self.psi.transform_in_place(&mut right, k, self.normalized)?;

        for (l, r) in left.iter_mut().zip(&right) {
            *l *= r;
        }

        self.psi.inverse_in_place(&mut left, k, self.normalized)?;
        left.truncate(product_degree + 1);

        let product = Polynomial::new(left);
        Ok(if self.trim { product.trimmed() } else { product })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::Gf16;
    use ff::Field;

    fn poly(values: &[u64]) -> Polynomial<Gf16> {
        Polynomial::from_bits(values).unwrap()
    }

    #[test]
    fn test_reference_product() {
        let psi = Psi::new(4, Gf16::ZERO).unwrap();
        let product = PolynomialMultiplier::new(&psi)
            .multiply(&poly(&[15, 12, 3, 6]), &poly(&[2, 7]))
            .unwrap();
        assert_eq!(product, poly(&[13, 2, 2, 4, 1]));
    }

    #[test]
    fn test_product_with_shifted_monomial() {
        let psi = Psi::new(4, Gf16::ZERO).unwrap();
        let product = poly(&[15, 12, 3, 6])
            .mul_with(&poly(&[0, 0, 0, 0, 15]), &psi)
            .unwrap();
        assert_eq!(product, poly(&[0, 0, 0, 0, 10, 8, 2, 4]));
    }

    #[test]
    fn test_product_independent_of_shift() {
        let f = poly(&[15, 12, 3, 6]);
        let g = poly(&[2, 7]);
        for shift in 0..16 {
            let psi = Psi::new(4, Gf16::from_bits_truncated(shift)).unwrap();
            assert_eq!(f.mul_with(&g, &psi).unwrap(), poly(&[13, 2, 2, 4, 1]));
        }
    }

    #[test]
    fn test_normalized_product() {
        let psi = Psi::new(4, Gf16::ZERO).unwrap();
        let product = PolynomialMultiplier::new(&psi)
            .with_normalized(true)
            .multiply(&poly(&[15, 12, 3, 6]), &poly(&[2, 7]))
            .unwrap();
        assert_eq!(product, poly(&[13, 2, 12, 4, 6]));
    }

    #[test]
    fn test_trim_and_size_limit() {
        let psi = Psi::new(3, Gf16::ZERO).unwrap();
        let multiplier = PolynomialMultiplier::new(&psi).with_trim(true);
        let product = multiplier.multiply(&poly(&[1, 0, 0]), &poly(&[5])).unwrap();
        assert_eq!(product, poly(&[5]));

        let big = poly(&[1; 8]);
        assert_eq!(PolynomialMultiplier::product_size(&big, &big), 4);
        assert_eq!(
            multiplier.multiply(&big, &big),
            Err(FftError::DegreeTooLarge {
                requested: 4,
                max: 3
            })
        );
    }
}
