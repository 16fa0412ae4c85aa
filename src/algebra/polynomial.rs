//! Polynomial container
//!
//! Coefficients are stored low-to-high. Their meaning is fixed by the
//! basis the caller works in: X̂_i = Π_{b ∈ bits(i)} s_b(x) (unnormalized)
//! or X_i = X̂_i / p_i (normalized). Both bases have deg X_i = i, so
//! `degree` and `msb` read the same either way.

use std::fmt;
use std::ops::Add;

use super::{BinaryField, FieldError};
use crate::multiplier::PolynomialMultiplier;
use crate::psi::Psi;
use crate::subspace::SubspaceBasis;
use crate::util::{msb, set_bits};
use crate::FftError;

/// Ordered field-element coefficients
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "Vec<F>",
        into = "Vec<F>",
        bound(serialize = "F: serde::Serialize", deserialize = "F: serde::Deserialize<'de>")
    )
)]
pub struct Polynomial<F: BinaryField> {
    coeffs: Vec<F>,
}

impl<F: BinaryField> Polynomial<F> {
    /// Wrap coefficients; an empty vector becomes the zero polynomial
    pub fn new(coeffs: Vec<F>) -> Self {
        if coeffs.is_empty() {
            return Self::zero();
        }
        Self { coeffs }
    }

    /// The constant 0
    pub fn zero() -> Self {
        Self {
            coeffs: vec![F::ZERO],
        }
    }

    /// Build from integer coefficients
    pub fn from_bits(values: &[u64]) -> Result<Self, FieldError> {
        super::elements_from_bits(values).map(Self::new)
    }

    /// Coefficients, low to high
    pub fn coeffs(&self) -> &[F] {
        &self.coeffs
    }

    /// Consume into the coefficient vector
    pub fn into_coeffs(self) -> Vec<F> {
        self.coeffs
    }

    /// Number of coefficients minus one (trailing zeros included)
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Smallest `k` with `2^k > degree`
    pub fn msb(&self) -> usize {
        msb(self.degree())
    }

    /// Coefficients zero-padded to length 2^k
    pub fn padded(&self, k: usize) -> Result<Vec<F>, FftError> {
        let len = 1usize << k;
        if self.coeffs.len() > len {
            return Err(FftError::LengthMismatch {
                expected: len,
                actual: self.coeffs.len(),
            });
        }
        let mut padded = self.coeffs.clone();
        padded.resize(len, F::ZERO);
        Ok(padded)
    }

    /// Copy without trailing zero coefficients (at least one coefficient kept)
    pub fn trimmed(&self) -> Self {
        let len = self
            .coeffs
            .iter()
            .rposition(|c| !bool::from(c.is_zero()))
            .map_or(1, |last| last + 1);
        Self::new(self.coeffs[..len].to_vec())
    }

    /// Evaluate directly at `point` in the basis X_i (normalized) or X̂_i
    ///
    /// O(n·m) reference evaluation, independent of the butterfly network.
    pub fn evaluate(
        &self,
        basis: &SubspaceBasis<F>,
        point: F,
        normalized: bool,
    ) -> Result<F, FftError> {
        if self.msb() > basis.dimension() {
            return Err(FftError::DegreeTooLarge {
                requested: self.msb(),
                max: basis.dimension(),
            });
        }

        let factors: Vec<F> = (0..basis.dimension())
            .map(|b| {
                let value = basis.vanishing_at(b, point);
                if normalized {
                    value * basis.vanishing_at_basis_inv(b)
                } else {
                    value
                }
            })
            .collect();

        Ok(self
            .coeffs
            .iter()
            .enumerate()
            .map(|(i, &c)| c * set_bits(i).map(|b| factors[b]).product::<F>())
            .sum())
    }

    /// Product via evaluate–multiply–interpolate on `psi`
    pub fn mul_with(&self, other: &Self, psi: &Psi<F>) -> Result<Self, FftError> {
        PolynomialMultiplier::new(psi).multiply(self, other)
    }
}

impl<F: BinaryField> From<Vec<F>> for Polynomial<F> {
    fn from(coeffs: Vec<F>) -> Self {
        Self::new(coeffs)
    }
}

impl<F: BinaryField> From<Polynomial<F>> for Vec<F> {
    fn from(poly: Polynomial<F>) -> Self {
        poly.coeffs
    }
}

impl<F: BinaryField> Add for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn add(self, other: Self) -> Polynomial<F> {
        let (longer, shorter) = if self.coeffs.len() >= other.coeffs.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut coeffs = longer.coeffs.clone();
        for (c, s) in coeffs.iter_mut().zip(&shorter.coeffs) {
            *c += s;
        }
        Polynomial::new(coeffs)
    }
}

impl<F: BinaryField> Add for Polynomial<F> {
    type Output = Polynomial<F>;

    fn add(self, other: Self) -> Polynomial<F> {
        &self + &other
    }
}

impl<F: BinaryField> fmt::Display for Polynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.coeffs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::Gf16;

    fn poly(values: &[u64]) -> Polynomial<Gf16> {
        Polynomial::from_bits(values).unwrap()
    }

    #[test]
    fn test_degree_and_msb() {
        let f = poly(&[15, 12, 3, 6]);
        assert_eq!(f.degree(), 3);
        assert_eq!(f.msb(), 2);

        let g = poly(&[0, 0, 0, 0, 15]);
        assert_eq!(g.degree(), 4);
        assert_eq!(g.msb(), 3);

        assert_eq!(Polynomial::<Gf16>::new(vec![]), Polynomial::zero());
        assert_eq!(Polynomial::<Gf16>::zero().msb(), 0);
    }

    #[test]
    fn test_add_self_is_zero() {
        let f = poly(&[15, 12, 3, 6]);
        assert_eq!(&f + &f, poly(&[0, 0, 0, 0]));
    }

    #[test]
    fn test_add_keeps_longer_tail() {
        let f = poly(&[1, 2]);
        let g = poly(&[3, 2, 5, 7]);
        assert_eq!(f + g, poly(&[2, 0, 5, 7]));
    }

    #[test]
    fn test_padded_and_trimmed() {
        let f = poly(&[1, 2, 0]);
        assert_eq!(f.padded(2).unwrap(), poly(&[1, 2, 0, 0]).into_coeffs());
        assert!(f.padded(1).is_err());
        assert_eq!(f.trimmed(), poly(&[1, 2]));
        assert_eq!(poly(&[0, 0]).trimmed(), poly(&[0]));
    }

    #[test]
    fn test_evaluate_unnormalized_basis_values() {
        // X̂_0..X̂_3 at 5 are 1, 5, 7, 8
        let basis = SubspaceBasis::<Gf16>::standard(4).unwrap();
        let point = Gf16::from_bits_truncated(5);
        for (i, expected) in [1u64, 5, 7, 8].into_iter().enumerate() {
            let mut coeffs = vec![0u64; i + 1];
            coeffs[i] = 1;
            let value = poly(&coeffs).evaluate(&basis, point, false).unwrap();
            assert_eq!(value.to_bits(), expected);
        }
    }

    #[test]
    fn test_evaluate_rejects_oversized_polynomial() {
        let basis = SubspaceBasis::<Gf16>::standard(1).unwrap();
        let f = poly(&[1, 2, 3]);
        assert!(f.evaluate(&basis, Gf16::from_bits_truncated(1), true).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_goes_through_new() {
        use serde::de::value::{Error, SeqDeserializer};
        use serde::de::IntoDeserializer;
        use serde::Deserialize;

        fn decode(values: Vec<u64>) -> Result<Polynomial<Gf16>, Error> {
            let de: SeqDeserializer<std::vec::IntoIter<u64>, Error> = values.into_deserializer();
            Polynomial::deserialize(de)
        }

        let empty = decode(vec![]).unwrap();
        assert_eq!(empty, Polynomial::zero());
        assert_eq!(empty.degree(), 0);

        assert_eq!(decode(vec![15, 12, 3, 6]).unwrap(), poly(&[15, 12, 3, 6]));
        assert!(decode(vec![1, 16]).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(poly(&[15, 12, 3, 6]).to_string(), "[15, 12, 3, 6]");
    }
}
