//! Binary extension field arithmetic
//!
//! Elements of GF(2^m) viewed as an m-dimensional GF(2)-vector space:
//! - Addition is XOR (subtraction and negation coincide with it)
//! - Integer `n` maps to the element whose monomial coordinates are the bits of `n`
//! - Concrete fields are small (m ≤ 16) so every element fits a machine word

mod field;
mod polynomial;

pub use field::{Gf16, Gf256, Gf65536};
pub use polynomial::Polynomial;

use std::fmt;

use ff::Field;
use thiserror::Error;

/// Errors raised by the field layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Division by the zero element.
    #[error("division by zero")]
    DivisionByZero,

    /// Integer has set bits at or above the extension degree.
    #[error("value {value:#x} does not fit in GF(2^{degree})")]
    OutOfRange {
        /// Rejected integer.
        value: u64,
        /// Extension degree of the target field.
        degree: u32,
    },
}

/// A field of characteristic 2 with a fixed monomial basis {1, x, x², …}.
///
/// Extends [`ff::Field`] with the GF(2)-coordinate view the additive FFT
/// relies on: `from_bits(2^i)` is the i-th monomial basis vector.
pub trait BinaryField: Field + fmt::Display {
    /// Extension degree `m` of GF(2^m).
    const DEGREE: u32;

    /// Reduction polynomial, including the leading `x^m` term.
    const MODULUS: u32;

    /// Build an element from its low `DEGREE` bits, discarding the rest.
    fn from_bits_truncated(bits: u64) -> Self;

    /// Monomial coordinates of this element as an integer.
    fn to_bits(&self) -> u64;

    /// Build an element from an integer, rejecting bits outside the field.
    fn from_bits(bits: u64) -> Result<Self, FieldError> {
        if bits.checked_shr(Self::DEGREE).unwrap_or(0) != 0 {
            return Err(FieldError::OutOfRange {
                value: bits,
                degree: Self::DEGREE,
            });
        }
        Ok(Self::from_bits_truncated(bits))
    }

    /// `self / divisor`, failing on a zero divisor.
    fn try_div(&self, divisor: &Self) -> Result<Self, FieldError> {
        Option::<Self>::from(divisor.invert())
            .map(|inverse| *self * inverse)
            .ok_or(FieldError::DivisionByZero)
    }
}

/// Convert a slice of integers into field elements.
pub fn elements_from_bits<F: BinaryField>(values: &[u64]) -> Result<Vec<F>, FieldError> {
    values.iter().map(|&v| F::from_bits(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits_rejects_high_bits() {
        assert_eq!(Gf16::from_bits(15).map(|e| e.to_bits()), Ok(15));
        assert_eq!(
            Gf16::from_bits(16),
            Err(FieldError::OutOfRange {
                value: 16,
                degree: 4
            })
        );
        assert!(Gf65536::from_bits(0xFFFF).is_ok());
        assert!(Gf65536::from_bits(0x1_0000).is_err());
    }

    #[test]
    fn test_try_div() {
        let six = Gf16::from_bits_truncated(6);
        assert_eq!(Gf16::ONE.try_div(&six).map(|e| e.to_bits()), Ok(7));
        assert_eq!(six.try_div(&Gf16::ZERO), Err(FieldError::DivisionByZero));
    }

    #[test]
    fn test_elements_from_bits() {
        let elems: Vec<Gf256> = elements_from_bits(&[1, 2, 255]).unwrap();
        assert_eq!(elems.len(), 3);
        assert!(elements_from_bits::<Gf256>(&[256]).is_err());
    }
}
