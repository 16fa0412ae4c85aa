//! Concrete binary extension fields GF(2^m)
//!
//! Each element stores its monomial coordinates in the low `m` bits of an
//! unsigned word. Multiplication is carry-less (Russian peasant) with
//! reduction by a fixed irreducible polynomial.

use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use ff::Field;
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::{BinaryField, FieldError};

/// Multiply two elements of GF(2^degree)
///
/// Uses Russian peasant algorithm with reduction by `modulus`
const fn gf2m_mul(a: u32, b: u32, degree: u32, modulus: u32) -> u32 {
    let top = 1u32 << degree;
    let mut result = 0u32;
    let mut a_val = a;
    let mut b_val = b;

    while b_val > 0 {
        if b_val & 1 != 0 {
            result ^= a_val;
        }
        a_val <<= 1;
        if a_val & top != 0 {
            a_val ^= modulus;
        }
        b_val >>= 1;
    }

    result
}

macro_rules! binary_field {
    ($(#[$meta:meta])* $name:ident, $repr:ty, $degree:expr, $modulus:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(try_from = "u64", into = "u64"))]
        pub struct $name($repr);

        impl $name {
            /// Raise to `2^(m-1)`, the inverse of the Frobenius map (unique square root).
            fn frobenius_root(self) -> Self {
                let mut root = self;
                for _ in 1..$degree {
                    root = root.square();
                }
                root
            }

            /// Raise to `2^m - 2`; zero maps to zero.
            fn invert_or_zero(self) -> Self {
                let mut power = self;
                let mut acc = Self(1);
                for _ in 1..$degree {
                    power = power.square();
                    acc *= power;
                }
                acc
            }
        }

        impl BinaryField for $name {
            const DEGREE: u32 = $degree;
            const MODULUS: u32 = $modulus;

            fn from_bits_truncated(bits: u64) -> Self {
                Self((bits & ((1u64 << $degree) - 1)) as $repr)
            }

            fn to_bits(&self) -> u64 {
                self.0 as u64
            }
        }

        impl Field for $name {
            const ZERO: Self = Self(0);
            const ONE: Self = Self(1);

            fn random(mut rng: impl RngCore) -> Self {
                Self::from_bits_truncated(rng.next_u64())
            }

            fn square(&self) -> Self {
                *self * *self
            }

            fn double(&self) -> Self {
                Self::ZERO
            }

            fn invert(&self) -> CtOption<Self> {
                CtOption::new(self.invert_or_zero(), !self.is_zero())
            }

            fn sqrt_ratio(num: &Self, div: &Self) -> (Choice, Self) {
                // Every element of GF(2^m) is a square.
                let ratio = *num * div.invert_or_zero();
                (!div.is_zero() | num.is_zero(), ratio.frobenius_root())
            }
        }

        impl ConstantTimeEq for $name {
            fn ct_eq(&self, other: &Self) -> Choice {
                self.0.ct_eq(&other.0)
            }
        }

        impl ConditionallySelectable for $name {
            fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
                Self(<$repr>::conditional_select(&a.0, &b.0, choice))
            }
        }

        impl Add for $name {
            type Output = Self;
            #[allow(clippy::suspicious_arithmetic_impl)]
            fn add(self, rhs: Self) -> Self {
                Self(self.0 ^ rhs.0)
            }
        }

        impl Sub for $name {
            type Output = Self;
            #[allow(clippy::suspicious_arithmetic_impl)]
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 ^ rhs.0)
            }
        }

        impl Mul for $name {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                let product = gf2m_mul(self.0 as u32, rhs.0 as u32, Self::DEGREE, Self::MODULUS);
                Self(product as $repr)
            }
        }

        impl Neg for $name {
            type Output = Self;
            fn neg(self) -> Self {
                self
            }
        }

        impl<'a> Add<&'a $name> for $name {
            type Output = Self;
            fn add(self, rhs: &'a Self) -> Self {
                self + *rhs
            }
        }

        impl<'a> Sub<&'a $name> for $name {
            type Output = Self;
            fn sub(self, rhs: &'a Self) -> Self {
                self - *rhs
            }
        }

        impl<'a> Mul<&'a $name> for $name {
            type Output = Self;
            fn mul(self, rhs: &'a Self) -> Self {
                self * *rhs
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl MulAssign for $name {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl<'a> AddAssign<&'a $name> for $name {
            fn add_assign(&mut self, rhs: &'a Self) {
                *self = *self + *rhs;
            }
        }

        impl<'a> SubAssign<&'a $name> for $name {
            fn sub_assign(&mut self, rhs: &'a Self) {
                *self = *self - *rhs;
            }
        }

        impl<'a> MulAssign<&'a $name> for $name {
            fn mul_assign(&mut self, rhs: &'a Self) {
                *self = *self * *rhs;
            }
        }

        impl Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, |acc, x| acc + x)
            }
        }

        impl<'a> Sum<&'a $name> for $name {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, |acc, x| acc + x)
            }
        }

        impl Product for $name {
            fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ONE, |acc, x| acc * x)
            }
        }

        impl<'a> Product<&'a $name> for $name {
            fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.fold(Self::ONE, |acc, x| acc * x)
            }
        }

        impl TryFrom<u64> for $name {
            type Error = FieldError;
            fn try_from(value: u64) -> Result<Self, FieldError> {
                Self::from_bits(value)
            }
        }

        impl From<$name> for u64 {
            fn from(value: $name) -> u64 {
                value.to_bits()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

binary_field!(
    /// GF(2^4) with reduction polynomial x^4 + x + 1 (0x13)
    Gf16,
    u8,
    4,
    0x13
);

binary_field!(
    /// GF(2^8) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1 (0x11D)
    Gf256,
    u8,
    8,
    0x11D
);

binary_field!(
    /// GF(2^16) with reduction polynomial x^16 + x^12 + x^3 + x + 1 (0x1100B)
    Gf65536,
    u16,
    16,
    0x1100B
);
