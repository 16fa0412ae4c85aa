//! Additive FFT operator Ψ_β
//!
//! Evaluates a coefficient vector of length 2^k on the coset
//! β + span{v_0..v_{k-1}} and interpolates back:
//! - `transform` / `inverse`: recursive butterfly, fresh output vector
//! - `transform_in_place` / `inverse_in_place`: iterative network on a caller buffer
//!
//! Output index i holds the evaluation at ω_i + β, where ω_i has basis
//! coordinates equal to the bits of i.

mod butterfly;

use tracing::{debug, trace};

use crate::algebra::BinaryField;
use crate::subspace::{NormalizationTable, SubspaceBasis};
use crate::{FftError, OperatorConfig};
use butterfly::{forward_in_place, inverse_in_place, TwiddleTable};

/// Additive FFT operator
///
/// Tables are built once at construction and only read afterwards, so a
/// single operator can serve any number of concurrent calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Psi<F: BinaryField> {
    degree: usize,
    shift: F,
    basis: SubspaceBasis<F>,
    twiddles: TwiddleTable<F>,
    normalization: NormalizationTable<F>,
}

impl<F: BinaryField> Psi<F> {
    /// Operator over the standard basis 1, x, …, x^{degree-1}
    pub fn new(degree: usize, shift: F) -> Result<Self, FftError> {
        Self::with_basis(SubspaceBasis::standard(degree)?, shift)
    }

    /// Operator over a validated custom basis
    pub fn with_basis(basis: SubspaceBasis<F>, shift: F) -> Result<Self, FftError> {
        let degree = basis.dimension();
        let twiddles = TwiddleTable::build(&basis, shift);
        let normalization = NormalizationTable::build(&basis, degree);

        debug!(
            degree,
            shift = %shift,
            field_degree = F::DEGREE,
            table_len = normalization.len(),
            "built additive FFT operator"
        );

        Ok(Self {
            degree,
            shift,
            basis,
            twiddles,
            normalization,
        })
    }

    /// Operator described by `config`
    pub fn from_config(config: &OperatorConfig) -> Result<Self, FftError> {
        config.validate::<F>()?;
        Self::new(config.degree, F::from_bits(config.shift)?)
    }

    /// Maximum `k` accepted by the transforms
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Shift β
    pub fn shift(&self) -> F {
        self.shift
    }

    /// Basis v_0..v_{degree-1}
    pub fn basis(&self) -> &SubspaceBasis<F> {
        &self.basis
    }

    /// s_j(β)/s_j(v_j) for j in [0, degree)
    pub fn precomputed(&self) -> &[F] {
        self.twiddles.precomputed()
    }

    /// Normalization constants p_i
    pub fn normalization(&self) -> &NormalizationTable<F> {
        &self.normalization
    }

    /// ω_i, the span element with basis coordinates `i`
    ///
    /// # Panics
    ///
    /// Panics if `i >= 2^degree`.
    pub fn omega(&self, i: usize) -> F {
        self.basis.span_element(i)
    }

    /// ω_i + β, the point evaluated at output index `i`
    ///
    /// # Panics
    ///
    /// Panics if `i >= 2^degree`.
    pub fn point(&self, i: usize) -> F {
        self.omega(i) + self.shift
    }

    /// Evaluate `coeffs` (length 2^k) on β + span{v_0..v_{k-1}}
    ///
    /// With `normalized == false` coefficients are over X̂_i = Π s_b(x) and
    /// are scaled by p_i first. The input is never mutated.
    pub fn transform(&self, coeffs: &[F], k: usize, normalized: bool) -> Result<Vec<F>, FftError> {
        self.check_input(coeffs.len(), k)?;
        trace!(k, normalized, "forward additive FFT");

        let mut native = coeffs.to_vec();
        if !normalized {
            self.normalization.scale(&mut native);
        }
        Ok(self.transform_rec(&native, k, 0))
    }

    /// Recover coefficients from 2^k evaluations; exact inverse of [`Psi::transform`]
    pub fn inverse(&self, evals: &[F], k: usize, normalized: bool) -> Result<Vec<F>, FftError> {
        self.check_input(evals.len(), k)?;
        trace!(k, normalized, "inverse additive FFT");

        let mut coeffs = self.inverse_rec(evals, k, 0);
        if !normalized {
            self.normalization.unscale(&mut coeffs);
        }
        Ok(coeffs)
    }

    /// Same result as [`Psi::transform`], computed bottom-up inside `data`
    pub fn transform_in_place(
        &self,
        data: &mut [F],
        k: usize,
        normalized: bool,
    ) -> Result<(), FftError> {
        self.check_input(data.len(), k)?;
        trace!(k, normalized, "forward additive FFT (in place)");

        if !normalized {
            self.normalization.scale(data);
        }
        forward_in_place(&self.twiddles, data, k);
        Ok(())
    }

    /// Same result as [`Psi::inverse`], computed bottom-up inside `data`
    pub fn inverse_in_place(
        &self,
        data: &mut [F],
        k: usize,
        normalized: bool,
    ) -> Result<(), FftError> {
        self.check_input(data.len(), k)?;
        trace!(k, normalized, "inverse additive FFT (in place)");

        inverse_in_place(&self.twiddles, data, k);
        if !normalized {
            self.normalization.unscale(data);
        }
        Ok(())
    }

    fn check_input(&self, len: usize, k: usize) -> Result<(), FftError> {
        if k > self.degree {
            return Err(FftError::DegreeTooLarge {
                requested: k,
                max: self.degree,
            });
        }
        let expected = 1usize << k;
        if len != expected {
            return Err(FftError::LengthMismatch {
                expected,
                actual: len,
            });
        }
        Ok(())
    }

    /// Butterfly on the coset whose offset has basis coordinates `offset`
    fn transform_rec(&self, coeffs: &[F], k: usize, offset: usize) -> Vec<F> {
        if k == 0 {
            return vec![coeffs[0]];
        }

        let half = 1usize << (k - 1);
        let twiddle = self.twiddles.twiddle(k - 1, offset);
        let (low, high) = coeffs.split_at(half);

        let g0: Vec<F> = low
            .iter()
            .zip(high)
            .map(|(&c, &h)| c + twiddle * h)
            .collect();
        let g1: Vec<F> = g0.iter().zip(high).map(|(&g, &h)| g + h).collect();

        // Left branch stays on the coset, right branch moves by v_{k-1}
        let mut result = self.transform_rec(&g0, k - 1, offset);
        result.extend(self.transform_rec(&g1, k - 1, offset | half));
        result
    }

    fn inverse_rec(&self, evals: &[F], k: usize, offset: usize) -> Vec<F> {
        if k == 0 {
            return vec![evals[0]];
        }

        let half = 1usize << (k - 1);
        let (low, high) = evals.split_at(half);
        let d0 = self.inverse_rec(low, k - 1, offset);
        let d1 = self.inverse_rec(high, k - 1, offset | half);
        let twiddle = self.twiddles.twiddle(k - 1, offset);

        let odd: Vec<F> = d0.iter().zip(&d1).map(|(&a, &b)| a + b).collect();
        let mut result: Vec<F> = d0
            .iter()
            .zip(&odd)
            .map(|(&a, &o)| a + twiddle * o)
            .collect();
        result.extend(odd);
        result
    }
}
