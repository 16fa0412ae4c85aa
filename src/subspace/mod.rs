//! GF(2)-subspace structure of the field
//!
//! - Basis v_0..v_{m-1} with linear-independence validation
//! - Subspace (vanishing) polynomials s_k, evaluated recursively
//! - Normalization constants p_i converting between coefficient bases
//!
//! Everything here runs once, at operator construction.

mod basis;
mod normalization;
mod vanishing;

pub use basis::SubspaceBasis;
pub use normalization::NormalizationTable;
pub use vanishing::evaluate_vanishing;
