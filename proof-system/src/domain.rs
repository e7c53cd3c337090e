//! Sizing and index arithmetic for the radix-2 evaluation domains that tie
//! the prover and verifier together.
//!
//! Column interpolation happens on a small domain of `column_size` points and
//! the proof lives on a large domain of `large_degree` points. Both are
//! power-of-two multiplicative subgroups, so the small domain is embedded in
//! the large one at a power-of-two stride: sample `i` of the small domain
//! reappears as sample `i * (large / small)` of the large one. That identity
//! is what lets the verifier read batch outputs straight out of the proof's
//! evaluations.

use ark_ff::FftField;
use ark_poly::{
    univariate::DensePolynomial, DenseUVPolynomial, EvaluationDomain, Polynomial,
    Radix2EvaluationDomain,
};

use crate::error::Error;

/// Returns the radix-2 evaluation domain with exactly `domain_size` points.
///
/// `domain_size` must be a power of two; domains larger than the field's
/// two-adic subgroup do not exist and are reported as
/// [`Error::DomainUnsupported`].
pub fn get_evaluation_domain<F: FftField>(
    domain_size: usize,
) -> Result<Radix2EvaluationDomain<F>, Error> {
    Radix2EvaluationDomain::new(domain_size).ok_or(Error::DomainUnsupported)
}

/// Returns the closest previous power of two, or `n` itself if it is one.
/// Returns 0 for 0.
pub fn previous_power_of_two(mut n: u32) -> u32 {
    n |= n >> 1;
    n |= n >> 2;
    n |= n >> 4;
    n |= n >> 8;
    n |= n >> 16;
    n - (n >> 1)
}

/// Maps an index on the small domain to the index of the same field element
/// on the large domain.
///
/// Both sizes must be powers of two with `small_domain_size` dividing
/// `large_domain_size`, so the stride between embedded samples is their
/// quotient.
pub fn get_embedded_index(
    index: usize,
    small_domain_size: usize,
    large_domain_size: usize,
) -> usize {
    index * previous_power_of_two((large_domain_size / small_domain_size) as u32) as usize
}

/// Returns the column size for a batch: the smallest power of two with room
/// for `batch_size` samples.
pub fn get_column_size(batch_size: usize) -> usize {
    batch_size.next_power_of_two()
}

/// Returns the size of the large domain: the smallest power of two with room
/// for `column_size * degree` evaluations.
///
/// A degree-0 circuit still gets a one-point domain.
pub fn get_large_degree(column_size: usize, degree: u64) -> usize {
    ((column_size as u64) * degree).next_power_of_two() as usize
}

/// Evaluates the polynomial given by the first `degree_bound` entries of
/// `coeffs` at `point`.
pub fn evaluate_polynomial<F: FftField>(degree_bound: usize, coeffs: &[F], point: F) -> F {
    let bound = degree_bound.min(coeffs.len());
    DensePolynomial::from_coefficients_slice(&coeffs[..bound]).evaluate(&point)
}
