//! Batch input handling and the column-wise low-degree extension shared by
//! the prover and verifier.

use ark_ff::{FftField, Field};
use ark_poly::EvaluationDomain;
use ark_std::vec::Vec;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::get_evaluation_domain;
use crate::error::Error;

/// A single circuit input: one field element per input wire.
pub type Input<F> = Vec<F>;

/// An ordered batch of equally sized inputs.
pub type InputBatch<F> = Vec<Input<F>>;

/// One output per batch entry, in batch order.
pub type OutputBatch<F> = Vec<F>;

/// Row `i` holds the polynomial interpolating input column `i`.
pub type ColumnLde<F> = Vec<Vec<F>>;

/// Coefficients of the batched evaluation polynomial on the large domain.
pub type Proof<F> = Vec<F>;

/// Returns the common input size of the batch, or 0 if the batch is empty or
/// its rows disagree.
///
/// Inputs carry at least one element by definition, so 0 doubles as a
/// mismatch sentinel.
pub fn get_input_size<F: Field>(input_batch: &[Input<F>]) -> usize {
    match input_batch.first() {
        Some(first) if input_batch.iter().all(|input| input.len() == first.len()) => first.len(),
        _ => 0,
    }
}

/// Interpolates each input column of the batch on the radix-2 domain of
/// `column_size` points, returning one coefficient row per input wire.
///
/// Column `i` collects entry `i` of every batch row, zero-padded up to
/// `column_size`; its inverse FFT is the unique polynomial of degree below
/// `column_size` taking those values on the domain.
pub fn compute_column_lde<F: FftField>(
    input_batch: &[Input<F>],
    column_size: usize,
) -> Result<ColumnLde<F>, Error> {
    let input_size = get_input_size(input_batch);
    if input_size == 0 {
        return Err(Error::InputSizeMismatch);
    }
    debug_assert!(input_batch.len() <= column_size);

    let domain = get_evaluation_domain::<F>(column_size)?;

    let mut column_lde: ColumnLde<F> = (0..input_size)
        .map(|i| {
            let mut column = vec![F::zero(); column_size];
            for (row, input) in input_batch.iter().enumerate() {
                column[row] = input[i];
            }
            column
        })
        .collect();
    cfg_iter_mut!(column_lde).for_each(|column| domain.ifft_in_place(column));

    Ok(column_lde)
}
