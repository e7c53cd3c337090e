//! Prover side of the batch evaluation protocol.

use ark_ff::FftField;
use ark_poly::EvaluationDomain;
use ark_std::vec::Vec;
use bace_circuit::{ArithmeticCircuit, CircuitError};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::common::{compute_column_lde, get_input_size, Input, Proof};
use crate::domain::{get_column_size, get_evaluation_domain, get_large_degree};
use crate::error::Error;

/// Produces a proof for the batch: the coefficients, on the large radix-2
/// domain, of the polynomial whose value at the domain's `k`-th point is the
/// circuit evaluated on the `k`-th sample of every input-column extension.
///
/// Because the column polynomials interpolate the batch on the embedded
/// small domain, this single polynomial carries every batch output; the
/// verifier recovers them after spot-checking it at a random point.
pub fn prover<F: FftField>(
    circuit: &ArithmeticCircuit<F>,
    input_batch: &[Input<F>],
) -> Result<Proof<F>, Error> {
    let input_size = get_input_size(input_batch);
    if input_size == 0 {
        return Err(Error::InputSizeMismatch);
    }
    if input_size != circuit.num_inputs() {
        return Err(Error::CircuitInputMismatch);
    }

    let column_size = get_column_size(input_batch.len());
    let large_size = get_large_degree(column_size, circuit.degree());
    let large_domain = get_evaluation_domain::<F>(large_size)?;

    let span = tracing::debug_span!(
        "prover",
        batch_size = input_batch.len(),
        input_size,
        column_size,
        large_size
    );
    let _enter = span.enter();

    // Row i becomes the evaluations of input column i over the whole large
    // domain.
    let mut columns = compute_column_lde(input_batch, column_size)?;
    cfg_iter_mut!(columns).for_each(|column| large_domain.fft_in_place(column));

    let mut proof = cfg_into_iter!(0..large_size)
        .map(|k| {
            let point: Vec<F> = columns.iter().map(|column| column[k]).collect();
            circuit.evaluate(&point)
        })
        .collect::<Result<Vec<F>, CircuitError>>()?;

    large_domain.ifft_in_place(&mut proof);
    Ok(proof)
}
