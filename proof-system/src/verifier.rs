//! Verifier side of the batch evaluation protocol.

use ark_ff::FftField;
use ark_poly::EvaluationDomain;
use ark_std::rand::Rng;
use ark_std::vec::Vec;
use bace_circuit::ArithmeticCircuit;

use crate::common::{compute_column_lde, get_input_size, Input, OutputBatch, Proof};
use crate::domain::{
    evaluate_polynomial, get_column_size, get_embedded_index, get_evaluation_domain,
    get_large_degree,
};
use crate::error::Error;

/// Checks `proof` at one uniformly random field element and, on success,
/// extracts the batch outputs from it. Returns an empty batch when the proof
/// fails the check.
///
/// The check compares the circuit evaluated on the column interpolations at
/// the random point against the proof polynomial at the same point. An
/// honest proof agrees everywhere; by Schwartz–Zippel a dishonest one
/// survives with probability at most `degree * column_size / |F|`.
pub fn verifier<F: FftField, R: Rng>(
    circuit: &ArithmeticCircuit<F>,
    input_batch: &[Input<F>],
    proof: &Proof<F>,
    rng: &mut R,
) -> Result<OutputBatch<F>, Error> {
    let input_size = get_input_size(input_batch);
    if input_size == 0 {
        return Err(Error::InputSizeMismatch);
    }
    if input_size != circuit.num_inputs() {
        return Err(Error::CircuitInputMismatch);
    }

    let batch_size = input_batch.len();
    let column_size = get_column_size(batch_size);
    let large_size = get_large_degree(column_size, circuit.degree());
    let large_domain = get_evaluation_domain::<F>(large_size)?;

    let span = tracing::debug_span!("verifier", batch_size, input_size, column_size, large_size);
    let _enter = span.enter();

    let column_lde = compute_column_lde(input_batch, column_size)?;

    let challenge = F::rand(rng);
    let random_input: Vec<F> = column_lde
        .iter()
        .map(|column| evaluate_polynomial(column_size, column, challenge))
        .collect();

    let claimed = evaluate_polynomial(large_size, proof, challenge);
    if circuit.evaluate(&random_input)? != claimed {
        tracing::debug!("proof does not match the circuit at the challenge point");
        return Ok(OutputBatch::new());
    }

    let mut output_batch = proof.clone();
    large_domain.fft_in_place(&mut output_batch);
    // The read index i * (large / column) never falls below the write index
    // i and both advance monotonically, so moving samples in batch order
    // cannot clobber an unread one.
    for i in 0..batch_size {
        output_batch[i] = output_batch[get_embedded_index(i, column_size, large_size)];
    }
    output_batch.truncate(batch_size);
    Ok(output_batch)
}
