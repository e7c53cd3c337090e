//! Direct per-input circuit evaluation, the reference the proof system is
//! checked against and the baseline it is measured against.

use ark_ff::Field;
use bace_circuit::{ArithmeticCircuit, CircuitError};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::common::{get_input_size, Input, OutputBatch};
use crate::error::Error;

/// Evaluates the circuit on every batch entry independently.
pub fn naive_evaluate<F: Field>(
    circuit: &ArithmeticCircuit<F>,
    input_batch: &[Input<F>],
) -> Result<OutputBatch<F>, Error> {
    let input_size = get_input_size(input_batch);
    if input_size == 0 {
        return Err(Error::InputSizeMismatch);
    }
    if input_size != circuit.num_inputs() {
        return Err(Error::CircuitInputMismatch);
    }

    let output_batch = cfg_iter!(input_batch)
        .map(|input| circuit.evaluate(input))
        .collect::<Result<OutputBatch<F>, CircuitError>>()?;
    Ok(output_batch)
}
