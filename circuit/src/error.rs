//! Errors surfaced while building or evaluating a circuit.

use core::fmt;

/// This is an error that could occur while building or evaluating an
/// arithmetic circuit.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum CircuitError {
    /// The evaluation input length differs from the circuit's declared input
    /// size.
    InputSizeMismatch,
    /// Evaluation was requested on a circuit with no gates.
    EmptyCircuit,
    /// A gate with no operands was added.
    EmptyGate,
    /// A gate operand references a wire that is not an input or an earlier
    /// gate.
    WireOutOfRange,
}

impl ark_std::error::Error for CircuitError {}

impl fmt::Display for CircuitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            CircuitError::InputSizeMismatch => {
                write!(f, "input length does not match the circuit input size")
            },
            CircuitError::EmptyCircuit => write!(f, "the circuit contains no gates"),
            CircuitError::EmptyGate => write!(f, "gates must have at least one operand"),
            CircuitError::WireOutOfRange => {
                write!(f, "gate operand references a wire that does not exist yet")
            },
        }
    }
}
