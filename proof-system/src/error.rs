//! Errors surfaced by the proof-system entry points.

use core::fmt;

use bace_circuit::CircuitError;

/// This is an error that could occur while proving or verifying a batch
/// evaluation.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Error {
    /// The input batch is empty or its rows have unequal lengths.
    InputSizeMismatch,
    /// The batch input length differs from the circuit's declared input size.
    CircuitInputMismatch,
    /// The requested evaluation domain exceeds the field's two-adic capacity.
    DomainUnsupported,
    /// A circuit-level failure surfaced during evaluation.
    Circuit(CircuitError),
}

impl From<CircuitError> for Error {
    fn from(err: CircuitError) -> Self {
        Error::Circuit(err)
    }
}

impl ark_std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Error::InputSizeMismatch => {
                write!(f, "input batch is empty or has rows of unequal length")
            },
            Error::CircuitInputMismatch => {
                write!(f, "batch input size does not match the circuit input size")
            },
            Error::DomainUnsupported => write!(
                f,
                "evaluation domain size exceeds the field's two-adic capacity"
            ),
            Error::Circuit(err) => write!(f, "circuit evaluation failed: {}", err),
        }
    }
}
