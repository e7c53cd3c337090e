//! A proof system for batch evaluation of arithmetic circuits.
//!
//! A prover evaluates a fixed circuit on a batch of inputs and commits to the
//! whole computation with one polynomial: the input columns are interpolated
//! on a small radix-2 domain, extended to a large domain sized for the
//! circuit degree, evaluated through the circuit pointwise, and interpolated
//! back into coefficient form. A verifier re-derives the column
//! interpolations, spot-checks the proof polynomial against the circuit at a
//! single random point, and on success reads every batch output off the
//! sub-domain embedded in the large domain — much cheaper than re-running
//! the circuit on each input.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(
    unused,
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![deny(unsafe_code)]

#[macro_use]
extern crate ark_std;

pub mod common;
pub mod domain;
pub mod error;

mod naive;
mod prover;
mod verifier;

pub use error::Error;
pub use naive::naive_evaluate;
pub use prover::prover;
pub use verifier::verifier;

pub use bace_circuit::{ArithmeticCircuit, CircuitError, Gate, GateKind, InputElement};
