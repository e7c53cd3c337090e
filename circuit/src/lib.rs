//! Core interface for building and evaluating arithmetic circuits over a
//! prime field. A circuit is a fixed set of inputs followed by a flat,
//! topologically ordered list of n-ary sum and product gates; gates reference
//! inputs and earlier gates by 1-based wire number, so the gate list is
//! acyclic by construction.

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

pub mod arithmetic_circuit;
pub mod error;

pub use arithmetic_circuit::{ArithmeticCircuit, Gate, GateKind, InputElement};
pub use error::CircuitError;
