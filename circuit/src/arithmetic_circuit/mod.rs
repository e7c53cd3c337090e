//! This module contains the core functionality for arithmetic circuits: the
//! gate data model, the builder, the serial evaluator, and degree analysis.

use ark_ff::Field;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::vec::Vec;
use core::fmt;

use crate::error::CircuitError;

mod gadgets;
mod serialize;

#[cfg(test)]
mod tests;

/// The operation a gate applies to its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateKind {
    /// n-ary addition.
    Sum,
    /// n-ary multiplication.
    Product,
}

/// One operand of a gate: a wire reference or an embedded constant.
///
/// Wire numbers are 1-based: `1..=input_size` name the circuit inputs and
/// larger numbers name previously added gates. A gate may only reference
/// wires that already exist, so the gate list forms a DAG by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputElement<F: Field> {
    /// 1-based wire number of a circuit input or an earlier gate.
    Variable(u32),
    /// Constant folded into the gate.
    Constant(F),
}

impl<F: Field> InputElement<F> {
    /// Resolves this operand against the wire assignment.
    fn value(&self, wires: &[F]) -> F {
        match self {
            InputElement::Variable(wire) => wires[(wire - 1) as usize],
            InputElement::Constant(constant) => *constant,
        }
    }
}

/// An n-ary sum or product over wires and constants.
#[derive(Debug, Clone, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Gate<F: Field> {
    /// The operation this gate applies.
    pub kind: GateKind,
    /// The operands, in evaluation order. Never empty once inserted.
    pub inputs: Vec<InputElement<F>>,
}

impl<F: Field> Gate<F> {
    /// An n-ary addition over `inputs`.
    pub fn sum(inputs: Vec<InputElement<F>>) -> Self {
        Self {
            kind: GateKind::Sum,
            inputs,
        }
    }

    /// An n-ary multiplication over `inputs`.
    pub fn product(inputs: Vec<InputElement<F>>) -> Self {
        Self {
            kind: GateKind::Product,
            inputs,
        }
    }
}

/// An arithmetic circuit over `F`: a fixed number of inputs followed by a
/// topologically ordered list of gates.
///
/// Inputs and gates share a single 1-based wire address space: inputs occupy
/// `1..=input_size`, and the gate appended `k`-th (0-based) occupies
/// `input_size + k + 1`. A circuit is built once through [`Self::add_gate`]
/// and treated as frozen while proving or verifying.
#[derive(Debug, Clone, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct ArithmeticCircuit<F: Field> {
    input_size: usize,
    gates: Vec<Gate<F>>,
}

impl<F: Field> ArithmeticCircuit<F> {
    /// Creates a circuit with `input_size` inputs and no gates.
    pub fn new(input_size: usize) -> Self {
        Self {
            input_size,
            gates: Vec::new(),
        }
    }

    /// Appends `gate` to the circuit and returns its 1-based wire number.
    ///
    /// Insertion is the only place the wire graph needs checking: every
    /// `Variable` operand must name an input or an earlier gate, and the
    /// operand list must be non-empty (an empty product has no meaningful
    /// value).
    pub fn add_gate(&mut self, gate: Gate<F>) -> Result<u32, CircuitError> {
        if gate.inputs.is_empty() {
            return Err(CircuitError::EmptyGate);
        }
        let bound = self.size() as u32;
        for element in &gate.inputs {
            if let InputElement::Variable(wire) = element {
                if *wire == 0 || *wire > bound {
                    return Err(CircuitError::WireOutOfRange);
                }
            }
        }
        self.gates.push(gate);
        Ok(self.size() as u32)
    }

    /// Removes all gates from the circuit. The declared input size is kept.
    pub fn clear_gates(&mut self) {
        self.gates.clear();
    }

    /// Total number of wires: inputs plus gates.
    pub fn size(&self) -> usize {
        self.input_size + self.gates.len()
    }

    /// The declared number of circuit inputs.
    pub fn num_inputs(&self) -> usize {
        self.input_size
    }

    /// The number of gates added so far.
    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    /// Evaluates the circuit on `input`, returning the value computed by the
    /// last gate.
    ///
    /// Gates are evaluated in insertion order over a scratch wire vector. A
    /// `Sum` gate folds its operands into a zero accumulator; a `Product`
    /// gate seeds its accumulator with the first operand and multiplies the
    /// remaining ones in.
    pub fn evaluate(&self, input: &[F]) -> Result<F, CircuitError> {
        if input.len() != self.input_size {
            return Err(CircuitError::InputSizeMismatch);
        }
        if self.gates.is_empty() {
            return Err(CircuitError::EmptyCircuit);
        }

        let mut wires = vec![F::zero(); self.size()];
        wires[..self.input_size].copy_from_slice(input);

        let mut output = F::zero();
        for (offset, gate) in self.gates.iter().enumerate() {
            output = match gate.kind {
                GateKind::Sum => {
                    let mut acc = F::zero();
                    for element in &gate.inputs {
                        acc += element.value(&wires);
                    }
                    acc
                },
                GateKind::Product => {
                    // Operand lists are non-empty by construction.
                    let mut acc = gate.inputs[0].value(&wires);
                    for element in &gate.inputs[1..] {
                        acc *= element.value(&wires);
                    }
                    acc
                },
            };
            wires[self.input_size + offset] = output;
        }
        Ok(output)
    }

    /// Returns the largest degree computed by any gate.
    ///
    /// Inputs have degree 1 and constants degree 0; a `Sum` gate takes the
    /// maximum over its operand degrees and a `Product` gate their sum. An
    /// empty circuit has degree 0.
    pub fn degree(&self) -> u64 {
        let mut degrees = vec![0u64; self.size()];
        for wire in degrees.iter_mut().take(self.input_size) {
            *wire = 1;
        }

        let mut max_degree = 0;
        for (offset, gate) in self.gates.iter().enumerate() {
            let operand_degree = |element: &InputElement<F>| match element {
                InputElement::Variable(wire) => degrees[(wire - 1) as usize],
                InputElement::Constant(_) => 0,
            };
            let gate_degree = match gate.kind {
                GateKind::Sum => gate.inputs.iter().map(operand_degree).max().unwrap_or(0),
                GateKind::Product => gate.inputs.iter().map(operand_degree).sum(),
            };
            degrees[self.input_size + offset] = gate_degree;
            max_degree = max_degree.max(gate_degree);
        }
        max_degree
    }
}

impl<F: Field> fmt::Display for ArithmeticCircuit<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Arithmetic circuit with {} inputs and {} gates (size {}, degree {})",
            self.input_size,
            self.num_gates(),
            self.size(),
            self.degree()
        )
    }
}
