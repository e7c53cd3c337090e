use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::vec::Vec;
use ark_test_curves::bls12_381::Fr;

use super::{ArithmeticCircuit, Gate, InputElement};
use crate::error::CircuitError;

fn var(wire: u32) -> InputElement<Fr> {
    InputElement::Variable(wire)
}

fn sample_input() -> Vec<Fr> {
    vec![Fr::from(2u64), Fr::from(7u64), Fr::from(6u64), Fr::from(2u64)]
}

/// C = ((x1 + x2) + x3 + x3) * (x1 + x2) * x4
fn three_gate_circuit() -> ArithmeticCircuit<Fr> {
    let mut circuit = ArithmeticCircuit::new(4);

    let g1 = circuit.add_gate(Gate::sum(vec![var(1), var(2)])).unwrap();
    let g2 = circuit
        .add_gate(Gate::sum(vec![var(g1), var(3), var(3)]))
        .unwrap();
    circuit
        .add_gate(Gate::product(vec![var(g2), var(4), var(g1)]))
        .unwrap();

    circuit
}

#[test]
fn test_evaluate() {
    let circuit = three_gate_circuit();
    assert_eq!(circuit.evaluate(&sample_input()).unwrap(), Fr::from(378u64));
}

#[test]
fn test_evaluate_inner_product() {
    let mut circuit = ArithmeticCircuit::<Fr>::new(4);
    circuit.add_inner_product_gates().unwrap();

    // x1 * x3 + x2 * x4
    assert_eq!(circuit.evaluate(&sample_input()).unwrap(), Fr::from(26u64));
}

#[test]
fn test_evaluate_quadratic_inner_product() {
    let mut circuit = ArithmeticCircuit::<Fr>::new(4);
    circuit.add_quadratic_inner_product_gates().unwrap();

    // (x1^2 + x2^2) * x3 + (x1^2 + x2^2) * x4
    assert_eq!(circuit.evaluate(&sample_input()).unwrap(), Fr::from(424u64));
}

#[test]
fn test_gate_numbering() {
    let mut circuit = ArithmeticCircuit::<Fr>::new(3);
    assert_eq!(circuit.size(), 3);

    let first = circuit.add_gate(Gate::sum(vec![var(1), var(2)])).unwrap();
    assert_eq!(first, 4);
    let second = circuit
        .add_gate(Gate::product(vec![var(first), var(3)]))
        .unwrap();
    assert_eq!(second, 5);
    assert_eq!(circuit.size(), 5);
    assert_eq!(circuit.num_gates(), 2);
    assert_eq!(circuit.num_inputs(), 3);
}

#[test]
fn test_degree() {
    // g3 multiplies three degree-1 wires, so the circuit has degree 3.
    assert_eq!(three_gate_circuit().degree(), 3);

    let mut inner = ArithmeticCircuit::<Fr>::new(4);
    inner.add_inner_product_gates().unwrap();
    assert_eq!(inner.degree(), 2);

    let mut quadratic = ArithmeticCircuit::<Fr>::new(4);
    quadratic.add_quadratic_inner_product_gates().unwrap();
    assert_eq!(quadratic.degree(), 3);

    assert_eq!(ArithmeticCircuit::<Fr>::new(4).degree(), 0);
}

#[test]
fn test_constants_in_gates() {
    let mut circuit = ArithmeticCircuit::<Fr>::new(1);
    circuit
        .add_gate(Gate::sum(vec![
            var(1),
            InputElement::Constant(Fr::from(10u64)),
        ]))
        .unwrap();
    assert_eq!(
        circuit.evaluate(&[Fr::from(5u64)]).unwrap(),
        Fr::from(15u64)
    );

    // Constants do not raise the degree.
    assert_eq!(circuit.degree(), 1);

    circuit.clear_gates();
    circuit
        .add_gate(Gate::product(vec![
            InputElement::Constant(Fr::from(3u64)),
            var(1),
            var(1),
        ]))
        .unwrap();
    assert_eq!(
        circuit.evaluate(&[Fr::from(4u64)]).unwrap(),
        Fr::from(48u64)
    );
    assert_eq!(circuit.degree(), 2);
}

#[test]
fn test_product_of_single_constant() {
    let mut circuit = ArithmeticCircuit::<Fr>::new(1);
    circuit
        .add_gate(Gate::product(vec![InputElement::Constant(Fr::from(9u64))]))
        .unwrap();
    assert_eq!(circuit.evaluate(&[Fr::from(2u64)]).unwrap(), Fr::from(9u64));
}

#[test]
fn test_empty_gate_is_rejected() {
    let mut circuit = ArithmeticCircuit::<Fr>::new(2);
    assert_eq!(
        circuit.add_gate(Gate::sum(Vec::new())),
        Err(CircuitError::EmptyGate)
    );
    assert_eq!(circuit.num_gates(), 0);
}

#[test]
fn test_forward_references_are_rejected() {
    let mut circuit = ArithmeticCircuit::<Fr>::new(2);
    assert_eq!(
        circuit.add_gate(Gate::sum(vec![var(1), var(3)])),
        Err(CircuitError::WireOutOfRange)
    );
    assert_eq!(
        circuit.add_gate(Gate::sum(vec![var(0)])),
        Err(CircuitError::WireOutOfRange)
    );

    // A rejected gate leaves the circuit untouched.
    assert_eq!(circuit.size(), 2);
}

#[test]
fn test_empty_circuit_evaluation_fails() {
    let circuit = ArithmeticCircuit::<Fr>::new(2);
    assert_eq!(
        circuit.evaluate(&[Fr::from(1u64), Fr::from(2u64)]),
        Err(CircuitError::EmptyCircuit)
    );
}

#[test]
fn test_input_size_mismatch() {
    let circuit = three_gate_circuit();
    assert_eq!(
        circuit.evaluate(&[Fr::from(1u64)]),
        Err(CircuitError::InputSizeMismatch)
    );
}

#[test]
fn test_clear_gates() {
    let mut circuit = three_gate_circuit();
    circuit.clear_gates();
    assert_eq!(circuit.size(), 4);
    assert_eq!(circuit.degree(), 0);

    // Numbering restarts after clearing.
    let gate = circuit.add_gate(Gate::sum(vec![var(1), var(4)])).unwrap();
    assert_eq!(gate, 5);
}

#[test]
fn test_odd_input_size_skips_middle_pair() {
    // middle = 3 and position 2 is skipped, so the remaining pairs are
    // (x1, x4) and (x3, wire 6), where wire 6 is the first product gate.
    let mut circuit = ArithmeticCircuit::<Fr>::new(5);
    circuit.add_inner_product_gates().unwrap();

    let input = [
        Fr::from(2u64),
        Fr::from(3u64),
        Fr::from(4u64),
        Fr::from(5u64),
        Fr::from(6u64),
    ];
    // x1 * x4 = 10, then x3 * 10 = 40, summed: 50.
    assert_eq!(circuit.evaluate(&input).unwrap(), Fr::from(50u64));
}

#[test]
fn test_tiny_odd_input_size_gadget_fails() {
    // With three inputs only the pair (x2, wire 4) remains, and wire 4 does
    // not exist when the first product gate is inserted.
    let mut circuit = ArithmeticCircuit::<Fr>::new(3);
    assert_eq!(
        circuit.add_inner_product_gates(),
        Err(CircuitError::WireOutOfRange)
    );
}

#[test]
fn test_serialization_round_trip() {
    let circuit = three_gate_circuit();

    let mut bytes = Vec::new();
    circuit.serialize_compressed(&mut bytes).unwrap();
    let recovered = ArithmeticCircuit::<Fr>::deserialize_compressed(&bytes[..]).unwrap();

    assert_eq!(recovered, circuit);
    assert_eq!(
        recovered.evaluate(&sample_input()).unwrap(),
        Fr::from(378u64)
    );
}
