//! Prebuilt gadgets. Both split the input vector into a left and a right
//! half at `middle = ceil(input_size / 2)` and combine the halves with inner
//! products.

use ark_ff::Field;
use ark_std::vec::Vec;

use super::{ArithmeticCircuit, Gate, InputElement};
use crate::error::CircuitError;

impl<F: Field> ArithmeticCircuit<F> {
    /// Appends gates computing the inner product of the left input half with
    /// the right input half. The output gate has degree 2.
    ///
    /// When `input_size` is odd the pair at left position `middle - 1` is
    /// left out of the product, and right-half addresses past `input_size`
    /// resolve against already-appended product gates (or are rejected with
    /// [`CircuitError::WireOutOfRange`] when no such gate exists yet).
    pub fn add_inner_product_gates(&mut self) -> Result<(), CircuitError> {
        let middle = self.num_inputs().div_ceil(2);
        let odd = self.num_inputs() % 2 == 1;

        let mut products = Vec::with_capacity(middle);
        for j in 1..=middle {
            if odd && j == middle - 1 {
                continue;
            }
            let pair = Gate::product(vec![
                InputElement::Variable(j as u32),
                InputElement::Variable((middle + j) as u32),
            ]);
            products.push(InputElement::Variable(self.add_gate(pair)?));
        }
        self.add_gate(Gate::sum(products))?;
        Ok(())
    }

    /// Appends gates computing an inner product between per-position
    /// sum-of-squares wires over the left half and the entries of the right
    /// half. The output gate has degree 3.
    ///
    /// One sum-of-squares wire is built per left position, but the inner
    /// square loop does not vary with the outer position, so all of these
    /// wires carry the same value. The odd-size behavior matches
    /// [`Self::add_inner_product_gates`].
    // TODO: decide whether the intended semantics square the single entry at
    // the outer position instead of summing the whole left half every time.
    pub fn add_quadratic_inner_product_gates(&mut self) -> Result<(), CircuitError> {
        let middle = self.num_inputs().div_ceil(2);
        let odd = self.num_inputs() % 2 == 1;

        let mut square_sums = Vec::with_capacity(middle);
        for _ in 1..=middle {
            let mut squares = Vec::with_capacity(middle);
            for j in 1..=middle {
                if odd && j == middle - 1 {
                    continue;
                }
                let square = Gate::product(vec![
                    InputElement::Variable(j as u32),
                    InputElement::Variable(j as u32),
                ]);
                squares.push(InputElement::Variable(self.add_gate(square)?));
            }
            square_sums.push(self.add_gate(Gate::sum(squares))?);
        }

        let mut products = Vec::with_capacity(middle);
        for i in 1..=middle {
            if odd && i == middle - 1 {
                continue;
            }
            let pair = Gate::product(vec![
                InputElement::Variable(square_sums[i - 1]),
                InputElement::Variable((middle + i) as u32),
            ]);
            products.push(InputElement::Variable(self.add_gate(pair)?));
        }
        self.add_gate(Gate::sum(products))?;
        Ok(())
    }
}
