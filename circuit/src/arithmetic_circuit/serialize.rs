//! `ark-serialize` support for the gate data model. The enums are encoded as
//! a one-byte tag followed by the variant payload.

use ark_ff::Field;
use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, Read, SerializationError, Valid, Validate,
    Write,
};

use super::{GateKind, InputElement};

impl Valid for GateKind {
    fn check(&self) -> Result<(), SerializationError> {
        Ok(())
    }
}

impl CanonicalSerialize for GateKind {
    fn serialize_with_mode<W: Write>(
        &self,
        writer: W,
        compress: Compress,
    ) -> Result<(), SerializationError> {
        (*self as u8).serialize_with_mode(writer, compress)
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        0u8.serialized_size(compress)
    }
}

impl CanonicalDeserialize for GateKind {
    fn deserialize_with_mode<R: Read>(
        reader: R,
        compress: Compress,
        validate: Validate,
    ) -> Result<Self, SerializationError> {
        match u8::deserialize_with_mode(reader, compress, validate)? {
            0 => Ok(GateKind::Sum),
            1 => Ok(GateKind::Product),
            _ => Err(SerializationError::InvalidData),
        }
    }
}

impl<F: Field> Valid for InputElement<F> {
    fn check(&self) -> Result<(), SerializationError> {
        match self {
            InputElement::Variable(_) => Ok(()),
            InputElement::Constant(constant) => constant.check(),
        }
    }
}

impl<F: Field> CanonicalSerialize for InputElement<F> {
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        compress: Compress,
    ) -> Result<(), SerializationError> {
        match self {
            InputElement::Variable(wire) => {
                0u8.serialize_with_mode(&mut writer, compress)?;
                wire.serialize_with_mode(&mut writer, compress)
            },
            InputElement::Constant(constant) => {
                1u8.serialize_with_mode(&mut writer, compress)?;
                constant.serialize_with_mode(&mut writer, compress)
            },
        }
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        0u8.serialized_size(compress)
            + match self {
                InputElement::Variable(wire) => wire.serialized_size(compress),
                InputElement::Constant(constant) => constant.serialized_size(compress),
            }
    }
}

impl<F: Field> CanonicalDeserialize for InputElement<F> {
    fn deserialize_with_mode<R: Read>(
        mut reader: R,
        compress: Compress,
        validate: Validate,
    ) -> Result<Self, SerializationError> {
        match u8::deserialize_with_mode(&mut reader, compress, validate)? {
            0 => Ok(InputElement::Variable(u32::deserialize_with_mode(
                &mut reader,
                compress,
                validate,
            )?)),
            1 => Ok(InputElement::Constant(F::deserialize_with_mode(
                &mut reader,
                compress,
                validate,
            )?)),
            _ => Err(SerializationError::InvalidData),
        }
    }
}
