//! Conversion of raw input tokens into typed values.
//!
//! Only three target types exist: text, integers and bit fields. The target
//! is chosen either statically through the [`Convert`] trait or at runtime
//! through a [`ValueKind`] tag.

use crate::bitfield::BitField;
use crate::{AocError, ParseErrorKind};

/// Tag naming one of the convertible types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Text,
    Integer,
    BitField,
}

/// A converted token of any supported kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Integer(i64),
    BitField(BitField),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Text(_) => ValueKind::Text,
            Value::Integer(_) => ValueKind::Integer,
            Value::BitField(_) => ValueKind::BitField,
        }
    }
}

/// Types that can be produced from a single input token.
pub trait Convert: Sized {
    const KIND: ValueKind;

    fn convert(input: &str) -> Result<Self, AocError>;
}

impl Convert for String {
    const KIND: ValueKind = ValueKind::Text;

    fn convert(input: &str) -> Result<Self, AocError> {
        Ok(input.to_owned())
    }
}

impl Convert for i64 {
    const KIND: ValueKind = ValueKind::Integer;

    fn convert(input: &str) -> Result<Self, AocError> {
        input
            .parse()
            .map_err(|_| AocError::parse(input, ParseErrorKind::InvalidInteger))
    }
}

impl Convert for BitField {
    const KIND: ValueKind = ValueKind::BitField;

    fn convert(input: &str) -> Result<Self, AocError> {
        input.parse()
    }
}

pub fn apply<T: Convert>(input: &str) -> Result<T, AocError> {
    T::convert(input)
}

/// Converts `input` into the type named by `kind`.
pub fn convert_as(kind: ValueKind, input: &str) -> Result<Value, AocError> {
    Ok(match kind {
        ValueKind::Text => Value::Text(apply(input)?),
        ValueKind::Integer => Value::Integer(apply(input)?),
        ValueKind::BitField => Value::BitField(apply(input)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_conversion() {
        assert_eq!(apply::<i64>("-42"), Ok(-42));
        assert_eq!(apply::<String>(" raw "), Ok(" raw ".to_owned()));
        assert_eq!(apply::<BitField>("011").map(|b| b.value()), Ok(3));
        assert_eq!(
            apply::<i64>("4x"),
            Err(AocError::parse("4x", ParseErrorKind::InvalidInteger))
        );
    }

    #[test]
    fn tagged_conversion() {
        let value = convert_as(ValueKind::Integer, "17").unwrap();
        assert_eq!(value, Value::Integer(17));
        assert_eq!(value.kind(), ValueKind::Integer);

        let bits = convert_as(ValueKind::BitField, "10").unwrap();
        assert_eq!(bits.kind(), ValueKind::BitField);
        assert_eq!(bits, Value::BitField("10".parse().unwrap()));

        assert_eq!(
            convert_as(ValueKind::Text, "abc").unwrap().kind(),
            <String as Convert>::KIND
        );
        assert!(convert_as(ValueKind::BitField, "12").is_err());
    }
}
