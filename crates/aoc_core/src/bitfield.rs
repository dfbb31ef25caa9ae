//! Fixed-width binary values with positional access.
//!
//! A [`BitField`] keeps its width next to the packed value, so `00101` and
//! `101` are different fields even though they pack to the same number.

use crate::bit_utils::BitPack;
use crate::{AocError, ParseErrorKind};
use aoc_common::bits::{MAX_WIDTH, ONE, ZERO};
use core::fmt;
use core::str::FromStr;

/// Immutable binary value of a fixed number of significant bits.
///
/// The low `length` bits of `value` and the cached text always describe the
/// same bits; bits above `length` are kept clear. Position 0 addresses the
/// leftmost (most significant) bit of the field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitField {
    value: u64,
    length: usize,
    text: String,
}

impl BitField {
    /// Builds a field of `length` bits from a packed value.
    ///
    /// Bits of `value` above `length` are discarded and the textual form is
    /// regenerated from the remaining bits.
    ///
    /// # Errors
    ///
    /// [`AocError::Parse`] with [`ParseErrorKind::TooWide`] if `length`
    /// exceeds 64.
    pub fn from_value(value: u64, length: usize) -> Result<Self, AocError> {
        if length > MAX_WIDTH {
            return Err(AocError::parse(
                format!("{value:#b}"),
                ParseErrorKind::TooWide(length),
            ));
        }

        let value = value & BitPack::mask(length);
        Ok(Self {
            value,
            length,
            text: BitPack::render(value, length),
        })
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Number of significant bits.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns whether the bit at `pos` is set (0 = most significant).
    ///
    /// # Panics
    ///
    /// Panics if `pos >= self.len()`, like slice indexing. Use
    /// [`BitField::try_get`] for a checked lookup.
    pub fn get(&self, pos: usize) -> bool {
        assert!(
            pos < self.length,
            "bit position {pos} out of range for width {}",
            self.length
        );
        BitPack::get(self.value, self.length, pos)
    }

    pub fn try_get(&self, pos: usize) -> Result<bool, AocError> {
        if pos < self.length {
            Ok(BitPack::get(self.value, self.length, pos))
        } else {
            Err(AocError::PositionOutOfRange {
                pos,
                width: self.length,
            })
        }
    }

    /// Returns a field of the same width with every bit flipped.
    ///
    /// The flip is driven by the textual form, so bits above the width stay
    /// clear.
    pub fn invert(&self) -> Self {
        let text: String = self
            .text
            .chars()
            .map(|c| if c == ZERO { ONE } else { ZERO })
            .collect();

        Self {
            value: !self.value & BitPack::mask(self.length),
            length: self.length,
            text,
        }
    }
}

impl FromStr for BitField {
    type Err = AocError;

    /// Parses a string of `'0'`/`'1'` characters, preserving it verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AocError::parse(s, ParseErrorKind::Empty));
        }
        if let Some(c) = s.chars().find(|&c| c != ZERO && c != ONE) {
            return Err(AocError::parse(s, ParseErrorKind::InvalidDigit(c)));
        }
        if s.len() > MAX_WIDTH {
            return Err(AocError::parse(s, ParseErrorKind::TooWide(s.len())));
        }

        let value = s
            .chars()
            .fold(0u64, |acc, c| (acc << 1) | u64::from(c == ONE));

        Ok(Self {
            value,
            length: s.len(),
            text: s.to_owned(),
        })
    }
}

impl fmt::Display for BitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_leading_zeros() {
        let field: BitField = "00101".parse().unwrap();
        assert_eq!(field.value(), 5);
        assert_eq!(field.len(), 5);
        assert_eq!(field.to_string(), "00101");
    }

    #[test]
    fn get_reads_from_the_left() {
        let field: BitField = "10110".parse().unwrap();
        let bits: Vec<bool> = (0..field.len()).map(|i| field.get(i)).collect();
        assert_eq!(bits, vec![true, false, true, true, false]);
    }

    #[test]
    fn try_get_rejects_out_of_range() {
        let field: BitField = "101".parse().unwrap();
        assert_eq!(field.try_get(2), Ok(true));
        assert_eq!(
            field.try_get(3),
            Err(AocError::PositionOutOfRange { pos: 3, width: 3 })
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn get_past_width_panics() {
        let field: BitField = "101".parse().unwrap();
        field.get(3);
    }

    #[test]
    fn from_value_regenerates_text() {
        let field = BitField::from_value(0b1010, 6).unwrap();
        assert_eq!(field.as_str(), "001010");
        assert_eq!(field, "001010".parse().unwrap());
    }

    #[test]
    fn from_value_masks_high_bits() {
        let field = BitField::from_value(0b1111_0011, 4).unwrap();
        assert_eq!(field.value(), 0b0011);
        assert_eq!(field.as_str(), "0011");
    }

    #[test]
    fn from_value_rejects_wide_fields() {
        let err = BitField::from_value(1, 65).unwrap_err();
        assert!(matches!(
            err,
            AocError::Parse {
                reason: ParseErrorKind::TooWide(65),
                ..
            }
        ));
    }

    #[test]
    fn invert_flips_only_significant_bits() {
        let field: BitField = "10110".parse().unwrap();
        let inverted = field.invert();
        assert_eq!(inverted.as_str(), "01001");
        assert_eq!(inverted.value(), 0b01001);
        assert_eq!(inverted.len(), 5);
    }

    #[test]
    fn invert_full_width() {
        let field = BitField::from_value(0, 64).unwrap();
        assert_eq!(field.invert().value(), u64::MAX);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "".parse::<BitField>(),
            Err(AocError::parse("", ParseErrorKind::Empty))
        );
        assert_eq!(
            "10201".parse::<BitField>(),
            Err(AocError::parse("10201", ParseErrorKind::InvalidDigit('2')))
        );
        assert!(matches!(
            "+101".parse::<BitField>(),
            Err(AocError::Parse {
                reason: ParseErrorKind::InvalidDigit('+'),
                ..
            })
        ));

        let wide = "1".repeat(65);
        assert_eq!(
            wide.parse::<BitField>(),
            Err(AocError::parse(wide.clone(), ParseErrorKind::TooWide(65)))
        );
    }

    #[test]
    fn parse_full_width() {
        let text = "1".repeat(64);
        let field: BitField = text.parse().unwrap();
        assert_eq!(field.value(), u64::MAX);
    }
}
