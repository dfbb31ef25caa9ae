//! Majority-vote analysis over collections of equal-width bit fields.
//!
//! The reduction implemented here narrows a report to a single entry by
//! repeatedly keeping only the entries whose bit at the current position
//! matches the most (or least) common bit among the *remaining* entries.

use crate::bit_utils::BitPack;
use crate::bitfield::BitField;
use crate::{AocError, slices};
use core::ops::Index;
use log::debug;

/// Ordered collection of bit fields sharing one width.
///
/// The shared width is checked once at construction, so every positional
/// query below can index any entry with the width of the first one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitFieldArray {
    fields: Vec<BitField>,
}

impl BitFieldArray {
    /// Wraps `fields`, rejecting entries whose width differs from the first.
    pub fn new(fields: Vec<BitField>) -> Result<Self, AocError> {
        if let Some(first) = fields.first() {
            let expected = first.len();
            if let Some((index, field)) = fields
                .iter()
                .enumerate()
                .find(|(_, field)| field.len() != expected)
            {
                return Err(AocError::WidthMismatch {
                    index,
                    expected,
                    found: field.len(),
                });
            }
        }

        Ok(Self { fields })
    }

    /// Parses every string as a [`BitField`] and collects them.
    pub fn try_from_strs<I, S>(lines: I) -> Result<Self, AocError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields = lines
            .into_iter()
            .map(|line| line.as_ref().parse())
            .collect::<Result<Vec<BitField>, _>>()?;
        Self::new(fields)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Width shared by all entries, 0 for an empty array.
    pub fn width(&self) -> usize {
        self.fields.first().map_or(0, BitField::len)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, BitField> {
        self.fields.iter()
    }

    pub fn as_slice(&self) -> &[BitField] {
        &self.fields
    }

    /// Builds a field whose bit at each position is the most common bit of
    /// that column.
    ///
    /// A column counts as `1` when at least half the entries have it set, so
    /// an even split yields `1`.
    ///
    /// # Errors
    ///
    /// [`AocError::EmptyCollection`] if the array has no entries.
    pub fn most_common(&self) -> Result<BitField, AocError> {
        let width = self
            .fields
            .first()
            .ok_or(AocError::EmptyCollection)?
            .len();

        let mut value = 0u64;
        for pos in 0..width {
            let count = slices::count_if(&self.fields, |field| field.get(pos));
            BitPack::set(&mut value, width, pos, 2 * count >= self.fields.len());
        }

        BitField::from_value(value, width)
    }

    /// Keeps the entries whose bit at `pos` matches the most common bit
    /// (`use_common`) or the least common bit (`!use_common`) of the array.
    ///
    /// The receiver is left untouched.
    pub fn filter_by_pos(&self, pos: usize, use_common: bool) -> Result<Self, AocError> {
        let common = self.most_common()?;
        let criteria = if use_common { common } else { common.invert() };
        let wanted = criteria.try_get(pos)?;

        Ok(Self {
            fields: slices::filter(&self.fields, |field| field.get(pos) == wanted),
        })
    }

    /// Narrows the array position by position until one entry is left.
    ///
    /// The criterion is recomputed from the surviving candidates at every
    /// position. An array that starts with a single entry returns it as is.
    ///
    /// # Errors
    ///
    /// * [`AocError::EmptyCollection`] for an empty array.
    /// * [`AocError::ReductionExhausted`] if every position is used up, or
    ///   the candidates run out, before exactly one remains.
    pub fn reduce_to_rating(&self, use_common: bool) -> Result<BitField, AocError> {
        if self.is_empty() {
            return Err(AocError::EmptyCollection);
        }
        if let Some(single) = slices::is_single(&self.fields) {
            return Ok(single.clone());
        }

        let mut candidates = self.clone();
        for pos in 0..self.width() {
            candidates = candidates.filter_by_pos(pos, use_common)?;
            debug!(
                "rating (common={use_common}) bit {pos}: {} candidates left",
                candidates.len()
            );

            if let Some(single) = slices::is_single(&candidates.fields) {
                return Ok(single.clone());
            }
            if candidates.is_empty() {
                break;
            }
        }

        Err(AocError::ReductionExhausted {
            remaining: candidates.len(),
        })
    }
}

impl Index<usize> for BitFieldArray {
    type Output = BitField;

    fn index(&self, index: usize) -> &BitField {
        &self.fields[index]
    }
}

impl<'a> IntoIterator for &'a BitFieldArray {
    type Item = &'a BitField;
    type IntoIter = core::slice::Iter<'a, BitField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl IntoIterator for BitFieldArray {
    type Item = BitField;
    type IntoIter = std::vec::IntoIter<BitField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
