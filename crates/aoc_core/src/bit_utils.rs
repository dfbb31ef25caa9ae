use aoc_common::bits::{MAX_WIDTH, ONE, ZERO};
use bitvec::prelude::*;

/// Bit access for fields packed into the low `width` bits of a `u64`.
///
/// Position 0 is the most significant bit of the field, not of the word.
pub struct BitPack;

impl BitPack {
    /// Mask covering the low `width` bits.
    #[inline(always)]
    pub fn mask(width: usize) -> u64 {
        if width >= MAX_WIDTH {
            u64::MAX
        } else {
            (1 << width) - 1
        }
    }

    #[inline(always)]
    pub fn get(value: u64, width: usize, pos: usize) -> bool {
        value.view_bits::<Msb0>()[MAX_WIDTH - width + pos]
    }

    #[inline(always)]
    pub fn set(value: &mut u64, width: usize, pos: usize, val: bool) {
        value
            .view_bits_mut::<Msb0>()
            .set(MAX_WIDTH - width + pos, val);
    }

    /// Renders the field as `'0'`/`'1'` characters, most significant first.
    pub fn render(value: u64, width: usize) -> String {
        value.view_bits::<Msb0>()[MAX_WIDTH - width..]
            .iter()
            .by_vals()
            .map(|bit| if bit { ONE } else { ZERO })
            .collect()
    }
}
