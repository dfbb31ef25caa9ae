//! Core algorithms and data structures for the puzzle toolkit.
//!
//! This crate provides the binary diagnostic engine (fixed-width bit fields
//! and majority-vote reduction over collections of them), a generic matrix
//! type, small sequence/set/map helpers and the solvers for the lanternfish,
//! transparent origami and anagram puzzles. Everything here is pure and
//! in-memory; reading input is left to `aoc_io` and presentation to the host.

use thiserror::Error;

/// Letter histograms and anagram comparison.
pub mod anagram;

/// Positional access to bits packed MSB-first in a machine word.
///
/// Used by [`bitfield::BitField`] to answer positional queries and by
/// [`bitfield_array::BitFieldArray`] to assemble majority-vote results.
pub mod bit_utils;

/// Fixed-width immutable binary values.
///
/// A `BitField` remembers how many bits are significant, so leading zeros are
/// preserved and inversion only flips the significant bits.
pub mod bitfield;

/// Collections of equal-width bit fields and the rating reduction.
///
/// Implements column-wise most/least common bit analysis and the iterative
/// filtering that narrows a diagnostic report down to a single rating.
pub mod bitfield_array;

/// String-to-value converters over a closed set of target types.
pub mod convert;

/// Submarine diagnostics built on top of the bit field reduction.
///
/// Combines the gamma/epsilon rates into power consumption and the oxygen
/// generator/CO2 scrubber ratings into the life support rating.
pub mod diagnostic;

/// Lanternfish population model grouped by spawn timer.
pub mod lanternfish;

/// Aggregations over map-like collections of key/value pairs.
pub mod maps;

/// Dense two-dimensional grid with bounds checks and neighbour iteration.
///
/// Backs the rendered origami output and the character/digit matrices read
/// by `aoc_io`.
pub mod matrix;

/// Transparent paper folding.
///
/// Dots live in a set; each fold reflects the dots beyond its line onto the
/// other half, merging any that land on the same position.
pub mod origami;

/// Hash set wrapper with the set algebra the solvers rely on.
pub mod sets;

/// Free functions over slices: partitioning, filtering and summaries.
pub mod slices;

/// Key/value pair used by the line parsers.
pub mod tuples;

/// Reason a piece of text could not be turned into a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The input was empty where at least one character is required.
    #[error("input is empty")]
    Empty,

    /// A character outside the accepted alphabet was found.
    #[error("unexpected character {0:?}")]
    InvalidDigit(char),

    /// A bit field wider than the packed representation was requested.
    #[error("width {0} exceeds {max} bits", max = aoc_common::bits::MAX_WIDTH)]
    TooWide(usize),

    /// The input is not a decimal integer.
    #[error("not an integer")]
    InvalidInteger,

    /// A lanternfish timer outside `0..=8`.
    #[error("timer {0} is outside 0..={max}", max = aoc_common::lanternfish::NEWBORN_TIMER)]
    TimerOutOfRange(usize),

    /// A fold instruction named an axis other than `x` or `y`.
    #[error("unknown fold axis {0:?}")]
    UnknownAxis(String),

    /// A line did not split into the expected number of parts.
    #[error("expected {expected} parts separated by {separator:?}, found {found}")]
    WrongPartCount {
        expected: usize,
        found: usize,
        separator: String,
    },
}

/// Error types returned by the core algorithms.
///
/// Every failure mode of the diagnostic engine and the solvers is reported
/// through this enum instead of aborting, so callers decide whether malformed
/// puzzle data is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AocError {
    /// Text could not be converted into the requested value.
    ///
    /// Raised for non-binary characters or over-wide bit fields, malformed
    /// integers and unrecognised instructions. Nothing is partially built.
    #[error("cannot parse {input:?}: {reason}")]
    Parse {
        input: String,
        reason: ParseErrorKind,
    },

    /// An operation that needs at least one entry was given none.
    #[error("operation requires at least one entry")]
    EmptyCollection,

    /// Rating reduction ran out of bit positions before a single entry
    /// remained.
    ///
    /// Indicates duplicate entries in the report, or a candidate pool that
    /// emptied because every survivor shared the discarded bit.
    #[error("reduction exhausted every bit position with {remaining} candidates left")]
    ReductionExhausted { remaining: usize },

    /// A bit field array entry does not share the width of the first entry.
    #[error("entry {index} has width {found}, expected {expected}")]
    WidthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// A bit position at or beyond the field width was requested.
    #[error("bit position {pos} is outside a field of width {width}")]
    PositionOutOfRange { pos: usize, width: usize },

    /// Matrix rows of different lengths.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A lanternfish population no longer fits in the counters.
    #[error("lanternfish population overflows on day {day}")]
    PopulationOverflow { day: usize },

    /// Reflecting a dot would leave the representable coordinate range.
    #[error("fold along {axis}={line} moves {value} out of range")]
    CoordinateOverflow {
        axis: &'static str,
        line: i64,
        value: i64,
    },

    /// The dots span a grid too large to draw.
    #[error("{columns}x{rows} grid exceeds {max} cells", max = aoc_common::origami::MAX_RENDER_CELLS)]
    GridTooLarge { columns: u128, rows: u128 },

    /// Median was requested for an even-length sequence.
    #[error("median of an even-length sequence is not supported")]
    EvenMedian,
}

impl AocError {
    /// Shorthand for a [`AocError::Parse`] over the offending input.
    pub fn parse(input: impl Into<String>, reason: ParseErrorKind) -> Self {
        Self::Parse {
            input: input.into(),
            reason,
        }
    }
}
