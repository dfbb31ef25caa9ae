//! Common definitions and constants shared across the puzzle toolkit.
//!
//! This crate holds the fixed parameters of the puzzle formats: the widest
//! bit field the diagnostic engine can pack, the lanternfish timer layout and
//! the glyphs used when rendering folded paper. Both the core algorithms and
//! the host binary read them from here so the two sides never disagree.

#![no_std]

/// Limits and glyphs for binary diagnostic reports.
///
/// Every report line is packed into a single machine word, so the number of
/// significant bits per line is bounded by the word size.
pub mod bits {
    /// Widest bit field that fits the packed representation.
    ///
    /// Report lines longer than this are rejected at parse time rather than
    /// silently truncated.
    pub const MAX_WIDTH: usize = u64::BITS as usize;

    /// Character that renders a cleared bit.
    pub const ZERO: char = '0';

    /// Character that renders a set bit.
    pub const ONE: char = '1';
}

/// Timer layout for the lanternfish population model.
///
/// Fish are grouped by the number of days left before they spawn. A fish
/// that spawns restarts at [`lanternfish::RESET_TIMER`] and its offspring
/// starts at [`lanternfish::NEWBORN_TIMER`].
pub mod lanternfish {
    /// Timer value a fish returns to after spawning.
    pub const RESET_TIMER: usize = 6;

    /// Timer value of a freshly spawned fish.
    ///
    /// Newborns need two extra days before their first cycle, hence the gap
    /// to [`RESET_TIMER`].
    pub const NEWBORN_TIMER: usize = 8;

    /// Number of distinct timer values (0 through [`NEWBORN_TIMER`]).
    pub const TIMER_STATES: usize = NEWBORN_TIMER + 1;

    /// Days simulated when the caller does not ask for a different horizon.
    pub const DEFAULT_DAYS: usize = 80;
}

/// Rendering constants for the transparent origami puzzle.
pub mod origami {
    /// Glyph for a position covered by at least one dot.
    pub const DOT: char = '#';

    /// Glyph for an empty position.
    pub const EMPTY: char = '.';

    /// Prefix that distinguishes fold instructions from dot coordinates.
    pub const FOLD_PREFIX: &str = "fold along ";

    /// Largest grid, in cells, that the paper is rasterised into.
    ///
    /// Folded puzzle images are a few hundred cells; anything near this
    /// bound is a malformed input rather than a picture.
    pub const MAX_RENDER_CELLS: u128 = 1 << 24;
}
