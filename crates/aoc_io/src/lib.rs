//! I/O utilities for loading puzzle inputs.
//!
//! Provides functions for reading line-oriented puzzle files (or stdin) and
//! parsing them into the core data structures: diagnostic reports, lanternfish
//! timers and origami instructions. Every failure carries the file, line or
//! token that caused it.

/// Generic line readers with typed conversion.
///
/// Reads whole files, splits them into trimmed lines and converts each line,
/// pair or character through the core converters. Also builds character and
/// digit matrices from rectangular inputs.
pub mod fileparser;

/// Loading of binary diagnostic reports.
///
/// Turns `0`/`1` lines into a width-checked `BitFieldArray`, and reads raw
/// puzzle input from a file or stdin.
pub mod loader;

/// Parsers for the structured puzzle formats.
///
/// Uses `nom` combinators for dot coordinates, fold instructions and
/// comma-separated lanternfish timers.
pub mod parser;
