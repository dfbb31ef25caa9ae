//! Parsers for the structured puzzle formats.
//!
//! Each line is parsed with `nom` and must be consumed completely; semantic
//! checks (fold axis, timer range) are delegated to the core types so their
//! errors name the offending value.

use anyhow::{Context, Result, anyhow};
use aoc_common::origami::FOLD_PREFIX;
use aoc_core::lanternfish::School;
use aoc_core::origami::{Axis, Coord, Fold, Instructions, Paper};
use log::debug;
use nom::IResult;
use nom::bytes::complete::tag;
use nom::character::complete::{self as cc, alpha1, char, digit1, space0};
use nom::combinator::{all_consuming, map, map_res};
use nom::multi::separated_list1;
use nom::sequence::{delimited, preceded, separated_pair};

fn coord(input: &str) -> IResult<&str, Coord> {
    map(separated_pair(cc::i64, char(','), cc::i64), |(x, y)| {
        Coord::new(x, y)
    })(input)
}

fn fold(input: &str) -> IResult<&str, (&str, i64)> {
    preceded(tag(FOLD_PREFIX), separated_pair(alpha1, char('='), cc::i64))(input)
}

fn timers(input: &str) -> IResult<&str, Vec<usize>> {
    separated_list1(
        char(','),
        delimited(space0, map_res(digit1, str::parse::<usize>), space0),
    )(input)
}

/// Runs `parser` over the whole of `input`.
fn finish<'a, T>(input: &'a str, parser: impl FnMut(&'a str) -> IResult<&'a str, T>) -> Result<T> {
    all_consuming(parser)(input)
        .map(|(_, value)| value)
        .map_err(|e| anyhow!("Malformed line {input:?}: {e}"))
}

/// Parses a dot line such as `6,10`.
pub fn parse_coord(line: &str) -> Result<Coord> {
    finish(line.trim(), coord)
}

/// Parses a fold line such as `fold along y=7`.
pub fn parse_fold(line: &str) -> Result<Fold> {
    let (axis, at) = finish(line.trim(), fold)?;
    Ok(Fold::new(Axis::from_name(axis)?, at))
}

/// Parses the full origami input: dot lines, then fold lines.
///
/// Blank lines are skipped, so the separator between the two sections is
/// optional.
pub fn parse_instructions(input: &str) -> Result<Instructions> {
    let mut dots = Vec::new();
    let mut folds = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with(FOLD_PREFIX) {
            folds.push(parse_fold(line).with_context(|| format!("Line {}", idx + 1))?);
        } else {
            dots.push(parse_coord(line).with_context(|| format!("Line {}", idx + 1))?);
        }
    }

    debug!("Parsed {} dots and {} folds", dots.len(), folds.len());
    Ok(Instructions {
        paper: Paper::new(dots),
        folds,
    })
}

/// Parses comma-separated timers; several lines are concatenated.
pub fn parse_school(input: &str) -> Result<School> {
    let mut all = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        all.extend(finish(line, timers).with_context(|| format!("Line {}", idx + 1))?);
    }

    debug!("Parsed {} lanternfish", all.len());
    Ok(School::from_timers(all)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_core::AocError;

    #[test]
    fn coords() {
        assert_eq!(parse_coord("6,10").unwrap(), Coord::new(6, 10));
        assert_eq!(parse_coord(" -1,3 ").unwrap(), Coord::new(-1, 3));
        assert!(parse_coord("6;10").is_err());
        assert!(parse_coord("6,10,2").is_err());
    }

    #[test]
    fn folds() {
        assert_eq!(parse_fold("fold along y=7").unwrap(), Fold::new(Axis::Y, 7));
        assert_eq!(parse_fold("fold along x=5").unwrap(), Fold::new(Axis::X, 5));

        let err = parse_fold("fold along z=5").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AocError>(),
            Some(AocError::Parse { .. })
        ));
        assert!(parse_fold("fold along x=").is_err());
    }

    #[test]
    fn example_instructions() {
        let input = "6,10\n0,14\n9,10\n0,3\n10,4\n4,11\n6,0\n6,12\n4,1\n0,13\n10,12\n3,4\n3,0\n8,4\n1,10\n2,14\n8,10\n9,0\n\nfold along y=7\nfold along x=5\n";
        let mut instructions = parse_instructions(input).unwrap();
        assert_eq!(instructions.paper.dot_count(), 18);
        assert_eq!(
            instructions.folds,
            vec![Fold::new(Axis::Y, 7), Fold::new(Axis::X, 5)]
        );
        assert_eq!(instructions.fold_all().unwrap(), vec![17, 16]);
    }

    #[test]
    fn instruction_errors_name_the_line() {
        let err = parse_instructions("1,2\nfold along q=1\n").unwrap_err();
        assert!(format!("{err:#}").contains("Line 2"));
    }

    #[test]
    fn schools() {
        let school = parse_school("3,4,3,1,2\n").unwrap();
        assert_eq!(school.population(), 5);

        let split = parse_school("3, 4\n3,1,2").unwrap();
        assert_eq!(split, school);

        assert!(parse_school("3,x").is_err());
        assert!(parse_school("3,,4").is_err());

        let err = parse_school("1,9").unwrap_err();
        assert!(err.to_string().contains("timer 9"));
    }
}
