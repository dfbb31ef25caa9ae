//! Line-oriented readers with typed conversion.
//!
//! A file is trimmed as a whole and split on newlines, so a trailing newline
//! does not produce an empty last entry. Interior blank lines are kept.

use anyhow::{Context, Result, bail};
use aoc_core::convert::{self, Convert};
use aoc_core::matrix::{IntMatrix, Matrix};
use aoc_core::tuples::Pair;
use aoc_core::{AocError, ParseErrorKind};
use std::fs;
use std::io::BufRead;
use std::path::Path;

/// Splits already-loaded text the same way the file readers do.
pub fn split_lines(data: &str) -> Vec<String> {
    let trimmed = data.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed
        .split('\n')
        .map(|line| line.trim_end_matches('\r').to_owned())
        .collect()
}

pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(split_lines(&data))
}

pub fn lines_from_reader<R: BufRead>(mut reader: R) -> Result<Vec<String>> {
    let mut data = String::new();
    reader
        .read_to_string(&mut data)
        .context("Failed to read input stream")?;
    Ok(split_lines(&data))
}

/// Reads one value per line.
pub fn read_singles<T: Convert, P: AsRef<Path>>(path: P) -> Result<Vec<T>> {
    let path = path.as_ref();
    convert_lines(&read_lines(path)?).with_context(|| format!("In {}", path.display()))
}

/// Converts every line, reporting the 1-based line number on failure.
pub fn convert_lines<T: Convert, S: AsRef<str>>(lines: &[S]) -> Result<Vec<T>> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            convert::apply(line.as_ref()).with_context(|| format!("Line {}", i + 1))
        })
        .collect()
}

pub fn read_typed_lines<T, P: AsRef<Path>>(
    path: P,
    constructor: impl FnMut(&str) -> T,
) -> Result<Vec<T>> {
    Ok(read_lines(path)?
        .iter()
        .map(String::as_str)
        .map(constructor)
        .collect())
}

pub fn read_pairs<K: Convert, V: Convert, P: AsRef<Path>>(
    path: P,
    separator: &str,
) -> Result<Vec<Pair<K, V>>> {
    let path = path.as_ref();
    read_pairs_from_strings(&read_lines(path)?, separator)
        .with_context(|| format!("In {}", path.display()))
}

/// Splits each line into exactly two trimmed parts around `separator`.
pub fn read_pairs_from_strings<K: Convert, V: Convert, S: AsRef<str>>(
    lines: &[S],
    separator: &str,
) -> Result<Vec<Pair<K, V>>> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let line = line.as_ref();
            let parts: Vec<&str> = line.split(separator).collect();
            let [key, value] = parts[..] else {
                let reason = ParseErrorKind::WrongPartCount {
                    expected: 2,
                    found: parts.len(),
                    separator: separator.to_owned(),
                };
                return Err(AocError::parse(line, reason))
                    .with_context(|| format!("Line {}", i + 1));
            };
            Ok(Pair::new(
                convert::apply(key.trim()).with_context(|| format!("Line {} key", i + 1))?,
                convert::apply(value.trim()).with_context(|| format!("Line {} value", i + 1))?,
            ))
        })
        .collect()
}

/// Reads the comma-separated values on the first line.
pub fn read_csv_line<T: Convert, P: AsRef<Path>>(path: P) -> Result<Vec<T>> {
    let path = path.as_ref();
    let lines = read_lines(path)?;
    let Some(first) = lines.first() else {
        bail!("{} is empty", path.display());
    };
    split(first, ",")
}

pub fn read_char_matrix<T: Convert, P: AsRef<Path>>(path: P) -> Result<Matrix<T>> {
    let path = path.as_ref();
    read_char_matrix_from_lines(&read_lines(path)?)
        .with_context(|| format!("In {}", path.display()))
}

/// One matrix row per line, one entry per character.
pub fn read_char_matrix_from_lines<T: Convert, S: AsRef<str>>(lines: &[S]) -> Result<Matrix<T>> {
    let data = lines
        .iter()
        .enumerate()
        .map(|(y, line)| {
            line.as_ref()
                .chars()
                .map(|c| convert::apply(c.encode_utf8(&mut [0; 4])))
                .collect::<Result<Vec<T>, _>>()
                .with_context(|| format!("Line {}", y + 1))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Matrix::from_data(data)?)
}

pub fn read_digit_matrix<P: AsRef<Path>>(path: P) -> Result<IntMatrix<i64>> {
    read_char_matrix::<i64, _>(path).map(IntMatrix::from)
}

/// Splits `text` on `separator` and converts every part.
pub fn split<T: Convert>(text: &str, separator: &str) -> Result<Vec<T>> {
    text.split(separator)
        .map(|part| Ok(convert::apply(part)?))
        .collect()
}

/// Like [`split`], but trims each part and skips empty ones.
pub fn split_trim<T: Convert>(text: &str, separator: &str) -> Result<Vec<T>> {
    text.split(separator)
        .filter(|part| !part.is_empty())
        .map(|part| Ok(convert::apply(part.trim())?))
        .collect()
}
