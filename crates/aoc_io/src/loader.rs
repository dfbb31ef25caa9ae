use crate::fileparser;
use anyhow::{Context, Result};
use aoc_core::bitfield::BitField;
use aoc_core::bitfield_array::BitFieldArray;
use log::debug;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads the whole puzzle input from `path`, or from stdin when no path is
/// given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            debug!("Reading input from {}", path.display());
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            debug!("Reading input from stdin");
            let mut data = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut data)
                .context("Failed to read stdin")?;
            Ok(data)
        }
    }
}

/// Parses a diagnostic report: one binary number per line, all the same
/// width.
pub fn report_from_str(input: &str) -> Result<BitFieldArray> {
    let lines = fileparser::split_lines(input);
    let fields: Vec<BitField> = fileparser::convert_lines(&lines)?;
    let report = BitFieldArray::new(fields).context("Malformed diagnostic report")?;
    debug!(
        "Loaded report: {} entries of width {}",
        report.len(),
        report.width()
    );
    Ok(report)
}

/// Loads a diagnostic report file.
pub fn load_report<P: AsRef<Path>>(path: P) -> Result<BitFieldArray> {
    let path = path.as_ref();
    let fields: Vec<BitField> = fileparser::read_singles(path)?;
    BitFieldArray::new(fields).with_context(|| format!("Malformed report {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const EXAMPLE: &str = "00100\n11110\n10110\n10111\n10101\n01111\n00111\n11100\n10000\n11001\n00010\n01010\n";

    #[test]
    fn report_from_text() {
        let report = report_from_str(EXAMPLE).unwrap();
        assert_eq!(report.len(), 12);
        assert_eq!(report.width(), 5);
    }

    #[test]
    fn report_rejects_mixed_widths() {
        let err = report_from_str("101\n1101\n").unwrap_err();
        assert!(format!("{err:#}").contains("entry 1 has width 4"));
    }

    #[test]
    fn report_rejects_non_binary() {
        let err = report_from_str("101\n121\n").unwrap_err();
        assert!(format!("{err:#}").contains("Line 2"));
    }

    #[test]
    fn report_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        fs::File::create(&path)
            .unwrap()
            .write_all(EXAMPLE.as_bytes())
            .unwrap();

        let report = load_report(&path).unwrap();
        assert_eq!(report.reduce_to_rating(true).unwrap().value(), 23);
        assert_eq!(read_input(Some(path.as_path())).unwrap(), EXAMPLE);
    }
}
