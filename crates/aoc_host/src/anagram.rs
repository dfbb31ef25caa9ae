use anyhow::{Result, bail};
use aoc_core::anagram::{LetterHistogram, is_anagram};
use log::info;

pub struct AnagramSummary {
    pub anagrams: bool,
    pub histogram: LetterHistogram,
}

/// Compares the first two lines and histograms the first one.
pub fn solve(input: &str) -> Result<AnagramSummary> {
    let mut lines = input.lines();
    let (Some(first), Some(second)) = (lines.next(), lines.next()) else {
        bail!("Expected two lines of text");
    };

    let (first, second) = (first.to_lowercase(), second.to_lowercase());
    let histogram = LetterHistogram::from_text(&first);
    info!("{} letters in first line", histogram.total());

    Ok(AnagramSummary {
        anagrams: is_anagram(&first, &second),
        histogram,
    })
}

pub fn run(input: &str) -> Result<()> {
    let summary = solve(input)?;
    println!("{}", summary.anagrams);
    print!("{}", summary.histogram.render());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anagram_lines() {
        let summary = solve("Listen\nSilent\n").unwrap();
        assert!(summary.anagrams);
        assert_eq!(summary.histogram.render(), "e *\ni *\nl *\nn *\ns *\nt *\n");
    }

    #[test]
    fn not_anagrams() {
        assert!(!solve("abc\nabd").unwrap().anagrams);
    }

    #[test]
    fn needs_two_lines() {
        assert!(solve("only one\n").is_err());
    }
}
