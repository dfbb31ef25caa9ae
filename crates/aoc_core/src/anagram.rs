use crate::maps;
use std::collections::BTreeMap;

/// Case-insensitive count of the letters in a piece of text.
///
/// Non-alphabetic characters are ignored. Letters iterate in sorted order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LetterHistogram {
    counts: BTreeMap<char, usize>,
}

impl LetterHistogram {
    pub fn from_text(text: &str) -> Self {
        let mut counts = BTreeMap::new();
        for letter in text
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_lowercase)
        {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Number of letters counted.
    pub fn total(&self) -> usize {
        maps::sum_values(&self.counts)
    }

    pub fn most_frequent(&self) -> Option<(char, usize)> {
        maps::max_value(&self.counts).map(|(&letter, &count)| (letter, count))
    }

    pub fn letters(&self) -> impl Iterator<Item = (char, usize)> {
        self.counts.iter().map(|(&letter, &count)| (letter, count))
    }

    /// One line per letter: the letter, a space and one `*` per occurrence.
    pub fn render(&self) -> String {
        self.letters()
            .map(|(letter, count)| format!("{letter} {}\n", "*".repeat(count)))
            .collect()
    }
}

/// Two texts are anagrams when they use the same letters the same number of
/// times, ignoring case, spaces and punctuation.
pub fn is_anagram(a: &str, b: &str) -> bool {
    LetterHistogram::from_text(a) == LetterHistogram::from_text(b)
}
