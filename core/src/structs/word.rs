use core::fmt;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::str::FromStr;
use thiserror::Error;

pub const WORD_LENGTH: usize = 5;
pub const ALPHABET_SIZE: usize = 26;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WordError {
    #[error("Expected word of length: {expected_length}. Found word \"{word}\" of length {}", word.chars().count())]
    IncorrectLength {
        word: String,
        expected_length: usize,
    },
    #[error("Word \"{word}\" contains '{letter}', only ascii letters a-z are allowed")]
    InvalidLetter { word: String, letter: char },
}

/// Five lowercase ascii letters, stored as bytes.
#[derive(
    Copy, Clone, Debug, SerializeDisplay, DeserializeFromStr, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Word(pub [u8; WORD_LENGTH]);

impl Word {
    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn letter_counts(&self) -> LetterCounts {
        LetterCounts::of(self)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in self.0.iter() {
            write!(f, "{}", c as char)?;
        }
        Ok(())
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lowered = value.trim().to_lowercase();

        if let Some(letter) = lowered.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(WordError::InvalidLetter {
                word: value.to_string(),
                letter,
            });
        }

        let array = lowered
            .into_bytes()
            .try_into()
            .map_err(|_: Vec<_>| WordError::IncorrectLength {
                word: value.to_string(),
                expected_length: WORD_LENGTH,
            })?;

        Ok(Self(array))
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Word::try_from(s)
    }
}

/// Occurrences of each letter a..z within a single word.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LetterCounts([u8; ALPHABET_SIZE]);

impl LetterCounts {
    pub fn of(word: &Word) -> Self {
        let mut counts = [0; ALPHABET_SIZE];
        for &c in word.0.iter() {
            counts[slot(c)] += 1;
        }
        Self(counts)
    }

    pub fn get(&self, letter: u8) -> u8 {
        self.0[slot(letter)]
    }

    pub fn increment(&mut self, letter: u8) {
        self.0[slot(letter)] += 1;
    }

    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| c as usize).sum()
    }
}

#[inline]
fn slot(letter: u8) -> usize {
    (letter - b'a') as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("thorn")]
    #[case("ABBEY")]
    #[case(" tacit\r")]
    fn parses_valid_words(#[case] input: &str) {
        let word: Word = input.try_into().unwrap();
        assert_eq!(word.to_string(), input.trim().to_lowercase());
    }

    #[rstest]
    #[case("thor")]
    #[case("thorns")]
    #[case("")]
    fn rejects_wrong_length(#[case] input: &str) {
        assert!(matches!(
            Word::try_from(input),
            Err(WordError::IncorrectLength { .. })
        ));
    }

    #[rstest]
    #[case("th0rn", '0')]
    #[case("śląsk", 'ś')]
    #[case("a-bcd", '-')]
    fn rejects_non_letters(#[case] input: &str, #[case] letter: char) {
        assert_eq!(
            Word::try_from(input),
            Err(WordError::InvalidLetter {
                word: input.to_string(),
                letter
            })
        );
    }

    #[rstest]
    #[case("abbey", b'b', 2)]
    #[case("tacit", b't', 2)]
    #[case("tacit", b'z', 0)]
    fn letter_counts(#[case] word: &str, #[case] letter: u8, #[case] expected: u8) {
        let counts = Word::try_from(word).unwrap().letter_counts();
        assert_eq!(counts.get(letter), expected);
        assert_eq!(counts.total(), WORD_LENGTH);
    }

    #[test]
    fn serializes_as_string() {
        let word = Word::try_from("other").unwrap();
        let json = serde_json::to_string(&word).unwrap();
        assert_eq!(json, "\"other\"");
        assert_eq!(serde_json::from_str::<Word>(&json).unwrap(), word);
    }
}
