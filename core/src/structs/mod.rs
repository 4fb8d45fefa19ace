pub mod hints;
pub mod outcome;
pub mod word;

use fxhash::FxHashMap;
use std::{io, path::PathBuf};
use thiserror::Error;

pub use hints::{FeedbackCode, FeedbackError, Hint, Hints};
pub use outcome::{Outcome, OutcomeError};
pub use word::{LetterCounts, Word, WordError, WORD_LENGTH};

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Unable to read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid word on line {line}")]
    Word {
        line: usize,
        #[source]
        source: WordError,
    },
    #[error("Expected {expected} words, found {found}")]
    LineCount { expected: usize, found: usize },
    #[error("\"{0}\" is not in the guess list")]
    UnknownGuess(String),
    #[error("\"{0}\" is not in the answer list")]
    UnknownAnswer(String),
}

/// The guess and answer lists, addressed by position.
///
/// Every answer must also be a legal guess so the search can play a
/// candidate directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
    pub guesses: Vec<Word>,
    pub answers: Vec<Word>,
    pub answer_letter_counts: Vec<LetterCounts>,
    answer_guesses: Vec<usize>,
    guess_lookup: FxHashMap<Word, usize>,
    answer_lookup: FxHashMap<Word, usize>,
}

impl Lexicon {
    pub fn new(guesses: Vec<Word>, answers: Vec<Word>) -> Result<Self, LexiconError> {
        let guess_lookup = index_words(&guesses);
        let answer_lookup = index_words(&answers);

        let answer_guesses = answers
            .iter()
            .map(|answer| {
                guess_lookup
                    .get(answer)
                    .copied()
                    .ok_or_else(|| LexiconError::UnknownGuess(answer.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let answer_letter_counts = answers.iter().map(Word::letter_counts).collect();

        Ok(Self {
            guesses,
            answers,
            answer_letter_counts,
            answer_guesses,
            guess_lookup,
            answer_lookup,
        })
    }

    pub fn guess_index(&self, word: &str) -> Result<usize, LexiconError> {
        Word::try_from(word)
            .ok()
            .and_then(|w| self.guess_lookup.get(&w).copied())
            .ok_or_else(|| LexiconError::UnknownGuess(word.to_string()))
    }

    pub fn guess_index_of(&self, word: &Word) -> Result<usize, LexiconError> {
        self.guess_lookup
            .get(word)
            .copied()
            .ok_or_else(|| LexiconError::UnknownGuess(word.to_string()))
    }

    pub fn answer_index(&self, word: &str) -> Result<usize, LexiconError> {
        Word::try_from(word)
            .ok()
            .and_then(|w| self.answer_lookup.get(&w).copied())
            .ok_or_else(|| LexiconError::UnknownAnswer(word.to_string()))
    }

    /// Guess index of the answer at `answer`.
    pub fn answer_as_guess(&self, answer: usize) -> usize {
        self.answer_guesses[answer]
    }

    pub fn all_guesses(&self) -> Vec<usize> {
        (0..self.guesses.len()).collect()
    }

    pub fn all_answers(&self) -> Vec<usize> {
        (0..self.answers.len()).collect()
    }
}

fn index_words(words: &[Word]) -> FxHashMap<Word, usize> {
    let mut lookup = FxHashMap::default();
    for (i, &word) in words.iter().enumerate() {
        lookup.entry(word).or_insert(i);
    }
    lookup
}
