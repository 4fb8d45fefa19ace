use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{FeedbackCode, FeedbackError, Lexicon, LexiconError};

#[derive(Error, Debug)]
pub enum OutcomeError {
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
    #[error(transparent)]
    Feedback(#[from] FeedbackError),
}

/// A guess (by index into the guess list) and the feedback it received.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    pub guess: usize,
    pub code: FeedbackCode,
}

impl Outcome {
    pub fn new(guess: usize, code: FeedbackCode) -> Self {
        Self { guess, code }
    }

    pub fn parse(lexicon: &Lexicon, guess: &str, feedback: &str) -> Result<Self, OutcomeError> {
        let guess = lexicon.guess_index(guess)?;
        let code = FeedbackCode::encode(feedback)?;
        Ok(Self { guess, code })
    }
}
