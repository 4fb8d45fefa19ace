#[cfg(feature = "terminal")]
use colored::Colorize;
use core::fmt;
use itertools::Itertools;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

use super::word::WORD_LENGTH;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("Invalid feedback symbol '{symbol}' in \"{feedback}\", expected one of '-', '+', '!'")]
    InvalidSymbol { symbol: char, feedback: String },
    #[error("Expected feedback of length: {expected_length}. Found \"{feedback}\" of length {}", feedback.chars().count())]
    IncorrectLength {
        feedback: String,
        expected_length: usize,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum Hint {
    Miss,
    Present,
    Exact,
}

impl Hint {
    pub fn symbol(self) -> char {
        match self {
            Hint::Miss => '-',
            Hint::Present => '+',
            Hint::Exact => '!',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '-' => Some(Hint::Miss),
            '+' => Some(Hint::Present),
            '!' => Some(Hint::Exact),
            _ => None,
        }
    }

    fn value(self) -> u16 {
        match self {
            Hint::Miss => 0,
            Hint::Present => 1,
            Hint::Exact => 2,
        }
    }

    fn from_value(value: u16) -> Option<Self> {
        match value {
            0 => Some(Hint::Miss),
            1 => Some(Hint::Present),
            2 => Some(Hint::Exact),
            _ => None,
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Per-position feedback for one guess.
#[derive(Copy, Clone, Debug, SerializeDisplay, DeserializeFromStr, PartialEq, Eq, Hash)]
pub struct Hints(pub [Hint; WORD_LENGTH]);

impl Hints {
    pub fn exact() -> Self {
        Self([Hint::Exact; WORD_LENGTH])
    }

    pub fn miss() -> Self {
        Self([Hint::Miss; WORD_LENGTH])
    }

    /// Every one of the 3^5 patterns, in lexicographic order.
    pub fn all() -> Vec<Self> {
        (0..WORD_LENGTH)
            .map(|_| Hint::iter())
            .multi_cartesian_product()
            .filter_map(|hints| hints.try_into().ok().map(Self))
            .collect()
    }

    pub fn code(&self) -> FeedbackCode {
        let value = self
            .0
            .iter()
            .fold(0, |code, &hint| (code << 2) | hint.value());
        FeedbackCode(value)
    }

    #[cfg(feature = "terminal")]
    pub fn colored(&self) -> String {
        self.0
            .iter()
            .map(|hint| match hint {
                Hint::Miss => "■".bright_black().to_string(),
                Hint::Present => "■".yellow().to_string(),
                Hint::Exact => "■".green().to_string(),
            })
            .collect()
    }
}

impl FromStr for Hints {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hints = s
            .chars()
            .map(|c| {
                Hint::from_symbol(c).ok_or_else(|| FeedbackError::InvalidSymbol {
                    symbol: c,
                    feedback: s.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        hints
            .try_into()
            .map(Self)
            .map_err(|_: Vec<_>| FeedbackError::IncorrectLength {
                feedback: s.to_string(),
                expected_length: WORD_LENGTH,
            })
    }
}

impl fmt::Display for Hints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hint in self.0.iter() {
            write!(f, "{hint}")?;
        }
        Ok(())
    }
}

impl From<FeedbackCode> for Hints {
    fn from(code: FeedbackCode) -> Self {
        let mut hints = Self::miss();
        let mut value = code.0;
        for hint in hints.0.iter_mut().rev() {
            // codes are only built from valid hints, so every group is 0..=2
            *hint = Hint::from_value(value & 3).unwrap_or(Hint::Miss);
            value >>= 2;
        }
        hints
    }
}

/// Feedback packed two bits per position, first position most significant.
///
/// Only 243 of the values below [`FeedbackCode::NUM_CODES`] are reachable; the
/// gaps come from the unused fourth symbol value.
#[derive(
    Copy, Clone, Debug, SerializeDisplay, DeserializeFromStr, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct FeedbackCode(u16);

impl FeedbackCode {
    /// `"!!!!!"`
    pub const ALL_EXACT: Self = Self(682);
    /// Size of a table indexed by code.
    pub const NUM_CODES: usize = 683;

    pub fn encode(feedback: &str) -> Result<Self, FeedbackError> {
        Ok(Hints::from_str(feedback)?.code())
    }

    pub fn decode(self) -> String {
        Hints::from(self).to_string()
    }

    pub fn from_value(value: u16) -> Option<Self> {
        if value as usize >= Self::NUM_CODES {
            return None;
        }
        let all_valid = (0..WORD_LENGTH).all(|i| (value >> (2 * i)) & 3 != 3);
        all_valid.then(|| Self(value))
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_solved(self) -> bool {
        self == Self::ALL_EXACT
    }
}

impl FromStr for FeedbackCode {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::encode(s)
    }
}

impl fmt::Display for FeedbackCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Hints::from(*self))
    }
}

impl From<Hints> for FeedbackCode {
    fn from(hints: Hints) -> Self {
        hints.code()
    }
}
