use crate::structs::{Lexicon, LexiconError, Word};
use std::io::{self, BufRead};
use std::{fs::File, path::Path};

/// Reads one word per line, skipping blank lines.
///
/// With `expected` set, a list of any other length is rejected.
pub fn load_words<P>(filename: P, expected: Option<usize>) -> Result<Vec<Word>, LexiconError>
where
    P: AsRef<Path>,
{
    let path = filename.as_ref();
    let io_error = |source: io::Error| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let lines = io::BufReader::new(file)
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .map_err(io_error)?;

    let words = parse_words(lines.iter().map(String::as_str))?;

    match expected {
        Some(expected) if expected != words.len() => Err(LexiconError::LineCount {
            expected,
            found: words.len(),
        }),
        _ => Ok(words),
    }
}

pub fn parse_words<'a, I>(lines: I) -> Result<Vec<Word>, LexiconError>
where
    I: Iterator<Item = &'a str>,
{
    lines
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| {
            Word::try_from(l).map_err(|source| LexiconError::Word { line: i + 1, source })
        })
        .collect()
}

pub fn load_lexicon<P, Q>(
    guesses: P,
    answers: Q,
    expected_guesses: Option<usize>,
    expected_answers: Option<usize>,
) -> Result<Lexicon, LexiconError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let guesses = load_words(guesses, expected_guesses)?;
    let answers = load_words(answers, expected_answers)?;
    Lexicon::new(guesses, answers)
}
