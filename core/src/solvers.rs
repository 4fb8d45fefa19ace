use rand::prelude::IteratorRandom;
#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::Serialize;
use std::{cmp::Ordering::Equal, time::Instant};
use thiserror::Error;

use crate::{
    algo::filter_answers,
    config::Context,
    scoring::{deep_score, shallow_score},
    structs::{Hints, LexiconError, Outcome, Word},
};

/// Rounds played by [`simulate_game`] before giving up.
pub const MAX_TURNS: usize = 6;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("No answer is consistent with the recorded outcomes")]
    NoCandidates,
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}

/// A guess (index into the guess list) and its expected number of further guesses.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Choice {
    pub guess: usize,
    pub score: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Suggestion {
    pub guess: Word,
    pub score: f64,
    pub candidates: Vec<Word>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Solution {
    Guess(Suggestion),
    NoConsistentAnswer,
}

/// Picks the guess from `guesses` with the lowest expected number of further
/// guesses to pin down the answer among `candidates`.
///
/// Guesses that barely split the candidates are pruned first, using the
/// shallow score. At `max_depth` the best shallow guess is returned as is.
pub fn best_guess(
    ctx: Context,
    guesses: &[usize],
    candidates: &[usize],
    depth: usize,
    max_depth: usize,
) -> Result<Choice, SearchError> {
    let config = ctx.config;

    match candidates {
        [] => return Err(SearchError::NoCandidates),
        &[answer] => {
            return Ok(Choice {
                guess: ctx.lexicon.answer_as_guess(answer),
                score: config.terminal_score,
            })
        }
        _ => (),
    }

    if depth == 0 {
        log::info!("Computing shallow scores.");
    }

    let threshold = config.prune_ratio * candidates.len() as f64;
    let mut shallow_scores = Vec::new();
    let mut worthwhile = Vec::new();
    for &guess in guesses {
        let score = shallow_score(ctx.table, guess, candidates);
        if shallow_scores.is_empty() || score < threshold {
            shallow_scores.push(Choice { guess, score });
            worthwhile.push(guess);
        }
    }

    if depth == 0 {
        log::info!(
            "Done computing shallow scores. {} candidates.",
            shallow_scores.len()
        );
    }

    // stable, so equal scores keep the guess list order
    shallow_scores.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Equal));

    if depth == max_depth {
        return shallow_scores
            .first()
            .copied()
            .ok_or(SearchError::NoCandidates);
    }

    let selected = select_candidates(ctx, &shallow_scores, candidates);

    let evaluate = |&guess: &usize| {
        deep_score(ctx, guess, &worthwhile, candidates, depth, max_depth)
            .map(|score| Choice { guess, score })
    };

    let results = if depth == 0 {
        #[cfg(feature = "parallel")]
        let selected_iter = selected.par_iter();

        #[cfg(not(feature = "parallel"))]
        let selected_iter = selected.iter();

        selected_iter
            .map(evaluate)
            .collect::<Result<Vec<_>, _>>()?
    } else {
        selected
            .iter()
            .map(evaluate)
            .collect::<Result<Vec<_>, _>>()?
    };

    let mut best: Option<Choice> = None;
    for (k, result) in results.into_iter().enumerate() {
        if depth == 0 {
            log::info!(
                "Candidate {k:03}/{:03}: {}  {}",
                selected.len(),
                ctx.lexicon.guesses[result.guess],
                result.score
            );
        }
        if best.map_or(true, |b| result.score < b.score) {
            if depth == 0 {
                log::info!(
                    "  New best: {} - {}",
                    ctx.lexicon.guesses[result.guess],
                    result.score
                );
            }
            best = Some(result);
        }
    }

    best.ok_or(SearchError::NoCandidates)
}

/// Guesses to evaluate in full, at most `max_candidates` of them.
///
/// With a small pool the candidates themselves go first, then the best
/// shallow-scored guesses fill the remaining slots.
fn select_candidates(ctx: Context, shallow_scores: &[Choice], candidates: &[usize]) -> Vec<usize> {
    let config = ctx.config;
    let mut selected = Vec::new();
    let mut shallow = shallow_scores.iter();

    for i in 0..config.max_candidates {
        if candidates.len() <= config.small_pool && i < candidates.len() {
            selected.push(ctx.lexicon.answer_as_guess(candidates[i]));
        } else {
            match shallow.next() {
                Some(choice) => selected.push(choice.guess),
                None => break,
            }
        }
    }

    selected
}

pub fn solve(ctx: Context, outcomes: &[Outcome], max_depth: usize) -> Result<Solution, SearchError> {
    let lexicon = ctx.lexicon;
    let answers_left = filter_answers(ctx.table, &lexicon.all_answers(), outcomes);
    log::info!("Num possible answers: {}", answers_left.len());

    if answers_left.is_empty() {
        return Ok(Solution::NoConsistentAnswer);
    }

    let start = Instant::now();
    let Choice { guess, score } =
        best_guess(ctx, &lexicon.all_guesses(), &answers_left, 0, max_depth)?;
    log::info!(
        "Best guess {} ({score}) took: {}ms",
        lexicon.guesses[guess],
        start.elapsed().as_millis()
    );

    Ok(Solution::Guess(Suggestion {
        guess: lexicon.guesses[guess],
        score,
        candidates: answers_left.iter().map(|&i| lexicon.answers[i]).collect(),
    }))
}

/// Plays against a known answer, opening with `opener`.
///
/// Returns every guess with its feedback, the last one solved unless the
/// game ran out of turns.
pub fn simulate_game(
    ctx: Context,
    answer: &str,
    opener: &str,
    max_depth: usize,
) -> Result<Vec<(Word, Hints)>, SearchError> {
    let lexicon = ctx.lexicon;
    let answer = lexicon.answer_index(answer)?;
    let mut guess = lexicon.guess_index(opener)?;
    let mut outcomes = Vec::new();
    let mut turns = Vec::new();

    log::info!("Answer: {}", lexicon.answers[answer]);

    for turn in 1..=MAX_TURNS {
        let code = ctx.table.get(guess, answer);
        log::debug!("guess {turn}: {} {code}", lexicon.guesses[guess]);
        turns.push((lexicon.guesses[guess], Hints::from(code)));

        if code.is_solved() || turn == MAX_TURNS {
            break;
        }

        outcomes.push(Outcome::new(guess, code));
        guess = match solve(ctx, &outcomes, max_depth)? {
            Solution::Guess(suggestion) => lexicon.guess_index_of(&suggestion.guess)?,
            Solution::NoConsistentAnswer => return Err(SearchError::NoCandidates),
        };
    }

    Ok(turns)
}

/// Simulates `n` games against randomly chosen answers and returns the
/// number of turns each one took.
pub fn simulate_random(
    ctx: Context,
    n: usize,
    opener: &str,
    max_depth: usize,
) -> Result<Vec<(Word, usize)>, SearchError> {
    let answers = ctx
        .lexicon
        .answers
        .iter()
        .choose_multiple(&mut rand::thread_rng(), n);

    let mut turns = Vec::new();
    for answer in answers {
        let game = simulate_game(ctx, &answer.to_string(), opener, max_depth)?;
        turns.push((*answer, game.len()));
    }

    Ok(turns)
}
