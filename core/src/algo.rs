use crate::{
    feedback_table::FeedbackTable,
    structs::{FeedbackCode, Hint, Hints, LetterCounts, Outcome, Word},
};
use itertools::izip;

/// Scores `guess` against `answer`.
///
/// A single usage counter is shared by exact and present marks in position
/// order, so a letter is never marked more often than the answer holds it.
pub fn get_hints(guess: &Word, answer: &Word, answer_counts: &LetterCounts) -> Hints {
    let mut hints = Hints::miss();
    let mut used = LetterCounts::default();

    for (hint, &g, &a) in izip!(hints.0.iter_mut(), guess.letters(), answer.letters()) {
        if g == a {
            *hint = Hint::Exact;
            used.increment(g);
        } else if used.get(g) < answer_counts.get(g) {
            *hint = Hint::Present;
            used.increment(g);
        }
    }

    hints
}

pub fn compute_feedback(guess: &Word, answer: &Word, answer_counts: &LetterCounts) -> FeedbackCode {
    get_hints(guess, answer, answer_counts).code()
}

pub fn is_consistent(table: &FeedbackTable, answer: usize, outcomes: &[Outcome]) -> bool {
    outcomes
        .iter()
        .all(|outcome| table.get(outcome.guess, answer) == outcome.code)
}

/// Answers from `answers` consistent with every outcome, order preserved.
pub fn filter_answers(table: &FeedbackTable, answers: &[usize], outcomes: &[Outcome]) -> Vec<usize> {
    answers
        .iter()
        .copied()
        .filter(|&answer| is_consistent(table, answer, outcomes))
        .collect()
}
