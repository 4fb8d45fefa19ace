use ndarray::{Array2, Zip};
use std::time::Instant;

use crate::{algo, structs::FeedbackCode, structs::Lexicon};

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackTable {
    // Rows are indexed by guess, columns by answer.
    codes: Array2<FeedbackCode>,
}

impl FeedbackTable {
    pub fn build(lexicon: &Lexicon) -> Self {
        let start = Instant::now();
        log::info!(
            "Initializing feedback table ({} guesses x {} answers)",
            lexicon.guesses.len(),
            lexicon.answers.len()
        );

        let mut codes = Array2::from_elem(
            (lexicon.guesses.len(), lexicon.answers.len()),
            FeedbackCode::ALL_EXACT,
        );

        let zip = Zip::indexed(&mut codes);
        let fill = |(g, a): (usize, usize), code: &mut FeedbackCode| {
            *code = algo::compute_feedback(
                &lexicon.guesses[g],
                &lexicon.answers[a],
                &lexicon.answer_letter_counts[a],
            );
        };

        #[cfg(feature = "parallel")]
        zip.par_for_each(fill);

        #[cfg(not(feature = "parallel"))]
        zip.for_each(fill);

        log::info!(
            "Feedback table calculation took: {}ms",
            start.elapsed().as_millis()
        );

        Self { codes }
    }

    #[inline]
    pub fn get(&self, guess: usize, answer: usize) -> FeedbackCode {
        self.codes[[guess, answer]]
    }

    pub fn num_guesses(&self) -> usize {
        self.codes.nrows()
    }

    pub fn num_answers(&self) -> usize {
        self.codes.ncols()
    }
}
