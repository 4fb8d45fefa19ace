use crate::{
    algo::filter_answers,
    config::Context,
    feedback_table::FeedbackTable,
    solvers::{best_guess, SearchError},
    structs::{FeedbackCode, Outcome},
};

/// Number of candidates producing each feedback code for `guess`.
pub fn bucket_counts(
    table: &FeedbackTable,
    guess: usize,
    candidates: &[usize],
) -> [u32; FeedbackCode::NUM_CODES] {
    let mut counts = [0; FeedbackCode::NUM_CODES];
    for &answer in candidates {
        counts[table.get(guess, answer).index()] += 1;
    }
    counts
}

fn buckets(
    table: &FeedbackTable,
    guess: usize,
    candidates: &[usize],
) -> impl Iterator<Item = (FeedbackCode, u32)> {
    bucket_counts(table, guess, candidates)
        .into_iter()
        .enumerate()
        .filter(|&(_, count)| count > 0)
        .filter_map(|(i, count)| FeedbackCode::from_value(i as u16).map(|code| (code, count)))
}

/// Expected size of the candidate set left after playing `guess`, the lower
/// the better.
pub fn shallow_score(table: &FeedbackTable, guess: usize, candidates: &[usize]) -> f64 {
    let total = candidates.len() as f64;
    buckets(table, guess, candidates)
        .map(|(_, count)| {
            let count = count as f64;
            count * count / total
        })
        .sum()
}

/// Expected number of further guesses after playing `guess`.
///
/// Solved buckets cost nothing. Others recurse into the search below
/// `max_depth` and fall back to `leaf_horizon - depth` at it.
pub fn deep_score(
    ctx: Context,
    guess: usize,
    guesses: &[usize],
    candidates: &[usize],
    depth: usize,
    max_depth: usize,
) -> Result<f64, SearchError> {
    let total = candidates.len() as f64;
    let mut expected = 0.;

    for (code, count) in buckets(ctx.table, guess, candidates) {
        let score = if code.is_solved() {
            0.
        } else if depth < max_depth {
            let outcome = Outcome::new(guess, code);
            let left = filter_answers(ctx.table, candidates, &[outcome]);
            best_guess(ctx, guesses, &left, depth + 1, max_depth)?.score + 1.
        } else {
            ctx.config.leaf_horizon - depth as f64
        };

        expected += count as f64 / total * score;
    }

    Ok(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::SolverConfig,
        structs::{tests::test_lexicon, Lexicon},
    };
    use rstest::rstest;

    fn candidates(lexicon: &Lexicon, words: &[&str]) -> Vec<usize> {
        words
            .iter()
            .map(|w| lexicon.answer_index(w).unwrap())
            .collect()
    }

    #[rstest]
    #[case("humid", 1.)]
    #[case("reast", 2.)]
    #[case("godly", 2.)]
    fn shallow_scores_two_candidates(#[case] guess: &str, #[case] expected: f64) {
        let lexicon = test_lexicon();
        let table = FeedbackTable::build(&lexicon);
        let candidates = candidates(&lexicon, &["humid", "vivid"]);
        let guess = lexicon.guess_index(guess).unwrap();
        assert_eq!(shallow_score(&table, guess, &candidates), expected);
    }

    #[test]
    fn shallow_score_is_expected_bucket_size() {
        let lexicon = test_lexicon();
        let table = FeedbackTable::build(&lexicon);
        let candidates = lexicon.all_answers();
        let guess = lexicon.guess_index("roate").unwrap();

        let counts = bucket_counts(&table, guess, &candidates);
        assert_eq!(counts.iter().sum::<u32>() as usize, candidates.len());

        let expected = counts
            .iter()
            .map(|&c| (c * c) as f64 / candidates.len() as f64)
            .sum::<f64>();
        let score = shallow_score(&table, guess, &candidates);
        assert!((score - expected).abs() < 1e-12);
        assert!(score >= 1. && score <= candidates.len() as f64);
    }

    #[test]
    fn deep_score_recurses_into_single_buckets() {
        let lexicon = test_lexicon();
        let table = FeedbackTable::build(&lexicon);
        let config = SolverConfig::default();
        let ctx = Context::new(&lexicon, &table, &config);
        let candidates = candidates(&lexicon, &["humid", "vivid"]);
        let guess = lexicon.guess_index("humid").unwrap();

        // humid is solved outright, vivid takes exactly one more guess
        let score = deep_score(ctx, guess, &lexicon.all_guesses(), &candidates, 0, 2).unwrap();
        assert_eq!(score, 0.5);
    }

    #[rstest]
    #[case(1, 2.)]
    #[case(3, 1.)]
    fn deep_score_at_depth_limit_uses_leaf_estimate(#[case] depth: usize, #[case] expected: f64) {
        let lexicon = test_lexicon();
        let table = FeedbackTable::build(&lexicon);
        let config = SolverConfig::default();
        let ctx = Context::new(&lexicon, &table, &config);
        let candidates = candidates(&lexicon, &["humid", "vivid"]);
        let guess = lexicon.guess_index("humid").unwrap();

        // half of (leaf_horizon - depth), the other half is solved
        let score = deep_score(ctx, guess, &lexicon.all_guesses(), &candidates, depth, depth).unwrap();
        assert_eq!(score, expected);
    }

    #[test]
    fn leaf_horizon_is_configurable() {
        let lexicon = test_lexicon();
        let table = FeedbackTable::build(&lexicon);
        let config = SolverConfig {
            leaf_horizon: 9.,
            ..SolverConfig::default()
        };
        let ctx = Context::new(&lexicon, &table, &config);
        let candidates = candidates(&lexicon, &["humid", "vivid"]);
        let guess = lexicon.guess_index("reast").unwrap();

        let score = deep_score(ctx, guess, &lexicon.all_guesses(), &candidates, 1, 1).unwrap();
        assert_eq!(score, 8.);
    }
}
