use gordle_core::{
    data::parse_words, simulate_game, solve, Context, FeedbackTable, Hints, Lexicon, Outcome,
    Solution, SolverConfig,
};
use rstest::{fixture, rstest};

const ANSWERS: &str = "humid vivid thorn pause acorn tacit other wagon taboo abbey mound";
const EXTRA_GUESSES: &str =
    "reast godly crane mauls throb orate roast court tutee dough tapis quail peony magic roate";

struct Setup {
    lexicon: Lexicon,
    table: FeedbackTable,
    config: SolverConfig,
}

impl Setup {
    fn ctx(&self) -> Context<'_> {
        Context::new(&self.lexicon, &self.table, &self.config)
    }
}

#[fixture]
fn setup() -> Setup {
    let answers = parse_words(ANSWERS.split_whitespace()).unwrap();
    let guesses =
        parse_words(EXTRA_GUESSES.split_whitespace().chain(ANSWERS.split_whitespace())).unwrap();
    let lexicon = Lexicon::new(guesses, answers).unwrap();
    let table = FeedbackTable::build(&lexicon);
    Setup {
        lexicon,
        table,
        config: SolverConfig::default(),
    }
}

#[rstest]
fn narrows_to_two_and_plays_a_candidate(setup: Setup) {
    let outcomes = [
        Outcome::parse(&setup.lexicon, "reast", "-----").unwrap(),
        Outcome::parse(&setup.lexicon, "godly", "--+--").unwrap(),
    ];

    let solution = solve(setup.ctx(), &outcomes, 2).unwrap();
    let suggestion = match solution {
        Solution::Guess(suggestion) => suggestion,
        other => panic!("expected a guess, got {other:?}"),
    };

    let candidates = suggestion
        .candidates
        .iter()
        .map(|w| w.to_string())
        .collect::<Vec<_>>();
    assert_eq!(candidates, vec!["humid", "vivid"]);
    assert_eq!(suggestion.guess.to_string(), "humid");
    assert_eq!(suggestion.score, 0.5);
}

#[rstest]
fn contradictory_history_is_not_an_error(setup: Setup) {
    let outcomes = [
        Outcome::parse(&setup.lexicon, "court", "-+-!+").unwrap(),
        Outcome::parse(&setup.lexicon, "thorn", "-----").unwrap(),
    ];
    assert_eq!(
        solve(setup.ctx(), &outcomes, 2).unwrap(),
        Solution::NoConsistentAnswer
    );
}

#[rstest]
fn rejects_malformed_outcomes(setup: Setup) {
    assert!(Outcome::parse(&setup.lexicon, "zzzzz", "-----").is_err());
    assert!(Outcome::parse(&setup.lexicon, "reast", "--?--").is_err());
}

#[rstest]
fn solution_serializes_with_tag(setup: Setup) {
    let outcomes = [Outcome::parse(&setup.lexicon, "court", "-+-!+").unwrap()];
    let solution = solve(setup.ctx(), &outcomes, 2).unwrap();
    let json = serde_json::to_value(&solution).unwrap();
    assert_eq!(json["result"], "guess");
    assert_eq!(json["guess"], "thorn");
    assert_eq!(json["candidates"][0], "thorn");
}

#[rstest]
#[case("thorn")]
#[case("vivid")]
#[case("abbey")]
fn simulated_games_are_solved(setup: Setup, #[case] answer: &str) {
    let turns = simulate_game(setup.ctx(), answer, "roate", 2).unwrap();
    let (guess, hints) = turns.last().unwrap();
    assert_eq!(guess.to_string(), answer);
    assert_eq!(*hints, Hints::exact());
    assert!(turns.len() <= 3);
}
