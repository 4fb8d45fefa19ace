use anyhow::{anyhow, Context as _, Result};
use clap::{Args, Parser, Subcommand};
use gc::algo;
use gc::data;
use gc::solvers::{simulate_game, simulate_random, solve, Solution};
use gc::structs::{Outcome, Word};
use gc::{Context, FeedbackTable, Lexicon, SolverConfig};
use gordle_core as gc;
use std::{fs, path::PathBuf};

const GUESSES_PATH: &str = "guesses.txt";
const ANSWERS_PATH: &str = "answers.txt";
const OPENER: &str = "roate";

#[derive(Debug, Parser)]
#[clap(about = "Finds the guess that minimizes the expected number of further guesses")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct Setup {
    /// Legal guesses, one per line
    #[clap(long, default_value = GUESSES_PATH)]
    guesses: PathBuf,
    /// Possible answers, one per line
    #[clap(long, default_value = ANSWERS_PATH)]
    answers: PathBuf,
    /// Required number of guesses in the guess list
    #[clap(long)]
    expect_guesses: Option<usize>,
    /// Required number of answers in the answer list
    #[clap(long)]
    expect_answers: Option<usize>,
    /// JSON file with solver settings
    #[clap(long)]
    config: Option<PathBuf>,
    /// Search depth, overrides the config file
    #[clap(long, short = 'd')]
    max_depth: Option<usize>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Suggest the next guess given the outcomes so far
    Solve {
        #[clap(flatten)]
        setup: Setup,
        /// Print the result as JSON
        #[clap(long)]
        json: bool,
        /// Outcomes as GUESS:FEEDBACK, e.g. reast:---+-
        outcomes: Vec<String>,
    },
    /// Play a whole game against a known answer
    Simulate {
        #[clap(flatten)]
        setup: Setup,
        #[clap(long, default_value = OPENER)]
        opener: String,
        answer: String,
    },
    /// Play against randomly chosen answers and report the mean number of turns
    Random {
        #[clap(flatten)]
        setup: Setup,
        #[clap(long, default_value = OPENER)]
        opener: String,
        #[clap(short, default_value = "10")]
        n: usize,
    },
    /// Print the feedback a guess receives against an answer
    Feedback { guess: String, answer: String },
}

struct Solver {
    lexicon: Lexicon,
    table: FeedbackTable,
    config: SolverConfig,
}

impl Solver {
    fn ctx(&self) -> Context<'_> {
        Context::new(&self.lexicon, &self.table, &self.config)
    }
}

fn load_config(setup: &Setup) -> Result<SolverConfig> {
    let mut config = match &setup.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Unable to read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => SolverConfig::default(),
    };
    if let Some(max_depth) = setup.max_depth {
        config.max_depth = max_depth;
    }
    Ok(config)
}

fn initialize(setup: &Setup) -> Result<Solver> {
    let config = load_config(setup)?;
    let lexicon = data::load_lexicon(
        &setup.guesses,
        &setup.answers,
        setup.expect_guesses,
        setup.expect_answers,
    )?;
    log::info!(
        "Loaded {} guesses and {} answers",
        lexicon.guesses.len(),
        lexicon.answers.len()
    );
    let table = FeedbackTable::build(&lexicon);

    Ok(Solver {
        lexicon,
        table,
        config,
    })
}

fn parse_outcome(lexicon: &Lexicon, outcome: &str) -> Result<Outcome> {
    let (guess, feedback) = outcome
        .split_once(':')
        .ok_or_else(|| anyhow!("Expected GUESS:FEEDBACK, found \"{}\"", outcome))?;
    Ok(Outcome::parse(lexicon, guess, feedback)?)
}

fn run_solve(setup: &Setup, outcomes: &[String], json: bool) -> Result<()> {
    let solver = initialize(setup)?;
    let outcomes = outcomes
        .iter()
        .map(|o| parse_outcome(&solver.lexicon, o))
        .collect::<Result<Vec<_>>>()?;

    let solution = solve(solver.ctx(), &outcomes, solver.config.max_depth)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
        return Ok(());
    }

    match solution {
        Solution::NoConsistentAnswer => println!("NO POSSIBLE ANSWERS"),
        Solution::Guess(suggestion) => {
            println!("Num possible answers: {}", suggestion.candidates.len());
            if suggestion.candidates.len() <= 5 {
                let words = suggestion
                    .candidates
                    .iter()
                    .map(|w| format!("'{w}'"))
                    .collect::<Vec<_>>();
                println!("POSSIBLE ANSWERS: {}", words.join(" "));
            }
            println!("{}  {}", suggestion.guess, suggestion.score);
        }
    }
    Ok(())
}

fn run_simulate(setup: &Setup, opener: &str, answer: &str) -> Result<()> {
    let solver = initialize(setup)?;
    let turns = simulate_game(solver.ctx(), answer, opener, solver.config.max_depth)?;
    for (i, (guess, hints)) in turns.iter().enumerate() {
        println!("guess {}: {guess} {}", i + 1, hints.colored());
    }
    Ok(())
}

fn run_random(setup: &Setup, opener: &str, n: usize) -> Result<()> {
    let solver = initialize(setup)?;
    let games = simulate_random(solver.ctx(), n, opener, solver.config.max_depth)?;
    for (answer, turns) in &games {
        println!("{answer}: {turns}");
    }
    if !games.is_empty() {
        let total: usize = games.iter().map(|&(_, turns)| turns).sum();
        println!("mean: {}", total as f64 / games.len() as f64);
    }
    Ok(())
}

fn run_feedback(guess: &str, answer: &str) -> Result<()> {
    let guess = Word::try_from(guess)?;
    let answer = Word::try_from(answer)?;
    let hints = algo::get_hints(&guess, &answer, &answer.letter_counts());
    let code = hints.code();
    println!("{} {hints} ({})", hints.colored(), code.value());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Solve {
            setup,
            json,
            outcomes,
        } => run_solve(&setup, &outcomes, json),
        Command::Simulate {
            setup,
            opener,
            answer,
        } => run_simulate(&setup, &opener, &answer),
        Command::Random { setup, opener, n } => run_random(&setup, &opener, n),
        Command::Feedback { guess, answer } => run_feedback(&guess, &answer),
    }
}
