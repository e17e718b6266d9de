//! Wordle Greedy - CLI
//!
//! Plays Wordle against a chosen solution using letter-frequency guessing.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use rand::prelude::IndexedRandom;
use wordle_greedy::{
    commands::{SolveConfig, print_test_all_statistics, run_test_all, select_targets, solve_word},
    core::Word,
    game::{DEFAULT_GUESS_LIMIT, SessionConfig, SilentRenderer},
    output::{ColorRenderer, print_solve_result},
    wordlists::{DEFAULT_DICTIONARY, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_greedy",
    about = "Play Wordle automatically with greedy letter-frequency guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line; five-letter lowercase entries are used
    #[arg(short, long, global = true, default_value = DEFAULT_DICTIONARY)]
    dictionary: String,

    /// Maximum number of guesses per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_GUESS_LIMIT)]
    guess_limit: usize,

    /// Log each round (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a target word (default)
    Solve {
        /// The target word; picked at random from the dictionary if omitted
        word: Option<String>,

        /// Only print the outcome, not each colored guess
        #[arg(short, long)]
        quiet: bool,
    },

    /// Solve every dictionary word and report statistics
    TestAll {
        /// Only test the first N words
        #[arg(short, long, conflicts_with = "sample")]
        limit: Option<usize>,

        /// Test N words picked at random
        #[arg(short, long)]
        sample: Option<usize>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let words = load_from_file(&cli.dictionary)
        .with_context(|| "to use a different word list, pass --dictionary <PATH>")?;
    if words.is_empty() {
        bail!("dictionary {} has no five-letter words", cli.dictionary);
    }

    // Original example usage: solve "abbey"
    let command = cli.command.unwrap_or(Commands::Solve {
        word: Some("abbey".to_string()),
        quiet: false,
    });

    match command {
        Commands::Solve { word, quiet } => {
            run_solve_command(word, quiet, cli.guess_limit, cli.verbose, &words)
        }
        Commands::TestAll { limit, sample } => {
            let targets = select_targets(&words, limit, sample);
            let stats = run_test_all(&words, &targets, SessionConfig::new(cli.guess_limit))?;
            print_test_all_statistics(&stats);
            Ok(())
        }
    }
}

fn run_solve_command(
    word: Option<String>,
    quiet: bool,
    guess_limit: usize,
    verbose: bool,
    words: &[Word],
) -> Result<()> {
    let target = match word {
        Some(word) => word,
        None => words
            .choose(&mut rand::rng())
            .map(|w| w.text().to_string())
            .context("dictionary is empty")?,
    };

    let mut config = SolveConfig::new(target);
    config.guess_limit = guess_limit;

    let result = if quiet {
        solve_word(config, words, &mut SilentRenderer)?
    } else {
        solve_word(config, words, &mut ColorRenderer)?
    };

    print_solve_result(&result, verbose);
    Ok(())
}
