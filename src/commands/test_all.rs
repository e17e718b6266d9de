//! Test all words - comprehensive solver evaluation
//!
//! Plays a session with every dictionary word (or a subset) as the solution
//! and aggregates the outcomes.

use crate::core::{Word, WordBank};
use crate::error::Result;
use crate::game::{GameSession, GameState, LossCause, SessionConfig, SilentRenderer};
use crate::output::formatters::create_progress_bar;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::prelude::IndexedRandom;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from testing a single word
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: String,
    pub guesses: Vec<String>,
    pub state: GameState,
}

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub guess_limit: usize,
    pub solved: usize,
    pub out_of_guesses: usize,
    pub ran_dry: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub worst_words: Vec<(String, usize)>,
    pub failed_words: Vec<String>,
    pub first_guess_used: HashMap<String, usize>,
}

/// Pick which words to use as solutions
///
/// `sample` draws that many distinct words at random; otherwise the first
/// `limit` words (or all of them) are used in dictionary order.
#[must_use]
pub fn select_targets(words: &[Word], limit: Option<usize>, sample: Option<usize>) -> Vec<Word> {
    match sample {
        Some(count) => words
            .choose_multiple(&mut rand::rng(), count)
            .cloned()
            .collect(),
        None => words
            .iter()
            .take(limit.unwrap_or(words.len()))
            .cloned()
            .collect(),
    }
}

/// Run a session for each target, starting every one from the full `words` bank
///
/// # Errors
///
/// Returns an error if the guess limit is zero.
pub fn run_test_all(
    words: &[Word],
    targets: &[Word],
    config: SessionConfig,
) -> Result<TestAllStatistics> {
    config.validate()?;
    let bank: WordBank = words.iter().cloned().collect();

    println!("🎯 Testing {} words...", targets.len());

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();
    let mut results = Vec::with_capacity(targets.len());

    for (idx, target) in targets.iter().enumerate() {
        let mut session = GameSession::new(target.clone(), bank.clone(), config)?;
        let state = session.play(&mut SilentRenderer)?;
        debug!("{target}: {state:?}");

        results.push(WordTestResult {
            word: target.text().to_string(),
            guesses: session.history().iter().map(|h| h.guess()).collect(),
            state,
        });

        if idx % 10 == 0 {
            let solved = results.iter().filter(|r| r.won_in().is_some()).count();
            pb.set_message(format!("Solved: {solved}/{}", results.len()));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    Ok(summarize(&results, config.guess_limit, total_start.elapsed()))
}

impl WordTestResult {
    fn won_in(&self) -> Option<usize> {
        match self.state {
            GameState::Won { rounds } => Some(rounds),
            _ => None,
        }
    }
}

fn summarize(results: &[WordTestResult], guess_limit: usize, total_time: Duration) -> TestAllStatistics {
    let solved_rounds: Vec<usize> = results.iter().filter_map(WordTestResult::won_in).collect();

    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    for &rounds in &solved_rounds {
        *guess_distribution.entry(rounds).or_insert(0) += 1;
    }

    let mut first_guess_used: HashMap<String, usize> = HashMap::new();
    for first in results.iter().filter_map(|r| r.guesses.first()) {
        *first_guess_used.entry(first.clone()).or_insert(0) += 1;
    }

    let count_lost = |cause| {
        results
            .iter()
            .filter(|r| r.state == GameState::Lost(cause))
            .count()
    };

    let average_guesses = if solved_rounds.is_empty() {
        0.0
    } else {
        solved_rounds.iter().sum::<usize>() as f64 / solved_rounds.len() as f64
    };

    let mut worst_words: Vec<(String, usize)> = results
        .iter()
        .filter_map(|r| r.won_in().map(|rounds| (r.word.clone(), rounds)))
        .filter(|&(_, rounds)| rounds + 1 >= guess_limit)
        .collect();
    worst_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_words.truncate(10);

    TestAllStatistics {
        total_words: results.len(),
        guess_limit,
        solved: solved_rounds.len(),
        out_of_guesses: count_lost(LossCause::OutOfGuesses),
        ran_dry: count_lost(LossCause::EmptyBank),
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: solved_rounds.iter().copied().max().unwrap_or(0),
        min_guesses: solved_rounds.iter().copied().min().unwrap_or(0),
        worst_words,
        failed_words: results
            .iter()
            .filter(|r| r.won_in().is_none())
            .map(|r| r.word.clone())
            .collect(),
        first_guess_used,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let percent = |n: usize| {
        if stats.total_words == 0 {
            0.0
        } else {
            n as f64 / stats.total_words as f64 * 100.0
        }
    };

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", percent(stats.solved)).green()
    );
    if stats.out_of_guesses > 0 {
        println!(
            "  Out of guesses:      {} {}",
            stats.out_of_guesses,
            format!("({:.1}%)", percent(stats.out_of_guesses)).red()
        );
    }
    if stats.ran_dry > 0 {
        println!(
            "  No candidates left:  {} {}",
            stats.ran_dry,
            format!("({:.1}%)", percent(stats.ran_dry)).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for guesses in 1..=stats.guess_limit {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        let share = if stats.solved > 0 {
            count as f64 / stats.solved as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("  {guesses} guesses: {} {count:4} ({share:5.1}%)", bar.green());
    }

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Solved Words".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("  {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n❌ {}", "Unsolved Words".red().bold());
        for word in stats.failed_words.iter().take(10) {
            println!("  {}", word.to_uppercase().red());
        }
    }

    println!("\n🎯 Opening Guess");
    let mut first_guesses: Vec<(&String, &usize)> = stats.first_guess_used.iter().collect();
    first_guesses.sort_by_key(|&(_, count)| std::cmp::Reverse(*count));
    for (word, count) in first_guesses.iter().take(5) {
        println!(
            "  {}: {} times ({:.1}%)",
            word.to_uppercase(),
            count,
            percent(**count)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    const WORDS: &[&str] = &["abbey", "table", "chair", "amber", "belay"];

    #[test]
    fn every_word_in_the_bank_is_attempted() {
        let words = words_from_slice(WORDS);
        let stats = run_test_all(&words, &words, SessionConfig::default()).unwrap();

        assert_eq!(stats.total_words, 5);
        assert_eq!(stats.ran_dry, 0);
        assert_eq!(stats.solved + stats.out_of_guesses, 5);
        let distribution_sum: usize = stats.guess_distribution.values().sum();
        assert_eq!(distribution_sum, stats.solved);
    }

    #[test]
    fn opening_guess_is_shared() {
        let words = words_from_slice(WORDS);
        let stats = run_test_all(&words, &words, SessionConfig::default()).unwrap();

        assert_eq!(stats.first_guess_used.len(), 1);
        assert_eq!(stats.first_guess_used.get("belay"), Some(&5));
    }

    #[test]
    fn targets_outside_the_bank_are_counted_as_dry() {
        let words = words_from_slice(WORDS);
        let targets = words_from_slice(&["zzzzz"]);
        let stats = run_test_all(&words, &targets, SessionConfig::default()).unwrap();

        assert_eq!(stats.ran_dry, 1);
        assert_eq!(stats.failed_words, ["zzzzz"]);
        assert!(stats.average_guesses.abs() < f64::EPSILON);
    }

    #[test]
    fn metrics_consistency() {
        let words = words_from_slice(WORDS);
        let stats = run_test_all(&words, &words, SessionConfig::default()).unwrap();

        assert!(stats.average_guesses >= stats.min_guesses as f64);
        assert!(stats.average_guesses <= stats.max_guesses as f64);
        for &guess_count in stats.guess_distribution.keys() {
            assert!((1..=6).contains(&guess_count));
        }
    }

    #[test]
    fn zero_guess_limit_is_rejected() {
        let words = words_from_slice(WORDS);
        assert!(run_test_all(&words, &words, SessionConfig::new(0)).is_err());
    }

    #[test]
    fn select_targets_limit_and_sample() {
        let words = words_from_slice(WORDS);

        assert_eq!(select_targets(&words, None, None).len(), 5);
        let first_two = select_targets(&words, Some(2), None);
        assert_eq!(first_two, words[..2]);

        let sampled = select_targets(&words, None, Some(3));
        assert_eq!(sampled.len(), 3);
        assert!(sampled.iter().all(|w| words.contains(w)));

        assert_eq!(select_targets(&words, None, Some(50)).len(), 5);
    }
}
