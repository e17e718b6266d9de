//! Display functions for command results

use super::formatters::{colored_guess, hints_to_emoji};
use crate::commands::SolveResult;
use crate::core::HintSequence;
use crate::game::{GameState, LossCause, Renderer};
use colored::Colorize;

/// Prints each round's guess with colored letters, one line per round
#[derive(Debug, Default, Clone, Copy)]
pub struct ColorRenderer;

impl Renderer for ColorRenderer {
    fn render(&mut self, hints: &HintSequence) {
        println!("{}", colored_guess(hints));
    }
}

/// One-line outcome report for a finished session
#[must_use]
pub fn outcome_message(state: GameState, guess_limit: usize) -> String {
    match state {
        GameState::Won { rounds } => format!("Success in {rounds}/{guess_limit}"),
        GameState::Lost(LossCause::OutOfGuesses) => "Failure".to_string(),
        GameState::Lost(cause @ LossCause::EmptyBank) => format!("Failure: {cause}"),
        GameState::InProgress => "In progress".to_string(),
    }
}

/// Print the result of solving a word
///
/// With `verbose`, each round's emoji summary follows the outcome.
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let message = outcome_message(result.state, result.guess_limit);
    if result.success() {
        println!("{}", message.green().bold());
    } else {
        println!("{}", message.red().bold());
    }

    if verbose {
        println!(
            "\n{} from {} candidates",
            result.target.to_uppercase().bright_yellow().bold(),
            result.initial_candidates
        );
        for (i, hints) in result.guesses.iter().enumerate() {
            println!(
                "  Turn {}: {} {}",
                i + 1,
                hints.guess().to_uppercase(),
                hints_to_emoji(hints)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn won_reports_round_count() {
        assert_eq!(
            outcome_message(GameState::Won { rounds: 2 }, 6),
            "Success in 2/6"
        );
    }

    #[test]
    fn out_of_guesses_is_plain_failure() {
        assert_eq!(
            outcome_message(GameState::Lost(LossCause::OutOfGuesses), 6),
            "Failure"
        );
    }

    #[test]
    fn empty_bank_names_the_cause() {
        assert_eq!(
            outcome_message(GameState::Lost(LossCause::EmptyBank), 6),
            "Failure: no candidates remain"
        );
    }
}
