//! A single bad strategy to show how they are written.

use std::fmt::Display;

use crate::strategy::{Puzzle, Strategy};

/// A Hangman strategy that guesses the alphabet in order.
///
/// This exists to show how [`Strategy`](super::Strategy) is implemented and
/// to serve as a floor when comparing real strategies. For better ones,
/// check out the `hangman_solvers` crate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Alphabetical;

impl Strategy for Alphabetical {
    fn solve(&self, puzzle: &mut Puzzle) {
        for letter in 'a'..='z' {
            if puzzle.is_over() {
                break;
            }
            // letters are never repeated, so guessing cannot fail
            let _ = puzzle.guess(letter);
        }
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }
}

impl Display for Alphabetical {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hangman_rs::Alphabetical")
    }
}
