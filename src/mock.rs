use std::fmt::Display;

use crate::strategy::{Puzzle, Strategy};

/// Guesses a fixed list of letters, then stops whether or not it finished.
#[derive(Debug, Clone)]
pub(crate) struct Mock {
    guesses: Option<&'static str>,
}

impl Mock {
    pub(crate) fn new(guesses: impl Into<Option<&'static str>>) -> Self {
        Self {
            guesses: guesses.into(),
        }
    }
}

impl Strategy for Mock {
    fn solve(&self, puzzle: &mut Puzzle) {
        let guesses = self.guesses.unwrap_or("etaoinshrdlucmfwypvbgkjqxz");

        for letter in guesses.chars() {
            if puzzle.is_over() {
                break;
            }
            puzzle.guess(letter).unwrap();
        }
    }

    fn version(&self) -> &'static str {
        "1.2.4"
    }
}

impl Display for Mock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Mock {:?}", self.guesses)
    }
}
