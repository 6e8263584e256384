use std::fmt::Display;

use hangman_rs::strategy::{Puzzle, Strategy};

use crate::util::BY_FREQUENCY;

/// A Hangman strategy that guesses letters from most to least common.
///
/// The order comes from how many words in the builtin list contain each
/// letter. It never looks at the revealed pattern.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Frequency;

impl Strategy for Frequency {
    fn solve(&self, puzzle: &mut Puzzle) {
        for &letter in BY_FREQUENCY.iter() {
            if puzzle.is_over() {
                break;
            }
            let _ = puzzle.guess(letter);
        }
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hangman_solvers::Frequency")
    }
}
