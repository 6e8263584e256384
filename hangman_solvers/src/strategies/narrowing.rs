use std::{cmp::Reverse, fmt::Display};

use hangman_rs::{
    strategy::{Puzzle, Strategy},
    WordList,
};

use crate::util::{generate_regex, letter_occurrences, BUILTIN, BY_FREQUENCY};

/// A Hangman strategy that guesses the letter found in the most words that
/// could still be the answer.
///
/// Each round it filters its word list down to the words that match the
/// revealed pattern and avoid every letter guessed so far, then guesses the
/// unguessed letter that appears in the most of them. When nothing in the
/// list fits, it falls back to guessing by [`Frequency`](crate::Frequency).
#[derive(Debug, Clone, Default)]
pub struct Narrowing {
    words: Option<WordList>,
}

impl Narrowing {
    /// Creates a strategy that narrows down the builtin word list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Narrows down `words` instead of the builtin list.
    pub fn words(self, words: WordList) -> Self {
        Narrowing { words: Some(words) }
    }

    fn next_guess(&self, puzzle: &Puzzle) -> Option<char> {
        let words = self.words.as_ref().unwrap_or(&*BUILTIN);
        let pattern = puzzle.pattern();
        let guessed = puzzle.guessed();
        let regex = generate_regex(&pattern, &guessed);

        let counts = letter_occurrences(
            words
                .iter()
                .filter(|w| w.len() == pattern.len() && regex.is_match(w.as_bytes()))
                .map(|w| &**w),
        );

        counts
            .into_iter()
            .filter(|(c, _)| !guessed.contains(c))
            .min_by_key(|&(c, n)| (Reverse(n), c))
            .map(|(c, _)| c)
            .or_else(|| {
                BY_FREQUENCY
                    .iter()
                    .copied()
                    .find(|c| !guessed.contains(c))
            })
    }
}

impl Strategy for Narrowing {
    fn solve(&self, puzzle: &mut Puzzle) {
        while !puzzle.is_over() {
            let guess = match self.next_guess(puzzle) {
                Some(c) => c,
                None => break,
            };
            if puzzle.guess(guess).is_err() {
                break;
            }
        }
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }
}

impl Display for Narrowing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hangman_solvers::Narrowing")?;
        if self.words.is_some() {
            write!(f, " (custom words)")?;
        }
        Ok(())
    }
}
