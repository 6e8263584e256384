//! Tools for defining Hangman strategies.

use std::{
    collections::BTreeSet,
    fmt::{Debug, Display},
};

use crate::{
    game::{Game, Guess, Status},
    GameError,
};

pub mod alphabetical;

/// A Hangman puzzle seen from the player's side.
///
/// Implementers of [`Strategy`] receive an instance of this struct in
/// [`solve()`](Strategy::solve()). It wraps a [`Game`] but only exposes
/// what a player could see, so a strategy cannot peek at the word.
///
/// # Examples
///
/// ```rust
/// # use hangman_rs::{Game, Rules, Word};
/// use hangman_rs::{strategy::{alphabetical::Alphabetical, Puzzle}, Status, Strategy};
///
/// let mut puzzle = Puzzle::new(Game::new(Word::new("bad")?, Rules::default()));
/// Alphabetical.solve(&mut puzzle);
///
/// assert_eq!(puzzle.status(), Status::Won);
/// assert_eq!(puzzle.into_game().wrong_guesses(), 1);
/// #
/// # Ok::<_, hangman_rs::HangmanError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    game: Game,
}

impl Puzzle {
    pub fn new(game: Game) -> Self {
        Puzzle { game }
    }

    /// Guesses a letter; see [`Game::guess()`].
    pub fn guess(&mut self, letter: char) -> Result<Guess, GameError> {
        self.game.guess(letter)
    }

    /// Returns each position of the word, revealed or not.
    pub fn pattern(&self) -> Vec<Option<char>> {
        self.game.pattern()
    }

    /// The length of the hidden word.
    pub fn len(&self) -> usize {
        self.game.solution().len()
    }

    /// Always false, since words are never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns every letter guessed so far, right or wrong.
    pub fn guessed(&self) -> BTreeSet<char> {
        self.game
            .good_guesses()
            .union(self.game.bad_guesses())
            .copied()
            .collect()
    }

    /// Returns the letters guessed that are not in the word.
    pub fn misses(&self) -> &BTreeSet<char> {
        self.game.bad_guesses()
    }

    pub fn remaining(&self) -> u32 {
        self.game.remaining()
    }

    pub fn status(&self) -> Status {
        self.game.status()
    }

    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Unwraps the finished game.
    pub fn into_game(self) -> Game {
        self.game
    }
}

/// Trait defining a Hangman strategy.
///
/// To write a strategy, define a new struct and implement [`Display`] on it
/// (the harness uses it to name the strategy, so do not use linebreaks),
/// then implement this trait. A strategy should keep guessing until
/// [`Puzzle::is_over()`] returns true; the [test harness](crate::Harness)
/// reports puzzles that were abandoned early as an error.
///
/// ```rust
/// use std::fmt::Display;
/// use hangman_rs::{strategy::Puzzle, Strategy};
///
/// #[derive(Debug)]
/// struct Backwards;
///
/// impl Display for Backwards {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "Backwards")
///     }
/// }
///
/// impl Strategy for Backwards {
///     fn solve(&self, puzzle: &mut Puzzle) {
///         for letter in ('a'..='z').rev() {
///             if puzzle.is_over() {
///                 break;
///             }
///             let _ = puzzle.guess(letter);
///         }
///     }
///
///     fn version(&self) -> &'static str {
///         "0.1.0"
///     }
/// }
/// ```
pub trait Strategy: Display + Debug + Sync {
    /// Guesses letters until the puzzle is won or lost.
    fn solve(&self, puzzle: &mut Puzzle);

    /// Provides a version for this strategy.
    ///
    /// Change it whenever the logic of the strategy changes so that
    /// comparisons between runs stay meaningful.
    fn version(&self) -> &'static str;
}
