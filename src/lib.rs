#![doc = include_str!("../README.md")]

use thiserror::Error;

pub mod words;
pub use words::{Word, WordList};

pub mod game;
pub use game::{Game, Rules, Status};

pub mod gallows;
pub use gallows::Gallows;

pub mod save;

pub mod config;
pub use config::Config;

pub mod session;
pub use session::{Session, SessionState};

pub mod strategy;
pub use strategy::Strategy;

pub mod harness;
pub use harness::Harness;

pub mod perf;
pub use perf::{Perf, Summary};

#[cfg(test)]
mod mock;

/// Shorthand for results whose error is a [`HangmanError`].
pub type Result<T, E = HangmanError> = std::result::Result<T, E>;

/// The errors that `hangman_rs` can produce.
#[derive(Debug, Error)]
pub enum HangmanError {
    #[error("game encountered error")]
    Game {
        #[from]
        kind: GameError,
    },

    #[error("word list encountered error")]
    Words {
        #[from]
        kind: WordsError,
    },

    #[error("could not save or load the game")]
    Save {
        #[from]
        kind: SaveError,
    },

    #[error("invalid configuration")]
    Config {
        #[from]
        kind: ConfigError,
    },

    #[error("session encountered error")]
    Session {
        #[from]
        kind: SessionError,
    },

    #[error("general IO error")]
    Printing(#[from] std::io::Error),

    #[error("cannot compare a strategy with itself")]
    SelfComparison,

    #[error("the test harness encountered an error")]
    Harness {
        #[from]
        kind: HarnessError,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Only the letters `a` to `z` can be guessed.
    #[error("'{0}' is not a letter from a to z")]
    InvalidLetter(char),

    /// The letter was already guessed, either correctly or not.
    #[error("the letter '{0}' has already been guessed")]
    AlreadyGuessed(char),

    /// The game was already won or lost.
    #[error("the game is already over")]
    GameOver,

    /// The hint was used, the word is too short, or too few guesses remain.
    #[error("no hint is available right now")]
    HintUnavailable,
}

#[derive(Debug, Error)]
pub enum WordsError {
    #[error("\"{0}\" is not a word made only of letters")]
    InvalidWord(String),

    #[error("the word list does not contain any usable words")]
    Empty,

    #[error("could not read the word list")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("could not read or write the save file")]
    Io(#[from] std::io::Error),

    #[error("trouble serializing or deserializing the save file")]
    Serde(#[from] serde_json::Error),

    #[error("save file format version {0} is not supported")]
    UnsupportedVersion(u32),

    #[error("the save file is corrupt: {0}")]
    Corrupt(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("the guess budget must be at least one")]
    InvalidBudget,

    #[error("could not read the configuration file")]
    Io(#[from] std::io::Error),

    #[error("trouble deserializing the configuration file")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("there is no game to play or save")]
    NoGame,

    #[error("a game is already in progress")]
    GameInProgress,

    #[error("the game has not been saved to a file yet")]
    NoWorkFile,
}

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("no strategies have been added to the harness")]
    NoStrategiesAdded,

    /// A strategy gave up on a puzzle without finishing it.
    #[error("the strategy {0} left a puzzle unfinished")]
    StrategyGaveUp(String),
}
