//! A playing session: the current game, its save file, and whether it has
//! changed since it was last saved.

use std::path::{Path, PathBuf};

use log::info;
use rand::Rng;

use crate::{
    config::Config,
    game::{Game, Guess, Hint},
    save,
    words::WordList,
    Result, SessionError,
};

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No game has been started.
    Uninitialized,
    /// A game is running and matches its save file, if it has one.
    InitializedUnmodified,
    /// A game is running and has moves that are not saved.
    InitializedModified,
    /// The game was won or lost.
    Ended,
}

/// The player's answer when asked whether to save unsaved changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SaveChoice {
    Yes,
    No,
    Cancel,
}

/// Drives one game at a time and keeps track of saving.
///
/// Front ends should check [`has_unsaved_changes()`](Self::has_unsaved_changes())
/// before replacing or abandoning the game, and ask the player to save.
///
/// # Examples
///
/// ```rust
/// # use hangman_rs::{Config, Session, SessionState, WordList};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let mut session = Session::new(Config::default(), WordList::parse("kayak")?);
/// assert_eq!(session.state(), SessionState::Uninitialized);
///
/// session.start(&mut rng)?;
/// session.guess('k')?;
/// assert!(session.has_unsaved_changes());
///
/// session.guess('a')?;
/// session.guess('y')?;
/// assert_eq!(session.state(), SessionState::Ended);
/// #
/// # Ok::<_, hangman_rs::HangmanError>(())
/// ```
#[derive(Debug)]
pub struct Session {
    config: Config,
    words: WordList,
    game: Option<Game>,
    state: SessionState,
    work_file: Option<PathBuf>,
}

impl Session {
    pub fn new(config: Config, words: WordList) -> Self {
        Session {
            config,
            words,
            game: None,
            state: SessionState::Uninitialized,
            work_file: None,
        }
    }

    /// Starts a new game with a random word.
    ///
    /// Fails while another game is still being played; finish it or
    /// [`reset()`](Self::reset()) first.
    pub fn start(&mut self, rng: &mut impl Rng) -> Result<&Game> {
        if matches!(
            self.state,
            SessionState::InitializedUnmodified | SessionState::InitializedModified
        ) {
            return Err(SessionError::GameInProgress.into());
        }

        self.work_file = None;
        self.state = SessionState::InitializedUnmodified;
        let game = Game::random(&self.words, self.config.rules(), rng);
        Ok(&*self.game.insert(game))
    }

    pub fn guess(&mut self, letter: char) -> Result<Guess> {
        let game = self.game.as_mut().ok_or(SessionError::NoGame)?;
        let guess = game.guess(letter)?;
        self.after_move();
        Ok(guess)
    }

    pub fn hint(&mut self, rng: &mut impl Rng) -> Result<Hint> {
        let game = self.game.as_mut().ok_or(SessionError::NoGame)?;
        let hint = game.hint(rng)?;
        self.after_move();
        Ok(hint)
    }

    fn after_move(&mut self) {
        self.state = match &self.game {
            Some(game) if game.status().is_over() => SessionState::Ended,
            _ => SessionState::InitializedModified,
        };
    }

    /// Returns true if the player should be offered a chance to save.
    pub fn has_unsaved_changes(&self) -> bool {
        self.state == SessionState::InitializedModified
    }

    /// Acts on the player's answer to being asked to save their changes.
    ///
    /// With [`SaveChoice::Yes`] the game is saved to the work file, or to
    /// `name` when there is no work file yet. Returns false when the player
    /// cancelled and whatever prompted the question should not go ahead.
    pub fn settle_unsaved(&mut self, choice: SaveChoice, name: Option<&str>) -> Result<bool> {
        match choice {
            SaveChoice::Yes => {
                match (self.work_file.is_some(), name) {
                    (true, _) => self.save()?,
                    (false, Some(name)) => self.save_as(self.save_path_for(name))?,
                    (false, None) => return Err(SessionError::NoWorkFile.into()),
                };
                Ok(true)
            }
            SaveChoice::No => Ok(true),
            SaveChoice::Cancel => Ok(false),
        }
    }

    /// Saves to the file the game was last saved to or loaded from.
    pub fn save(&mut self) -> Result<&Path> {
        let path = self.work_file.clone().ok_or(SessionError::NoWorkFile)?;
        self.save_as(path)
    }

    /// Saves to `path` and makes it the work file.
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<&Path> {
        let path = path.into();
        let game = self.game.as_ref().ok_or(SessionError::NoGame)?;
        save::save(&path, game)?;

        if self.state == SessionState::InitializedModified {
            self.state = SessionState::InitializedUnmodified;
        }
        Ok(self.work_file.insert(path).as_path())
    }

    /// Replaces the current game with the one saved at `path`.
    pub fn load(&mut self, path: impl Into<PathBuf>) -> Result<&Game> {
        let path = path.into();
        let game = save::load(&path)?;

        self.state = if game.status().is_over() {
            SessionState::Ended
        } else {
            SessionState::InitializedUnmodified
        };
        self.work_file = Some(path);
        Ok(&*self.game.insert(game))
    }

    /// Drops the current game and forgets its work file.
    pub fn reset(&mut self) {
        info!("resetting session");
        self.game = None;
        self.work_file = None;
        self.state = SessionState::Uninitialized;
    }

    /// Resolves a save name typed by the player; see [`Config::save_path()`].
    pub fn save_path_for(&self, name: &str) -> PathBuf {
        self.config.save_path(name)
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn work_file(&self) -> Option<&Path> {
        self.work_file.as_deref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
