//! Saving games to and loading them from disk.
//!
//! A save file is the game's fields written out as JSON. Loading checks
//! the fields against each other, so a hand-edited or truncated file is
//! reported as corrupt instead of producing an impossible game.

use std::{collections::BTreeSet, fs, path::Path};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    game::{Game, Rules},
    words::Word,
    SaveError,
};

/// The save format version written by this crate.
pub const VERSION: u32 = 1;

/// The on-disk form of a [`Game`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveFile {
    pub version: u32,
    pub target_word: Word,
    pub good_guesses: BTreeSet<char>,
    pub bad_guesses: BTreeSet<char>,
    pub remaining_guesses: u32,
    pub hint_used: bool,
    pub guess_budget: u32,
    pub hint_threshold: usize,
}

impl From<&Game> for SaveFile {
    fn from(game: &Game) -> Self {
        let rules = game.rules();
        SaveFile {
            version: VERSION,
            target_word: game.solution().clone(),
            good_guesses: game.good_guesses().clone(),
            bad_guesses: game.bad_guesses().clone(),
            remaining_guesses: game.remaining(),
            hint_used: game.hint_used(),
            guess_budget: rules.guess_budget,
            hint_threshold: rules.hint_threshold,
        }
    }
}

impl SaveFile {
    /// Checks the saved fields and rebuilds the game.
    pub fn into_game(self) -> Result<Game, SaveError> {
        if self.version != VERSION {
            return Err(SaveError::UnsupportedVersion(self.version));
        }

        let corrupt =
            |reason: &str| -> Result<Game, SaveError> { Err(SaveError::Corrupt(reason.to_string())) };

        if self.guess_budget == 0 {
            return corrupt("the guess budget is zero");
        }
        if self
            .good_guesses
            .iter()
            .chain(self.bad_guesses.iter())
            .any(|c| !c.is_ascii_lowercase())
        {
            return corrupt("a guessed letter is not from a to z");
        }
        if !self.good_guesses.is_disjoint(&self.bad_guesses) {
            return corrupt("a letter is recorded as both a good and a bad guess");
        }
        if self
            .good_guesses
            .iter()
            .any(|&c| !self.target_word.contains_letter(c))
        {
            return corrupt("a good guess does not appear in the word");
        }
        if self
            .bad_guesses
            .iter()
            .any(|&c| self.target_word.contains_letter(c))
        {
            return corrupt("a bad guess appears in the word");
        }

        let spent = self.bad_guesses.len() as u32 + self.hint_used as u32;
        if spent > self.guess_budget || self.remaining_guesses != self.guess_budget - spent {
            return corrupt("the remaining guesses do not match the guesses made");
        }
        if self.remaining_guesses == 0
            && self
                .target_word
                .chars()
                .all(|c| self.good_guesses.contains(&c))
        {
            return corrupt("the word was revealed after the last guess was spent");
        }
        if self.hint_used && self.target_word.distinct_letters().len() <= self.hint_threshold {
            return corrupt("a hint was used on a word too short to offer one");
        }

        Ok(Game::from_parts(
            self.target_word,
            self.good_guesses,
            self.bad_guesses,
            self.remaining_guesses,
            self.hint_used,
            Rules {
                guess_budget: self.guess_budget,
                hint_threshold: self.hint_threshold,
            },
        ))
    }
}

/// Writes `game` to `path`, creating missing parent directories.
pub fn save(path: impl AsRef<Path>, game: &Game) -> Result<(), SaveError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(&SaveFile::from(game))?;
    fs::write(path, json)?;
    info!("saved game to {}", path.display());
    Ok(())
}

/// Reads the game saved at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Game, SaveError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let file: SaveFile = serde_json::from_str(&text)?;
    let game = file.into_game()?;
    info!("loaded game from {}", path.display());
    Ok(game)
}

#[cfg(test)]
pub(crate) mod test {
    use std::path::PathBuf;

    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::Status;

    /// A path under the temp dir that no other test uses.
    pub(crate) fn scratch_path(name: &str) -> PathBuf {
        let nonce: u64 = rand::thread_rng().gen();
        std::env::temp_dir()
            .join(format!("hangman_rs-{}-{:x}", std::process::id(), nonce))
            .join(name)
    }

    fn played() -> Game {
        let mut game = Game::new(Word::new("lighthouse").unwrap(), Rules::default());
        game.guess('h').unwrap();
        game.guess('z').unwrap();
        game.hint(&mut StdRng::seed_from_u64(2)).unwrap();
        game
    }

    #[test]
    fn save_then_load() {
        let path = scratch_path("game.json");
        let game = played();

        save(&path, &game).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, game);
        assert_eq!(loaded.remaining(), 8);
        assert!(!loaded.hint_available());

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn field_layout() {
        let mut game = Game::new(Word::new("moon").unwrap(), Rules::default());
        game.guess('o').unwrap();
        game.guess('x').unwrap();

        let value = serde_json::to_value(SaveFile::from(&game)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "version": 1,
                "target_word": "moon",
                "good_guesses": ["o"],
                "bad_guesses": ["x"],
                "remaining_guesses": 9,
                "hint_used": false,
                "guess_budget": 10,
                "hint_threshold": 7,
            })
        );
    }

    fn file(good: &[char], bad: &[char], remaining: u32, hint_used: bool) -> SaveFile {
        SaveFile {
            version: VERSION,
            target_word: Word::new("moon").unwrap(),
            good_guesses: good.iter().copied().collect(),
            bad_guesses: bad.iter().copied().collect(),
            remaining_guesses: remaining,
            hint_used,
            guess_budget: 10,
            hint_threshold: 7,
        }
    }

    #[test]
    fn rejects_inconsistent_files() {
        let bad_files = [
            file(&['o'], &['o'], 9, false),
            file(&['x'], &[], 10, false),
            file(&[], &['m'], 9, false),
            file(&['o'], &['x'], 10, false),
            file(&['o'], &['x'], 8, false),
            file(&['O'], &[], 10, false),
            file(&[], &[], 10, true),
            file(&['o'], &[], 9, true),
            file(
                &['m', 'o', 'n'],
                &['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j'],
                0,
                false,
            ),
        ];
        for bad in bad_files {
            assert!(matches!(bad.into_game(), Err(SaveError::Corrupt(_))));
        }

        let ok = file(&['o', 'm', 'n'], &['x'], 9, false).into_game().unwrap();
        assert_eq!(ok.status(), Status::Won);

        let mut hinted = file(&['o', 'm'], &['x'], 8, true);
        hinted.hint_threshold = 2;
        assert!(hinted.into_game().unwrap().hint_used());
    }

    #[test]
    fn rejects_other_versions() {
        let mut future = file(&[], &[], 10, false);
        future.version = 2;
        assert!(matches!(
            future.into_game(),
            Err(SaveError::UnsupportedVersion(2))
        ));
    }

    #[test]
    fn reports_malformed_json() {
        let path = scratch_path("broken.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ \"version\": 1, ").unwrap();
        assert!(matches!(load(&path), Err(SaveError::Serde(_))));

        fs::write(&path, "{ \"version\": 1, \"target_word\": \"not a word\" }").unwrap();
        assert!(matches!(load(&path), Err(SaveError::Serde(_))));

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn reports_missing_file() {
        assert!(matches!(
            load(scratch_path("missing.json")),
            Err(SaveError::Io(_))
        ));
    }
}
