//! Game configuration.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    game::{Rules, HINT_THRESHOLD, TOTAL_NUMBER_OF_GUESSES_ALLOWED},
    words::WordList,
    ConfigError, Result,
};

/// Settings for a playing session, usually read from a JSON file.
///
/// Every field is optional in the file; missing fields take their default.
///
/// # Examples
///
/// ```rust
/// # use hangman_rs::Config;
/// let config: Config = serde_json::from_str(r#"{ "guess_budget": 6 }"#)?;
/// assert_eq!(config.rules().guess_budget, 6);
/// assert_eq!(config.rules().hint_threshold, 7);
/// #
/// # Ok::<_, serde_json::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub guess_budget: u32,
    pub hint_threshold: usize,
    /// A word list file to use instead of the builtin list.
    pub word_list: Option<PathBuf>,
    /// Where save files go when they are named without a directory.
    pub save_dir: PathBuf,
    pub save_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            guess_budget: TOTAL_NUMBER_OF_GUESSES_ALLOWED,
            hint_threshold: HINT_THRESHOLD,
            word_list: None,
            save_dir: PathBuf::from("saved"),
            save_extension: "json".to_string(),
        }
    }
}

impl Config {
    /// Reads a configuration file and validates it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text)?;
        config.validate()?;
        debug!("read configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rules().validate()
    }

    pub fn rules(&self) -> Rules {
        Rules {
            guess_budget: self.guess_budget,
            hint_threshold: self.hint_threshold,
        }
    }

    /// Loads the configured word list, or the builtin one.
    pub fn words(&self) -> Result<WordList> {
        match &self.word_list {
            Some(path) => Ok(WordList::from_file(path)?),
            None => Ok(WordList::builtin()),
        }
    }

    /// Turns a name typed by the player into a save file path.
    ///
    /// Bare names are placed in [`save_dir`](Self::save_dir), and the save
    /// extension is added when the name has none.
    pub fn save_path(&self, name: &str) -> PathBuf {
        let mut path = PathBuf::from(name);
        if path.extension().is_none() {
            path.set_extension(&self.save_extension);
        }
        if path.is_absolute() || path.parent().map_or(false, |p| !p.as_os_str().is_empty()) {
            path
        } else {
            self.save_dir.join(path)
        }
    }
}
