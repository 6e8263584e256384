//! Target words and the lists they are drawn from.

use std::{collections::BTreeSet, fmt::Display, fs, ops::Deref, path::Path};

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::WordsError;

const BUILTIN: &str = include_str!("../words/words.txt");

/// A Hangman target word.
///
/// Construction is validated, so every instance is non-empty and made only
/// of the lowercase ASCII letters `a` through `z`.
///
/// # Examples
///
/// ```rust
/// # use hangman_rs::Word;
/// let word = Word::new("Rustacean")?;
/// assert_eq!(&*word, "rustacean");
///
/// assert!(Word::new("can't").is_err());
/// assert!(Word::new("").is_err());
/// #
/// # Ok::<_, hangman_rs::WordsError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Creates a new [`Word`], lowercasing it first.
    pub fn new(word: &str) -> Result<Self, WordsError> {
        let lower = word.to_ascii_lowercase();
        if !lower.is_empty() && lower.chars().all(|c| c.is_ascii_lowercase()) {
            Ok(Word(lower))
        } else {
            Err(WordsError::InvalidWord(word.to_string()))
        }
    }

    /// Returns the distinct letters of the word in alphabetical order.
    pub fn distinct_letters(&self) -> BTreeSet<char> {
        self.0.chars().collect()
    }

    /// Returns true if `letter` appears anywhere in the word.
    pub fn contains_letter(&self, letter: char) -> bool {
        self.0.contains(letter)
    }
}

impl Deref for Word {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Word {
    type Error = WordsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Word::new(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

/// A list of words that target words are chosen from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Parses a word list with one word per line.
    ///
    /// Lines are trimmed first. Blank lines are ignored, and so are lines
    /// that contain anything besides letters, so a list of mixed entries
    /// like `o'clock` or `x-ray` still works. Returns an error if no usable
    /// words remain.
    pub fn parse(text: &str) -> Result<Self, WordsError> {
        let mut skipped = 0_usize;
        let words: Vec<Word> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| match Word::new(line) {
                Ok(word) => Some(word),
                Err(_) => {
                    skipped += 1;
                    None
                }
            })
            .collect();

        if skipped > 0 {
            warn!("skipped {} word list entries that are not plain words", skipped);
        }

        if words.is_empty() {
            return Err(WordsError::Empty);
        }

        debug!("loaded {} words", words.len());
        Ok(WordList { words })
    }

    /// Reads and parses a word list file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WordsError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::parse(&text)
    }

    /// Returns the word list that ships with the crate.
    pub fn builtin() -> Self {
        Self::parse(BUILTIN).expect("the builtin word list has words")
    }

    /// Picks a word uniformly at random.
    pub fn choose(&self, rng: &mut impl Rng) -> &Word {
        &self.words[rng.gen_range(0..self.words.len())]
    }

    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false, since an empty list cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::builtin()
    }
}
