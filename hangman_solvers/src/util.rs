//! Helpers shared by the strategies.

use std::collections::{BTreeMap, BTreeSet};

use hangman_rs::WordList;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::bytes::{Regex, RegexBuilder};

lazy_static! {
    /// The builtin word list, parsed once.
    pub static ref BUILTIN: WordList = WordList::builtin();

    /// Every letter, from the one found in the most builtin words to the
    /// one found in the fewest.
    pub static ref BY_FREQUENCY: Vec<char> = {
        let counts = letter_occurrences(BUILTIN.iter().map(|w| &**w));
        ('a'..='z')
            .sorted_by_key(|c| std::cmp::Reverse(counts.get(c).copied().unwrap_or(0)))
            .collect()
    };
}

/// Builds a regex matching the words that fit a partly revealed pattern.
///
/// Hidden positions cannot hold a letter that was already guessed: a good
/// guess reveals every position it appears in, and a bad guess is in no
/// position at all.
pub fn generate_regex(pattern: &[Option<char>], guessed: &BTreeSet<char>) -> Regex {
    let hidden = if guessed.is_empty() {
        "[a-z]".to_string()
    } else {
        format!("[^{}]", guessed.iter().collect::<String>())
    };

    let mut str = String::from("^");
    for position in pattern {
        match position {
            Some(c) => str.push(*c),
            None => str.push_str(&hidden),
        }
    }
    str.push('$');

    let mut rb = RegexBuilder::new(&str);
    rb.unicode(false);

    rb.build().expect("patterns only contain letters and classes")
}

/// Counts how many of `words` contain each letter.
///
/// A letter that appears twice in one word is counted once for it.
pub fn letter_occurrences<'a>(words: impl IntoIterator<Item = &'a str>) -> BTreeMap<char, u32> {
    let mut map = BTreeMap::new();

    words
        .into_iter()
        .flat_map(|s| s.chars().unique())
        .for_each(|c| {
            let key = map.entry(c).or_insert(0);
            *key += 1;
        });

    map
}
