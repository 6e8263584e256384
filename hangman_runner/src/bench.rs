//! Runs the solvers through the test harness.

use hangman_rs::{
    strategy::alphabetical::Alphabetical, Harness, Result, Rules, Strategy, WordList,
};
use hangman_solvers::{Frequency, Narrowing};
use log::warn;

pub const STRATEGY_NAMES: [&str; 3] = ["alphabetical", "frequency", "narrowing"];

/// Builds a strategy from its name on the command line.
///
/// Narrowing works from `words`, so it knows what the harness will draw from.
pub fn strategy(name: &str, words: &WordList) -> Option<Box<dyn Strategy>> {
    match name.to_ascii_lowercase().as_str() {
        "alphabetical" => Some(Box::new(Alphabetical)),
        "frequency" => Some(Box::new(Frequency)),
        "narrowing" => Some(Box::new(Narrowing::new().words(words.clone()))),
        _ => None,
    }
}

/// Sets up a harness with the named strategies, or all of them when none are
/// named. Frequency, when present, is the baseline.
pub fn harness(names: &[String], words: WordList, rules: Rules, games: Option<usize>) -> Harness {
    let names: Vec<&str> = if names.is_empty() {
        STRATEGY_NAMES.to_vec()
    } else {
        names.iter().map(String::as_str).collect()
    };

    let mut harness = Harness::new().verbose();
    for name in names {
        match strategy(name, &words) {
            Some(strat) if name.eq_ignore_ascii_case("frequency") => {
                harness = harness.add_baseline(strat)
            }
            Some(strat) => harness = harness.add_strategy(strat),
            None => warn!(
                "unknown strategy {:?}, expected one of {:?}",
                name, STRATEGY_NAMES
            ),
        }
    }

    let harness = harness.words(words).rules(rules);
    match games {
        Some(n) => harness.test_num(n),
        None => harness.test_all(),
    }
}

pub fn run(names: &[String], words: WordList, rules: Rules, games: Option<usize>) -> Result<()> {
    let record = harness(names, words, rules, games).run()?;
    record.print_report()
}
