//! The test harness for running Hangman strategies.

use std::ops::Deref;

use log::info;
use rand::seq::index::sample;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    game::{Game, Rules},
    perf::Perf,
    strategy::{Puzzle, Strategy},
    words::{Word, WordList},
    HangmanError, HarnessError, Result,
};

/// A test harness that can run many strategies on many puzzles.
///
/// When you want to test your strategies, create a new test harness
/// with [`new()`](Harness::new()). You can then configure it using various
/// methods. Note that these configuration methods consume the existing
/// [`Harness`] and return a new one.
///
/// # Examples
///
/// ```rust
/// # use hangman_rs::harness::Harness;
/// use hangman_rs::strategy::alphabetical::Alphabetical;
///
/// let harness = Harness::new()
///     .quiet()
///     .add_strategy(Box::new(Alphabetical))
///     .test_num(50);
///
/// let record = harness.run()?;
/// assert_eq!(record[0].num_tried(), 50);
/// #
/// # Ok::<_, hangman_rs::HangmanError>(())
/// ```
#[derive(Debug)]
pub struct Harness {
    strategies: Vec<Box<dyn Strategy>>,
    verbose: bool,
    num_puzzles: Option<usize>,
    baseline: Option<usize>,
    words: WordList,
    rules: Rules,
}

impl Default for Harness {
    fn default() -> Self {
        Harness {
            strategies: Vec::new(),
            verbose: false,
            num_puzzles: Some(100),
            baseline: None,
            words: WordList::builtin(),
            rules: Rules::default(),
        }
    }
}

impl Harness {
    /// Creates a new test harness with default configuration.
    ///
    /// Defaults:
    /// 1. tests no strategies
    /// 2. quiet mode
    /// 3. runs each strategy on 100 words from the builtin list
    /// 4. uses the default rules
    /// 5. does not compare against a baseline
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the harness show a progress bar while testing.
    pub fn verbose(self) -> Self {
        Harness {
            verbose: true,
            ..self
        }
    }

    /// Makes the harness silent while testing.
    pub fn quiet(self) -> Self {
        Harness {
            verbose: false,
            ..self
        }
    }

    /// Adds a strategy to the harness for testing.
    pub fn add_strategy(self, strat: Box<dyn Strategy>) -> Self {
        let mut strategies = self.strategies;
        strategies.push(strat);
        Harness { strategies, ..self }
    }

    /// Adds a [`Vec`] of strategies to the harness for testing.
    pub fn add_strategies(self, strats: Vec<Box<dyn Strategy>>) -> Self {
        let mut strategies = self.strategies;
        strategies.extend(strats);
        Harness { strategies, ..self }
    }

    /// Adds a strategy to the harness for testing and sets it as the baseline
    /// for comparison.
    pub fn add_baseline(self, strat: Box<dyn Strategy>) -> Self {
        self.add_strategy(strat).and_baseline()
    }

    /// Sets the most recently added strategy as the baseline for comparisons.
    ///
    /// Does nothing if no strategy has been added yet.
    pub fn and_baseline(self) -> Self {
        Self {
            baseline: self.strategies.len().checked_sub(1),
            ..self
        }
    }

    /// Sets the harness to test each strategy on every word in the list.
    pub fn test_all(self) -> Self {
        Harness {
            num_puzzles: None,
            ..self
        }
    }

    /// Sets the harness to test each strategy on `n` random words.
    ///
    /// `n` is capped at the length of the word list when the harness runs.
    pub fn test_num(self, n: usize) -> Self {
        Harness {
            num_puzzles: Some(n),
            ..self
        }
    }

    /// Draws puzzles from `words` instead of the builtin list.
    pub fn words(self, words: WordList) -> Self {
        Harness { words, ..self }
    }

    /// Plays every puzzle under `rules`.
    pub fn rules(self, rules: Rules) -> Self {
        Harness { rules, ..self }
    }

    /// Runs the harness and produces performances for each strategy.
    ///
    /// The [`Perf`]s will be in the same order as the strategies were added
    /// to the harness.
    pub fn run(&self) -> Result<Record> {
        if self.strategies.is_empty() {
            return Err(HarnessError::NoStrategiesAdded.into());
        }
        self.rules.validate()?;

        let words: Vec<&Word> = match self.num_puzzles {
            Some(n) => {
                let mut rng = rand::thread_rng();
                sample(&mut rng, self.words.len(), n.min(self.words.len()))
                    .iter()
                    .filter_map(|i| self.words.get(i))
                    .collect()
            }
            None => self.words.iter().collect(),
        };
        info!(
            "running {} strategies on {} words",
            self.strategies.len(),
            words.len()
        );

        #[cfg(feature = "fancy")]
        let bar = if self.verbose {
            indicatif::ProgressBar::new(words.len() as u64)
        } else {
            indicatif::ProgressBar::hidden()
        };
        let run_one = |word: &&Word| {
            let res = self.run_inner(word);
            #[cfg(feature = "fancy")]
            bar.inc(1);
            res
        };

        #[cfg(feature = "parallel")]
        let results = words
            .par_iter()
            .map(run_one)
            .collect::<Result<Vec<_>, HangmanError>>()?;
        #[cfg(not(feature = "parallel"))]
        let results = words
            .iter()
            .map(run_one)
            .collect::<Result<Vec<_>, HangmanError>>()?;

        #[cfg(feature = "fancy")]
        bar.finish_and_clear();

        let mut perfs: Vec<Perf> = self
            .strategies
            .iter()
            .map(|strat| Perf::new(strat.as_ref(), self.rules))
            .collect();
        for games in results {
            for (perf, game) in perfs.iter_mut().zip(games) {
                perf.tries.push(game);
            }
        }

        Ok(Record::new(perfs, self.baseline))
    }

    fn run_inner(&self, word: &Word) -> Result<Vec<Game>, HangmanError> {
        let mut games = Vec::with_capacity(self.strategies.len());

        for strategy in self.strategies.iter() {
            let mut puzzle = Puzzle::new(Game::new(word.clone(), self.rules));
            strategy.solve(&mut puzzle);
            if !puzzle.is_over() {
                return Err(HarnessError::StrategyGaveUp(format!("{}", strategy)).into());
            }
            games.push(puzzle.into_game());
        }

        Ok(games)
    }

    /// Runs the harness (see [`run()`](Harness::run())) and prints performance
    /// summaries of each strategy.
    pub fn run_and_summarize(&self) -> Result<Record> {
        let perfs = self.run()?;
        for perf in perfs.iter() {
            println!("{}", perf);
        }
        Ok(perfs)
    }
}

/// The performances produced by one run of a [`Harness`].
#[derive(Debug, Clone, Default)]
pub struct Record {
    perfs: Vec<Perf>,
    baseline: Option<usize>,
}

impl Deref for Record {
    type Target = [Perf];

    fn deref(&self) -> &Self::Target {
        &self.perfs
    }
}

impl Record {
    fn new(perfs: Vec<Perf>, baseline: impl Into<Option<usize>>) -> Self {
        Self {
            perfs,
            baseline: baseline.into(),
        }
    }

    pub fn baseline(&self) -> Option<&Perf> {
        self.baseline.and_then(|n| self.perfs.get(n))
    }

    /// Prints a summary of every strategy, compared with the baseline if one
    /// was set.
    #[cfg(feature = "fancy")]
    pub fn print_report(&self) -> Result<()> {
        use crate::Summary;

        if let Some(baseline) = self.baseline() {
            let baseline_summary = baseline.to_summary();

            for perf in self.perfs.iter() {
                let summary = perf.to_summary();
                match summary.print(
                    Summary::print_options()
                        .compare(&baseline_summary)
                        .histogram(true),
                ) {
                    Ok(()) => {}
                    Err(HangmanError::SelfComparison) => {
                        summary.print(Summary::print_options().histogram(true))?
                    }
                    Err(e) => return Err(e),
                }
            }
        } else {
            for perf in self.perfs.iter() {
                let summary = perf.to_summary();
                summary.print(Summary::print_options().histogram(true))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{mock::Mock, strategy::alphabetical::Alphabetical};

    fn words() -> WordList {
        WordList::parse("cab\nzoo\nfizz\nbead").unwrap()
    }

    #[test]
    fn requires_strategies() {
        assert!(matches!(
            Harness::new().run(),
            Err(HangmanError::Harness {
                kind: HarnessError::NoStrategiesAdded
            })
        ));
    }

    #[test]
    fn runs_every_word() {
        let record = Harness::new()
            .add_strategy(Box::new(Alphabetical))
            .add_baseline(Box::new(Mock::new(None)))
            .words(words())
            .test_all()
            .run()
            .unwrap();

        assert_eq!(record.len(), 2);
        assert_eq!(record[0].strategy_name(), "hangman_rs::Alphabetical v0.1.0");
        assert_eq!(record.baseline().unwrap().strategy_name(), "Mock None v1.2.4");

        // alphabetical wins cab and bead, but runs out before reaching zoo or fizz
        assert_eq!(record[0].num_tried(), 4);
        assert_eq!(record[0].num_solved(), 2);
        assert_eq!(record[0].num_missed(), 2);
    }

    #[test]
    fn caps_sample_size() {
        let record = Harness::new()
            .add_strategy(Box::new(Alphabetical))
            .words(words())
            .test_num(100)
            .run()
            .unwrap();
        assert_eq!(record[0].num_tried(), 4);
    }

    #[test]
    fn respects_rules() {
        let record = Harness::new()
            .add_strategy(Box::new(Alphabetical))
            .words(WordList::parse("cab").unwrap())
            .rules(Rules {
                guess_budget: 26,
                ..Rules::default()
            })
            .test_all()
            .run()
            .unwrap();
        assert_eq!(record[0].num_solved(), 1);
        assert_eq!(record[0].to_summary().histogram()[0], 1);
    }

    #[test]
    fn reports_unfinished_puzzles() {
        let res = Harness::new()
            .add_strategy(Box::new(Mock::new("ab")))
            .words(words())
            .test_all()
            .run();
        assert!(matches!(
            res,
            Err(HangmanError::Harness {
                kind: HarnessError::StrategyGaveUp(_)
            })
        ));
    }
}
