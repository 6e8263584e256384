//! Evaluating and comparing strategies.

use std::{fmt::Display, ops::Deref};

#[cfg(feature = "fancy")]
use std::io::Write;

#[cfg(feature = "fancy")]
use comfy_table::{Cell, Color, ColumnConstraint, Row, Table, Width};
#[cfg(feature = "fancy")]
use itertools::Itertools;
#[cfg(feature = "fancy")]
use owo_colors::{AnsiColors, OwoColorize, Stream};
use serde::{Deserialize, Serialize};

use crate::{
    game::{Game, Rules, Status},
    strategy::Strategy,
    HangmanError,
};

/// A record of one strategy's games after run by the
/// [test harness](crate::Harness).
///
/// This struct can provide statistics about the games on its own, but it
/// is recommended to produce [`Summary`] first to cache the computations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Perf {
    pub(crate) tries: Vec<Game>,
    strategy_name: String,
    rules: Rules,
}

impl Perf {
    /// Creates a new empty performance record.
    pub(crate) fn new(strat: &dyn Strategy, rules: Rules) -> Self {
        Perf {
            tries: Vec::new(),
            strategy_name: format!("{} v{}", strat, strat.version()),
            rules,
        }
    }

    /// Gets the name of the strategy that produced this performance record.
    pub fn strategy_name(&self) -> &str {
        &self.strategy_name
    }

    /// Gets the finished games, in no particular order.
    pub fn games(&self) -> &[Game] {
        &self.tries
    }

    /// Gets the number of puzzles attempted by the strategy.
    pub fn num_tried(&self) -> u32 {
        self.tries.len() as u32
    }

    /// Gets the number of puzzles solved by the strategy.
    pub fn num_solved(&self) -> u32 {
        self.solved().count() as u32
    }

    fn solved(&self) -> impl Iterator<Item = &Game> {
        self.tries.iter().filter(|g| g.status() == Status::Won)
    }

    /// Gets the fraction of puzzles solved by the strategy.
    pub fn frac_solved(&self) -> f32 {
        ratio(self.num_solved(), self.num_tried())
    }

    /// Gets the number of wrong guesses across all puzzle attempts.
    pub fn cumulative_wrong(&self) -> u32 {
        self.tries.iter().map(Game::wrong_guesses).sum()
    }

    /// Gets the average number of wrong guesses on solved puzzles.
    pub fn wrong_per_solution(&self) -> f32 {
        let wrong: u32 = self.solved().map(Game::wrong_guesses).sum();
        ratio(wrong, self.num_solved())
    }

    /// Gets the number of puzzles the strategy could not solve.
    ///
    /// This function always returns a number less than or equal to
    /// [`num_tried()`](Self::num_tried()).
    pub fn num_missed(&self) -> u32 {
        self.num_tried() - self.num_solved()
    }

    /// Gets the fraction of puzzles the strategy could not solve.
    pub fn frac_missed(&self) -> f32 {
        ratio(self.num_missed(), self.num_tried())
    }

    /// Prints the strategy's summary and then a table showing how the
    /// strategy did on each word.
    #[cfg(feature = "fancy")]
    pub fn print(&self) {
        print!("{}", self);
        let mut table = Table::new();
        if !table.is_tty() {
            table.set_table_width(80);
        } else {
            table.load_preset(comfy_table::presets::UTF8_FULL);
        }
        let widest = self
            .tries
            .iter()
            .map(|g| g.solution().len())
            .max()
            .unwrap_or(5)
            .max(5);
        let columns = (table.get_table_width().unwrap_or(80) as usize / (widest + 4)).max(1);
        for chunk in self
            .tries
            .iter()
            .sorted_by(|a, b| a.solution().cmp(b.solution()))
            .chunks(columns)
            .into_iter()
        {
            let mut row = Row::new();
            for game in chunk {
                let mut cell = Cell::new(format!(
                    "{}\n{}\n{} wrong",
                    game.solution(),
                    game.masked('_'),
                    game.wrong_guesses()
                ));
                if game.status() != Status::Won {
                    cell = cell.bg(Color::Red).fg(Color::Black);
                }
                row.add_cell(cell);
            }
            table.add_row(row);
        }
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(widest as u16));
            columns
        ]);
        println!("{}", table);
    }

    /// Converts this performance record to a pre-calculated summary.
    pub fn to_summary(&self) -> Summary {
        let mut bins = vec![0; self.rules.guess_budget as usize];

        self.solved()
            .map(|game| game.wrong_guesses() as usize)
            .for_each(|n| bins[n] += 1);

        Summary {
            strategy_name: &self.strategy_name,
            num_tried: self.num_tried(),
            num_solved: self.num_solved(),
            cumulative_wrong: self.cumulative_wrong(),
            histogram: bins.into(),
        }
    }
}

impl Display for Perf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let perf_summary = self.to_summary();
        write!(f, "{}", perf_summary)
    }
}

/// `num / den`, or zero when nothing was counted.
fn ratio(num: u32, den: u32) -> f32 {
    if den == 0 {
        0.0
    } else {
        num as f32 / den as f32
    }
}

/// A summary of a strategy's performance generated by the
/// [test harness](crate::Harness).
///
/// It is recommended to convert the [`Perf`] struct to this via the
/// [`Perf::to_summary()`] method when you want to compare strategies.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Summary<'a> {
    strategy_name: &'a str,
    num_tried: u32,
    num_solved: u32,
    cumulative_wrong: u32,
    histogram: Histogram,
}

impl<'a> Summary<'a> {
    /// Gets the name of the strategy that produced this performance record.
    pub fn strategy_name(&self) -> &'a str {
        self.strategy_name
    }

    /// Gets the number of puzzles attempted by the strategy.
    pub fn num_tried(&self) -> u32 {
        self.num_tried
    }

    /// Gets the number of puzzles solved by the strategy.
    pub fn num_solved(&self) -> u32 {
        self.num_solved
    }

    /// Gets the fraction of puzzles solved by the strategy.
    pub fn frac_solved(&self) -> f32 {
        ratio(self.num_solved, self.num_tried)
    }

    /// Gets the number of wrong guesses across all puzzle attempts.
    pub fn cumulative_wrong(&self) -> u32 {
        self.cumulative_wrong
    }

    /// Gets the number of wrong guesses across all solved puzzles.
    pub fn cumulative_wrong_solved(&self) -> u32 {
        self.histogram
            .iter()
            .enumerate()
            .map(|(i, v)| i as u32 * v)
            .sum::<u32>()
    }

    /// Gets the average number of wrong guesses on solved puzzles.
    pub fn mean_wrong(&self) -> f32 {
        ratio(self.cumulative_wrong_solved(), self.num_solved)
    }

    /// Gets the number of puzzles the strategy could not solve.
    pub fn num_missed(&self) -> u32 {
        self.num_tried - self.num_solved
    }

    /// Gets the fraction of puzzles the strategy could not solve.
    pub fn frac_missed(&self) -> f32 {
        ratio(self.num_missed(), self.num_tried)
    }

    /// Gets the histogram of wrong guesses on solved puzzles.
    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    pub fn compare<'b>(&self, baseline: &Summary<'b>) -> Result<Comparison<'a, 'b>, HangmanError> {
        if self == baseline {
            return Err(HangmanError::SelfComparison);
        }

        Ok(Comparison {
            this: self.clone(),
            baseline: baseline.clone(),
        })
    }

    #[cfg(feature = "fancy")]
    pub fn print(&self, options: SummaryPrintOptions) -> Result<(), HangmanError> {
        let mut stdout = std::io::stdout();
        match options.compare {
            Some(baseline) => {
                let comparison = self.compare(&baseline)?;

                writeln!(stdout, "{:-^80}", self.strategy_name)?;
                writeln!(
                    stdout,
                    "Ran {} words and comp. with {}, {} words",
                    self.num_tried(),
                    baseline.strategy_name(),
                    baseline.num_tried()
                )?;

                let solved_diff = comparison.frac_solved_diff();
                writeln!(
                    stdout,
                    "Guessed {} correctly, or {:.1}% ({:+.1}%), and {} incorrectly",
                    self.num_solved(),
                    self.frac_solved() * 100.,
                    (solved_diff * 100.).if_supports_color(Stream::Stdout, |text| {
                        if solved_diff.is_sign_positive() {
                            text.color(AnsiColors::Green)
                        } else {
                            text.color(AnsiColors::Red)
                        }
                    }),
                    self.num_missed(),
                )?;

                let wrong_diff = comparison.mean_wrong_diff();
                writeln!(
                    stdout,
                    "Solved words took {:.2} ({:+.2}) wrong guesses on average",
                    self.mean_wrong(),
                    wrong_diff.if_supports_color(Stream::Stdout, |text| {
                        if wrong_diff.is_sign_negative() {
                            text.color(AnsiColors::Green)
                        } else {
                            text.color(AnsiColors::Red)
                        }
                    }),
                )?;
            }
            None => {
                write!(stdout, "{}", self)?;
            }
        }

        if options.histogram {
            write!(stdout, "{}", self.histogram)?;
        }

        Ok(())
    }

    pub fn print_options() -> SummaryPrintOptions<'a> {
        SummaryPrintOptions::default()
    }
}

#[derive(Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SummaryPrintOptions<'a> {
    compare: Option<Summary<'a>>,
    histogram: bool,
}

impl<'a> SummaryPrintOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compare(self, baseline: &Summary<'a>) -> Self {
        Self {
            compare: Some(baseline.clone()),
            ..self
        }
    }

    pub fn histogram(self, histogram: bool) -> Self {
        Self { histogram, ..self }
    }
}

impl<'a> Display for Summary<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:-^80}", self.strategy_name)?;
        writeln!(f, "Ran {} words", self.num_tried(),)?;

        writeln!(
            f,
            "Guessed {} correctly, or {:.1}%, and {} incorrectly",
            self.num_solved(),
            self.frac_solved() * 100.,
            self.num_missed()
        )?;

        writeln!(
            f,
            "Solved words took {:.2} wrong guesses on average",
            self.mean_wrong(),
        )?;

        Ok(())
    }
}

/// The differences between a summary and a baseline summary.
#[derive(Debug, Clone)]
pub struct Comparison<'a, 'b> {
    this: Summary<'a>,
    baseline: Summary<'b>,
}

impl<'a, 'b> Comparison<'a, 'b> {
    pub fn tries_eq(&self) -> bool {
        self.this.num_tried == self.baseline.num_tried
    }

    pub fn num_solved_diff(&self) -> Option<i64> {
        self.tries_eq()
            .then(|| self.this.num_solved() as i64 - self.baseline.num_solved() as i64)
    }

    pub fn num_missed_diff(&self) -> Option<i64> {
        self.tries_eq()
            .then(|| self.this.num_missed() as i64 - self.baseline.num_missed() as i64)
    }

    pub fn frac_solved_diff(&self) -> f32 {
        self.this.frac_solved() - self.baseline.frac_solved()
    }

    pub fn frac_missed_diff(&self) -> f32 {
        self.this.frac_missed() - self.baseline.frac_missed()
    }

    pub fn mean_wrong_diff(&self) -> f32 {
        self.this.mean_wrong() - self.baseline.mean_wrong()
    }
}

/// How many solved puzzles took each number of wrong guesses.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Histogram {
    bins: Vec<u32>,
}

impl From<Vec<u32>> for Histogram {
    fn from(other: Vec<u32>) -> Self {
        Self { bins: other }
    }
}

impl Deref for Histogram {
    type Target = [u32];

    fn deref(&self) -> &Self::Target {
        &self.bins
    }
}

impl Display for Histogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let max = self.iter().copied().max().unwrap_or(0);
        let digits =
            std::iter::successors(Some(max), |&n| (n >= 10).then(|| n / 10)).count() as u32;
        let label = std::iter::successors(Some(self.bins.len()), |&n| (n >= 10).then(|| n / 10))
            .count();
        let count_per_mark = (max as f32 / (80. - digits as f32 - label as f32 - 6.)).max(1.0);

        for (i, &bin) in self.bins.iter().enumerate() {
            write!(f, "{:>label$} |", i)?;
            let marks = (bin as f32 / count_per_mark).floor() as usize;
            writeln!(f, "{:■>marks$} ({})", "", bin)?;
        }

        Ok(())
    }
}
