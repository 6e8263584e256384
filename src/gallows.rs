//! Which parts of the hanging figure are drawn.

/// One stroke of the figure, in the order they are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
    Base,
    Wall,
    Roof,
    Rope,
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl Part {
    pub const ALL: [Part; 10] = [
        Part::Base,
        Part::Wall,
        Part::Roof,
        Part::Rope,
        Part::Head,
        Part::Body,
        Part::LeftArm,
        Part::RightArm,
        Part::LeftLeg,
        Part::RightLeg,
    ];
}

/// The figure after some number of wrong guesses.
///
/// With a budget of ten every wrong guess adds one part. Other budgets are
/// scaled so the figure is complete exactly when the budget is spent.
///
/// # Examples
///
/// ```rust
/// # use hangman_rs::{Gallows, gallows::Part};
/// let gallows = Gallows::new(5, 10);
/// assert_eq!(gallows.parts(), &[Part::Base, Part::Wall, Part::Roof, Part::Rope, Part::Head]);
///
/// assert!(Gallows::new(6, 6).is_complete());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Gallows {
    shown: usize,
}

impl Gallows {
    pub fn new(wrong: u32, budget: u32) -> Self {
        let total = Part::ALL.len() as u32;
        let wrong = wrong.min(budget);
        let shown = match wrong {
            0 => 0,
            // the first wrong guess always draws something
            _ => (wrong * total / budget).max(1),
        };
        Gallows {
            shown: shown as usize,
        }
    }

    pub fn parts(&self) -> &'static [Part] {
        let all: &'static [Part; 10] = &Part::ALL;
        &all[..self.shown]
    }

    pub fn contains(&self, part: Part) -> bool {
        self.parts().contains(&part)
    }

    pub fn is_complete(&self) -> bool {
        self.shown == Part::ALL.len()
    }
}

impl From<&crate::Game> for Gallows {
    fn from(game: &crate::Game) -> Self {
        Gallows::new(game.wrong_guesses(), game.rules().guess_budget)
    }
}
