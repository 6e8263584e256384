//! The guessing game itself.

use std::collections::BTreeSet;

use log::{debug, info};
use rand::Rng;

use crate::{words::Word, words::WordList, ConfigError, GameError};

/// How many wrong guesses a player gets by default.
pub const TOTAL_NUMBER_OF_GUESSES_ALLOWED: u32 = 10;

/// A word needs more distinct letters than this before a hint is offered.
pub const HINT_THRESHOLD: usize = 7;

/// The tunable rules of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rules {
    /// The number of wrong guesses that ends the game.
    pub guess_budget: u32,
    /// A hint is offered only for words with more distinct letters than this.
    pub hint_threshold: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            guess_budget: TOTAL_NUMBER_OF_GUESSES_ALLOWED,
            hint_threshold: HINT_THRESHOLD,
        }
    }
}

impl Rules {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.guess_budget == 0 {
            Err(ConfigError::InvalidBudget)
        } else {
            Ok(())
        }
    }
}

/// Where a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress,
    /// Every letter of the word was revealed.
    Won,
    /// The guess budget ran out first.
    Lost,
}

impl Status {
    pub fn is_over(self) -> bool {
        self != Status::InProgress
    }
}

/// The result of a successful call to [`Game::guess()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guess {
    /// The letter is in the word.
    Good {
        letter: char,
        /// How many positions the letter revealed.
        count: usize,
        /// Whether this guess finished the word.
        won: bool,
    },
    /// The letter is not in the word and cost one guess.
    Bad {
        letter: char,
        remaining: u32,
        /// Whether this guess used up the budget.
        lost: bool,
    },
}

/// The result of a successful call to [`Game::hint()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hint {
    pub letter: char,
    pub count: usize,
    pub won: bool,
}

/// A single game of Hangman.
///
/// A game tracks the target word, the letters guessed correctly and
/// incorrectly, and the number of guesses the player has left. Each wrong
/// letter costs one guess, and so does the hint.
///
/// # Examples
///
/// ```rust
/// # use hangman_rs::{Game, Rules, Status, Word};
/// use hangman_rs::game::Guess;
///
/// let mut game = Game::new(Word::new("moon")?, Rules::default());
///
/// assert_eq!(
///     game.guess('o')?,
///     Guess::Good { letter: 'o', count: 2, won: false }
/// );
/// assert_eq!(
///     game.guess('x')?,
///     Guess::Bad { letter: 'x', remaining: 9, lost: false }
/// );
/// assert_eq!(game.masked('_'), "_oo_");
///
/// // Guessing the same letter twice is refused and costs nothing.
/// assert!(game.guess('x').is_err());
/// assert_eq!(game.remaining(), 9);
///
/// game.guess('m')?;
/// game.guess('N')?;
/// assert_eq!(game.status(), Status::Won);
/// #
/// # Ok::<_, hangman_rs::HangmanError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    target: Word,
    good: BTreeSet<char>,
    bad: BTreeSet<char>,
    remaining: u32,
    hint_used: bool,
    rules: Rules,
}

impl Game {
    /// Starts a new game with the given target word.
    pub fn new(target: Word, rules: Rules) -> Self {
        info!("starting a game with a {} letter word", target.len());
        Game {
            target,
            good: BTreeSet::new(),
            bad: BTreeSet::new(),
            remaining: rules.guess_budget,
            hint_used: false,
            rules,
        }
    }

    /// Starts a new game with a random word from `words`.
    pub fn random(words: &WordList, rules: Rules, rng: &mut impl Rng) -> Self {
        Self::new(words.choose(rng).clone(), rules)
    }

    /// Rebuilds a game from its parts without checking them.
    ///
    /// Callers are responsible for upholding the invariants; see
    /// [`crate::save`] for the checked path.
    pub(crate) fn from_parts(
        target: Word,
        good: BTreeSet<char>,
        bad: BTreeSet<char>,
        remaining: u32,
        hint_used: bool,
        rules: Rules,
    ) -> Self {
        Game {
            target,
            good,
            bad,
            remaining,
            hint_used,
            rules,
        }
    }

    /// Guesses a letter.
    ///
    /// Uppercase ASCII letters are accepted and lowercased. Returns an error,
    /// without changing the game, when the game is over, when `letter` is
    /// not in `a..=z`, or when it was guessed before.
    pub fn guess(&mut self, letter: char) -> Result<Guess, GameError> {
        if self.status().is_over() {
            return Err(GameError::GameOver);
        }

        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return Err(GameError::InvalidLetter(letter));
        }
        if self.already_guessed(letter) {
            return Err(GameError::AlreadyGuessed(letter));
        }

        let count = self.target.chars().filter(|&c| c == letter).count();
        let guess = if count > 0 {
            self.good.insert(letter);
            Guess::Good {
                letter,
                count,
                won: self.status() == Status::Won,
            }
        } else {
            self.bad.insert(letter);
            self.remaining -= 1;
            Guess::Bad {
                letter,
                remaining: self.remaining,
                lost: self.status() == Status::Lost,
            }
        };

        debug!("guessed {:?}", guess);
        if self.status().is_over() {
            info!("game over: {:?}", self.status());
        }
        Ok(guess)
    }

    /// Returns true if the word has enough distinct letters to offer a hint.
    pub fn is_hintable(&self) -> bool {
        self.target.distinct_letters().len() > self.rules.hint_threshold
    }

    /// Returns true if [`hint()`](Self::hint()) would succeed.
    ///
    /// The hint costs a guess, so it is withheld once only one guess is left.
    pub fn hint_available(&self) -> bool {
        !self.status().is_over() && !self.hint_used && self.is_hintable() && self.remaining > 1
    }

    /// Reveals one letter that has not been found yet, at the cost of a guess.
    ///
    /// A random hidden position is chosen, so letters that appear more often
    /// in the word are more likely to be revealed.
    pub fn hint(&mut self, rng: &mut impl Rng) -> Result<Hint, GameError> {
        if !self.hint_available() {
            return Err(GameError::HintUnavailable);
        }

        let hidden: Vec<char> = self
            .target
            .chars()
            .filter(|c| !self.good.contains(c))
            .collect();
        let letter = hidden[rng.gen_range(0..hidden.len())];
        let count = hidden.iter().filter(|&&c| c == letter).count();

        self.good.insert(letter);
        self.hint_used = true;
        self.remaining -= 1;

        let hint = Hint {
            letter,
            count,
            won: self.status() == Status::Won,
        };
        debug!("hint {:?}", hint);
        Ok(hint)
    }

    pub fn status(&self) -> Status {
        if self.target.chars().all(|c| self.good.contains(&c)) {
            Status::Won
        } else if self.remaining == 0 {
            Status::Lost
        } else {
            Status::InProgress
        }
    }

    /// Returns each position of the word, revealed or not.
    pub fn pattern(&self) -> Vec<Option<char>> {
        self.target
            .chars()
            .map(|c| self.good.contains(&c).then(|| c))
            .collect()
    }

    /// Returns the word with unrevealed letters replaced by `placeholder`.
    pub fn masked(&self, placeholder: char) -> String {
        self.pattern()
            .into_iter()
            .map(|c| c.unwrap_or(placeholder))
            .collect()
    }

    /// Returns the target word.
    ///
    /// Front ends should only show this once the game is over.
    pub fn solution(&self) -> &Word {
        &self.target
    }

    pub fn already_guessed(&self, letter: char) -> bool {
        self.good.contains(&letter) || self.bad.contains(&letter)
    }

    pub fn good_guesses(&self) -> &BTreeSet<char> {
        &self.good
    }

    pub fn bad_guesses(&self) -> &BTreeSet<char> {
        &self.bad
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// The number of guesses spent so far, including the hint.
    pub fn wrong_guesses(&self) -> u32 {
        self.rules.guess_budget - self.remaining
    }

    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn game(word: &str) -> Game {
        Game::new(Word::new(word).unwrap(), Rules::default())
    }

    macro_rules! game_test {
        (I $game:ident; $letter:expr, $works:expr, $masked:expr, $remaining:expr) => {{
            if $works {
                $game.guess($letter).unwrap();
            } else {
                assert!($game.guess($letter).is_err());
            }
            assert_eq!($game.masked('_'), $masked);
            assert_eq!($game.remaining(), $remaining);
        }};

        ($fn_name:ident[$answer:expr => $( [$letter:expr, $works:expr, $masked:expr, $remaining:expr] );*] => $status:expr) => {
            #[test]
            fn $fn_name() {
                let mut game = game($answer);

                $(game_test!(I game; $letter, $works, $masked, $remaining);)*

                assert_eq!(game.status(), $status);
            }
        };
    }

    game_test! { reveals_every_position ["letter" =>
        ['t', true, "__tt__", 10];
        ['e', true, "_ette_", 10];
        ['l', true, "lette_", 10];
        ['r', true, "letter", 10]] => Status::Won
    }

    game_test! { wrong_letters_cost_once ["cat" =>
        ['z', true, "___", 9];
        ['z', false, "___", 9];
        ['q', true, "___", 8];
        ['a', true, "_a_", 8];
        ['a', false, "_a_", 8]] => Status::InProgress
    }

    game_test! { invalid_letters_are_free ["cat" =>
        ['1', false, "___", 10];
        [' ', false, "___", 10];
        ['é', false, "___", 10];
        ['C', true, "c__", 10]] => Status::InProgress
    }

    game_test! { running_out ["ox" =>
        ['a', true, "__", 9];
        ['b', true, "__", 8];
        ['c', true, "__", 7];
        ['d', true, "__", 6];
        ['e', true, "__", 5];
        ['f', true, "__", 4];
        ['g', true, "__", 3];
        ['h', true, "__", 2];
        ['i', true, "__", 1];
        ['j', true, "__", 0];
        ['o', false, "__", 0]] => Status::Lost
    }

    game_test! { no_guesses_after_winning ["aa" =>
        ['a', true, "aa", 10];
        ['b', false, "aa", 10]] => Status::Won
    }

    #[test]
    fn guess_reports() {
        let mut game = game("bubble");
        assert_eq!(
            game.guess('b'),
            Ok(Guess::Good {
                letter: 'b',
                count: 3,
                won: false
            })
        );
        assert_eq!(
            game.guess('x'),
            Ok(Guess::Bad {
                letter: 'x',
                remaining: 9,
                lost: false
            })
        );
        assert_eq!(game.guess('x'), Err(GameError::AlreadyGuessed('x')));
        assert_eq!(game.guess('9'), Err(GameError::InvalidLetter('9')));
        game.guess('u').unwrap();
        game.guess('l').unwrap();
        assert_eq!(
            game.guess('e'),
            Ok(Guess::Good {
                letter: 'e',
                count: 1,
                won: true
            })
        );
        assert_eq!(game.guess('z'), Err(GameError::GameOver));
    }

    #[test]
    fn last_wrong_guess_loses() {
        let rules = Rules {
            guess_budget: 1,
            ..Rules::default()
        };
        let mut game = Game::new(Word::new("a").unwrap(), rules);
        assert_eq!(
            game.guess('b'),
            Ok(Guess::Bad {
                letter: 'b',
                remaining: 0,
                lost: true
            })
        );
        assert_eq!(game.status(), Status::Lost);
        assert_eq!(game.wrong_guesses(), 1);
    }

    #[test]
    fn short_words_get_no_hint() {
        // seven distinct letters is not enough
        let mut game = game("pancake");
        assert!(!game.is_hintable());
        assert!(!game.hint_available());
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(game.hint(&mut rng), Err(GameError::HintUnavailable));
    }

    #[test]
    fn hint_reveals_and_costs_one() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = game("lighthouse");
        assert!(game.is_hintable());
        game.guess('h').unwrap();

        let hint = game.hint(&mut rng).unwrap();
        assert_ne!(hint.letter, 'h');
        assert!(game.solution().contains_letter(hint.letter));
        assert_eq!(
            hint.count,
            game.solution().chars().filter(|&c| c == hint.letter).count()
        );
        assert!(game.good_guesses().contains(&hint.letter));
        assert!(game.hint_used());
        assert_eq!(game.remaining(), 9);
        assert_eq!(game.wrong_guesses(), 1);

        assert!(!game.hint_available());
        assert_eq!(game.hint(&mut rng), Err(GameError::HintUnavailable));
    }

    #[test]
    fn hint_withheld_at_one_guess() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = game("lighthouse");
        for letter in "abcdfjkmn".chars() {
            game.guess(letter).unwrap();
        }
        assert_eq!(game.remaining(), 1);
        assert!(!game.hint_available());
        assert_eq!(game.hint(&mut rng), Err(GameError::HintUnavailable));
    }

    #[test]
    fn hint_can_win() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut game = game("lighthouse");
        for letter in "lightous".chars() {
            game.guess(letter).unwrap();
        }
        let hint = game.hint(&mut rng).unwrap();
        assert_eq!(hint.letter, 'e');
        assert!(hint.won);
        assert_eq!(game.status(), Status::Won);
    }

    #[test]
    fn pattern_and_masked() {
        let mut game = game("hello");
        game.guess('l').unwrap();
        assert_eq!(game.pattern(), [None, None, Some('l'), Some('l'), None]);
        assert_eq!(game.masked('*'), "**ll*");
    }

    fn check_invariants(game: &Game) {
        assert!(game.good_guesses().is_disjoint(game.bad_guesses()));
        assert!(game
            .good_guesses()
            .iter()
            .all(|&c| game.solution().contains_letter(c)));
        assert!(game
            .bad_guesses()
            .iter()
            .all(|&c| !game.solution().contains_letter(c)));
        assert_eq!(
            game.remaining(),
            game.rules().guess_budget - game.bad_guesses().len() as u32 - game.hint_used() as u32
        );
    }

    proptest! {
        #[test]
        fn invariants_hold(
            word in "[a-z]{1,12}",
            moves in proptest::collection::vec(prop_oneof![Just('?'), any::<char>(), proptest::char::range('a', 'z')], 0..40),
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = game(&word);

            for letter in moves {
                let before = game.clone();
                let result = if letter == '?' {
                    game.hint(&mut rng).map(|_| ())
                } else {
                    game.guess(letter).map(|_| ())
                };
                if result.is_err() {
                    prop_assert_eq!(&before, &game);
                }
                check_invariants(&game);
            }
        }
    }
}
