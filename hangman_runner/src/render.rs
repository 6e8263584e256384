//! Drawing the game in the terminal.

use std::io::{self, Write};

use hangman_rs::{
    gallows::{Gallows, Part},
    Game, Status,
};
use owo_colors::{OwoColorize, Stream::Stdout};

const WIDTH: usize = 10;
const HEIGHT: usize = 7;

/// Lays out the figure as rows of text, one character per cell.
pub fn figure(gallows: &Gallows) -> Vec<String> {
    let mut grid = [[' '; WIDTH]; HEIGHT];

    for part in gallows.parts() {
        match part {
            Part::Base => grid[6] = ['='; WIDTH],
            Part::Wall => (0..6).for_each(|row| grid[row][2] = '|'),
            Part::Roof => {
                grid[0][2] = '+';
                (3..7).for_each(|col| grid[0][col] = '-');
                grid[0][7] = '+';
            }
            Part::Rope => grid[1][7] = '|',
            Part::Head => grid[2][7] = 'O',
            Part::Body => grid[3][7] = '|',
            Part::LeftArm => grid[3][6] = '/',
            Part::RightArm => grid[3][8] = '\\',
            Part::LeftLeg => grid[4][6] = '/',
            Part::RightLeg => grid[4][8] = '\\',
        }
    }

    grid.iter()
        .map(|row| row.iter().collect::<String>().trim_end().to_string())
        .collect()
}

/// One box per letter of the word, with the letters found so far.
pub fn word_boxes(game: &Game) -> String {
    game.pattern()
        .iter()
        .map(|slot| format!("[{}]", slot.unwrap_or(' ')))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The word with the letters the player never found marked in red.
pub fn solution(game: &Game) -> String {
    game.solution()
        .chars()
        .map(|c| {
            if game.good_guesses().contains(&c) {
                c.to_string()
            } else {
                c.if_supports_color(Stdout, |c| c.red()).to_string()
            }
        })
        .collect()
}

/// Every letter of the alphabet. Letters already guessed are lowercase and
/// colored by whether they were in the word.
pub fn alphabet(game: &Game) -> String {
    ('a'..='z')
        .map(|c| {
            if game.good_guesses().contains(&c) {
                c.if_supports_color(Stdout, |c| c.green()).to_string()
            } else if game.bad_guesses().contains(&c) {
                c.if_supports_color(Stdout, |c| c.red()).to_string()
            } else {
                c.to_ascii_uppercase().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn board(game: &Game, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    for line in figure(&Gallows::from(game)) {
        writeln!(out, "  {}", line)?;
    }
    writeln!(out)?;
    writeln!(out, "  {}", word_boxes(game))?;
    writeln!(out)?;
    writeln!(out, "  {}", alphabet(game))?;
    writeln!(out, "  Guesses left: {}", game.remaining())?;

    if game.hint_available() {
        writeln!(out, "  A hint is available, type :hint to use it.")?;
    } else if game.hint_used() {
        writeln!(out, "  Hint used.")?;
    }
    Ok(())
}

pub fn ending(game: &Game, out: &mut impl Write) -> io::Result<()> {
    match game.status() {
        Status::Won => writeln!(
            out,
            "You got it! The word was {}.",
            game.solution().if_supports_color(Stdout, |w| w.bold())
        ),
        Status::Lost => writeln!(out, "Out of guesses. The word was {}.", solution(game)),
        Status::InProgress => Ok(()),
    }
}

#[cfg(test)]
mod test {
    use hangman_rs::{Rules, Word};

    use super::*;

    fn game(word: &str) -> Game {
        Game::new(Word::new(word).unwrap(), Rules::default())
    }

    #[test]
    fn empty_figure() {
        assert!(figure(&Gallows::new(0, 10)).iter().all(|l| l.is_empty()));
    }

    #[test]
    fn partial_figure() {
        let lines = figure(&Gallows::new(3, 10));
        assert_eq!(lines[0], "  +----+");
        assert_eq!(lines[1], "  |");
        assert_eq!(lines[6], "==========");
    }

    #[test]
    fn full_figure() {
        let lines = figure(&Gallows::new(10, 10));
        assert_eq!(
            lines,
            vec![
                "  +----+",
                "  |    |",
                "  |    O",
                "  |   /|\\",
                "  |   / \\",
                "  |",
                "==========",
            ]
        );
    }

    #[test]
    fn boxes_show_found_letters() {
        let mut game = game("noon");
        game.guess('o').unwrap();
        assert_eq!(word_boxes(&game), "[ ] [o] [o] [ ]");
    }

    #[test]
    fn board_mentions_hint() {
        let mut out = Vec::new();
        board(&game("blacksmith"), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Guesses left: 10"));
        assert!(text.contains(":hint"));

        let mut out = Vec::new();
        board(&game("cat"), &mut out).unwrap();
        assert!(!String::from_utf8(out).unwrap().contains(":hint"));
    }
}
