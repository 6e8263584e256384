//! The interactive game loop.

use std::{
    error::Error,
    io::{BufRead, Write},
};

use hangman_rs::{
    game::Guess,
    session::SaveChoice,
    HangmanError, Result, Session, SessionState,
};
use log::debug;
use rand::Rng;

use crate::{
    command::{Command, HELP},
    render,
};

/// Reads commands from `input` and plays them against a session, writing
/// everything the player sees to `output`.
pub struct Play<R, I, O> {
    session: Session,
    rng: R,
    input: I,
    output: O,
}

impl<R: Rng, I: BufRead, O: Write> Play<R, I, O> {
    pub fn new(session: Session, rng: R, input: I, output: O) -> Self {
        Play {
            session,
            rng,
            input,
            output,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Plays until the player quits or the input runs out.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to Hangman!")?;
        writeln!(self.output, "{}", HELP)?;
        self.session.start(&mut self.rng)?;
        self.show_board()?;

        loop {
            let line = match self.prompt("> ")? {
                Some(line) => line,
                None => break,
            };

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };
            debug!("command {:?}", command);

            if !self.execute(command)? {
                break;
            }
        }

        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    /// Carries out one command. Returns false when the player has quit.
    fn execute(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Guess(letter) => {
                match self.session.guess(letter) {
                    Ok(Guess::Good { letter, count, .. }) => {
                        writeln!(self.output, "Yes, '{}' appears {} time(s).", letter, count)?
                    }
                    Ok(Guess::Bad { letter, .. }) => {
                        writeln!(self.output, "Sorry, there is no '{}'.", letter)?
                    }
                    Err(e) => return self.complain(e).map(|_| true),
                }
                self.after_move()?;
            }
            Command::Hint => {
                match self.session.hint(&mut self.rng) {
                    Ok(hint) => writeln!(
                        self.output,
                        "The word contains '{}' ({} time(s)). That cost one guess.",
                        hint.letter, hint.count
                    )?,
                    Err(e) => return self.complain(e).map(|_| true),
                }
                self.after_move()?;
            }
            Command::New => {
                if self.confirm_discard()? {
                    self.session.reset();
                    self.session.start(&mut self.rng)?;
                    writeln!(self.output, "New game started.")?;
                    self.show_board()?;
                }
            }
            Command::Save(name) => {
                let saved = match name {
                    Some(name) => {
                        let path = self.session.save_path_for(&name);
                        self.session.save_as(path).map(|p| p.display().to_string())
                    }
                    None => self.session.save().map(|p| p.display().to_string()),
                };
                match saved {
                    Ok(path) => writeln!(self.output, "Saved to {}.", path)?,
                    Err(e) => self.complain(e)?,
                }
            }
            Command::Load(name) => {
                if self.confirm_discard()? {
                    let path = self.session.save_path_for(&name);
                    match self.session.load(path).map(|_| ()) {
                        Ok(()) => {
                            writeln!(self.output, "Loaded {}.", name)?;
                            self.show_board()?;
                        }
                        Err(e) => self.complain(e)?,
                    }
                }
            }
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Quit => return self.confirm_discard().map(|go_ahead| !go_ahead),
        }
        Ok(true)
    }

    fn after_move(&mut self) -> Result<()> {
        self.show_board()?;
        if self.session.state() == SessionState::Ended {
            if let Some(game) = self.session.game() {
                render::ending(game, &mut self.output)?;
            }
            writeln!(self.output, "Type :new to play again or :quit to leave.")?;
        }
        Ok(())
    }

    fn show_board(&mut self) -> Result<()> {
        if let Some(game) = self.session.game() {
            render::board(game, &mut self.output)?;
        }
        Ok(())
    }

    /// Asks whether to save unsaved changes before they would be lost.
    /// Returns false if the player cancelled.
    fn confirm_discard(&mut self) -> Result<bool> {
        if !self.session.has_unsaved_changes() {
            return Ok(true);
        }

        let choice = loop {
            let question = "Save the current game first? [y]es, [n]o, [c]ancel: ";
            let answer = match self.prompt(question)? {
                Some(answer) => answer,
                None => break SaveChoice::Cancel,
            };
            match answer.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => break SaveChoice::Yes,
                "n" | "no" => break SaveChoice::No,
                "c" | "cancel" => break SaveChoice::Cancel,
                _ => writeln!(self.output, "Please answer y, n or c.")?,
            }
        };

        let needs_name = choice == SaveChoice::Yes && self.session.work_file().is_none();
        let name = if needs_name {
            match self.prompt("Save as: ")? {
                Some(name) if !name.trim().is_empty() => Some(name.trim().to_string()),
                _ => {
                    writeln!(self.output, "Not saved.")?;
                    return Ok(false);
                }
            }
        } else {
            None
        };

        match self.session.settle_unsaved(choice, name.as_deref()) {
            Ok(go_ahead) => Ok(go_ahead),
            Err(e) => {
                self.complain(e)?;
                Ok(false)
            }
        }
    }

    /// Tells the player what went wrong, without the outermost wrapper.
    fn complain(&mut self, e: HangmanError) -> Result<()> {
        debug!("{}", e);

        let mut messages = Vec::new();
        let mut source = e.source();
        while let Some(err) = source {
            messages.push(err.to_string());
            source = err.source();
        }
        if messages.is_empty() {
            messages.push(e.to_string());
        }

        writeln!(self.output, "{}", messages.join(": "))?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod test {
    use std::{io::Cursor, path::PathBuf};

    use hangman_rs::{save, Config, Status, WordList};
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let nonce: u64 = rand::thread_rng().gen();
        std::env::temp_dir().join(format!("hangman_runner-{}-{:x}-{}", std::process::id(), nonce, name))
    }

    type Scripted = Play<StdRng, Cursor<Vec<u8>>, Vec<u8>>;

    fn play(words: &str, config: Config, script: &str) -> (Scripted, String) {
        let session = Session::new(config, WordList::parse(words).unwrap());
        let mut play = Play::new(
            session,
            StdRng::seed_from_u64(3),
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
        );
        play.run().unwrap();
        let output = String::from_utf8(play.output.clone()).unwrap();
        (play, output)
    }

    #[test]
    fn winning_game() {
        let (play, output) = play("kayak", Config::default(), "k\nq\nk\nay\na\ny\n:quit\n");

        assert!(output.contains("Yes, 'k' appears 2 time(s)."));
        assert!(output.contains("Sorry, there is no 'q'."));
        assert!(output.contains("already been guessed"));
        assert!(output.contains("one letter at a time"));
        assert!(output.contains("You got it!"));
        assert!(output.ends_with("Goodbye!\n"));

        let game = play.session().game().unwrap();
        assert_eq!(game.status(), Status::Won);
        assert_eq!(game.remaining(), 9);
    }

    #[test]
    fn losing_game() {
        let script: String = "bcdefghijl".chars().map(|c| format!("{}\n", c)).collect();
        let (play, output) = play("ox", Config::default(), &script);

        assert!(output.contains("Out of guesses."));
        assert!(output.contains("  |   / \\"));
        assert_eq!(play.session().state(), SessionState::Ended);
    }

    #[test]
    fn hint_once() {
        let (play, output) = play("blacksmith", Config::default(), ":hint\n:hint\n:q\nn\n");

        assert!(output.contains("That cost one guess."));
        assert!(output.contains("no hint is available"));
        assert!(output.contains("Hint used."));
        assert!(play.session().game().unwrap().hint_used());
    }

    #[test]
    fn quitting_can_be_cancelled() {
        let (play, output) = play("otter", Config::default(), "t\n:quit\nmaybe\nc\no\n:quit\nn\n");

        assert!(output.contains("Please answer y, n or c."));
        assert!(output.contains("Yes, 'o' appears 1 time(s)."));
        assert!(output.ends_with("Goodbye!\n"));
        assert_eq!(play.session().state(), SessionState::InitializedModified);
    }

    #[test]
    fn save_before_new_game() {
        let dir = scratch_dir("runner_save_before_new");
        let config = Config {
            save_dir: dir.clone(),
            ..Config::default()
        };

        let (_, output) = play("otter", config, "t\n:new\ny\nfirst\n:quit\n");
        assert!(output.contains("New game started."));

        let game = save::load(dir.join("first.json")).unwrap();
        assert!(game.good_guesses().contains(&'t'));
        assert_eq!(game.remaining(), 10);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_missing_file() {
        let dir = scratch_dir("runner_load_missing");
        let config = Config {
            save_dir: dir,
            ..Config::default()
        };

        let (play, output) = play("otter", config, ":load nothing\n:save\n:quit\n");
        assert!(output.contains("could not read or write the save file"));
        assert!(output.contains("not been saved to a file yet"));
        assert_eq!(play.session().state(), SessionState::InitializedUnmodified);
    }
}
