//! What the player can type at the prompt.

use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Guess(char),
    Hint,
    New,
    Save(Option<String>),
    Load(String),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("type a letter to guess it, or :help for commands")]
    Empty,

    #[error("guess one letter at a time")]
    TooLong,

    #[error("unknown command :{0}, try :help")]
    Unknown(String),

    #[error(":{0} needs a file name")]
    MissingArgument(&'static str),
}

pub const HELP: &str = "\
Type a letter and press enter to guess it.
  :hint          reveal a letter, at the cost of one guess
  :new           start a new game
  :save [name]   save the game, to `name` or the file it came from
  :load name     load a saved game
  :help          show this message
  :quit          leave the game";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix(':') {
            let mut parts = rest.splitn(2, char::is_whitespace);
            let name = parts.next().unwrap_or("");
            let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

            return match name {
                "hint" | "h" => Ok(Command::Hint),
                "new" | "n" => Ok(Command::New),
                "save" | "s" => Ok(Command::Save(arg.map(str::to_string))),
                "load" | "l" => arg
                    .map(|a| Command::Load(a.to_string()))
                    .ok_or(CommandError::MissingArgument("load")),
                "help" | "?" => Ok(Command::Help),
                "quit" | "q" | "exit" => Ok(Command::Quit),
                other => Err(CommandError::Unknown(other.to_string())),
            };
        }

        let mut chars = line.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(CommandError::Empty),
            (Some(c), None) => Ok(Command::Guess(c)),
            (Some(_), Some(_)) => Err(CommandError::TooLong),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn guesses() {
        assert_eq!("a".parse(), Ok(Command::Guess('a')));
        assert_eq!("  Q \n".parse(), Ok(Command::Guess('Q')));
        // validity is the game's call
        assert_eq!("7".parse(), Ok(Command::Guess('7')));
        assert_eq!("ab".parse::<Command>(), Err(CommandError::TooLong));
        assert_eq!("\n".parse::<Command>(), Err(CommandError::Empty));
    }

    #[test]
    fn commands() {
        assert_eq!(":hint".parse(), Ok(Command::Hint));
        assert_eq!(":n".parse(), Ok(Command::New));
        assert_eq!(":save".parse(), Ok(Command::Save(None)));
        assert_eq!(
            ":save  my game ".parse(),
            Ok(Command::Save(Some("my game".to_string())))
        );
        assert_eq!(":load monday".parse(), Ok(Command::Load("monday".to_string())));
        assert_eq!(
            ":load".parse::<Command>(),
            Err(CommandError::MissingArgument("load"))
        );
        assert_eq!(":quit".parse(), Ok(Command::Quit));
        assert_eq!(
            ":dance".parse::<Command>(),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }
}
