use std::{io, path::PathBuf, process};

use clap::{Parser, Subcommand};
use hangman_rs::{Config, Result, Session, WordList};
use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};

mod bench;
mod command;
mod play;
mod render;

/// Play Hangman in the terminal, or see how well the solvers play it.
#[derive(Debug, Parser)]
#[clap(name = "hangman", version, about)]
struct Cli {
    /// JSON configuration file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Word list to draw from, one word per line
    #[clap(short, long)]
    words: Option<PathBuf>,

    /// Seed for choosing words and hints
    #[clap(long)]
    seed: Option<u64>,

    /// Log more; repeat for even more
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[clap(subcommand)]
    command: Option<Action>,
}

#[derive(Debug, Subcommand)]
enum Action {
    /// Play a game (the default)
    Play,
    /// Run the solvers on many words and report how they did
    Bench {
        /// How many words to test each strategy on
        #[clap(short, long, default_value_t = 100)]
        games: usize,

        /// Test on every word in the list
        #[clap(long)]
        all: bool,

        /// Which strategies to run; all of them when left out
        #[clap(short, long = "strategy")]
        strategies: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli) {
        error!("{:?}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if cli.words.is_some() {
        config.word_list = cli.words.clone();
    }
    let words: WordList = config.words()?;
    info!("{} words available", words.len());

    match cli.command.unwrap_or(Action::Play) {
        Action::Play => {
            let rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let stdin = io::stdin();
            let session = Session::new(config, words);
            play::Play::new(session, rng, stdin.lock(), io::stdout()).run()
        }
        Action::Bench {
            games,
            all,
            strategies,
        } => {
            let games = if all { None } else { Some(games) };
            bench::run(&strategies, words, config.rules(), games)
        }
    }
}
