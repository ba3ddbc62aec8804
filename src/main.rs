//! Wordle Probe - CLI
//!
//! Entropy-driven Wordle solver with a probe-word fallback for late-game
//! plateaus.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::seq::IndexedRandom;
use wordle_probe::{
    commands::{run_simulation, solve_word},
    core::Word,
    output::{print_simulation_stats, print_solve_result},
    wordlists::{WORD_BANK, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_probe",
    about = "Entropy-driven Wordle solver with a probe-word fallback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a custom word list (defaults to the embedded bank)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Attempt budget per game
    #[arg(short = 'm', long, global = true, default_value = "6")]
    max_attempts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a target word (random when omitted)
    Solve {
        /// The target word to solve
        word: Option<String>,

        /// Show verbose output with candidate counts and entropy
        #[arg(short, long)]
        verbose: bool,
    },

    /// Simulate many games against random secrets
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// RNG seed for a reproducible batch
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn load_words(wordlist: Option<&str>) -> Result<Vec<Word>> {
    match wordlist {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("failed to read word list from '{path}'")),
        None => Ok(loader::words_from_slice(WORD_BANK)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_words(cli.wordlist.as_deref())?;

    match cli.command {
        Commands::Solve { word, verbose } => {
            let target = match word {
                Some(text) => Word::new(&text)?,
                None => words
                    .choose(&mut rand::rng())
                    .cloned()
                    .context("word list is empty")?,
            };
            let result = solve_word(&target, &words, cli.max_attempts)?;
            print_solve_result(&result, verbose);
        }
        Commands::Simulate { games, seed } => {
            println!("Simulating {games} games...");
            let stats = run_simulation(&words, games, cli.max_attempts, seed)?;
            print_simulation_stats(&stats);
        }
    }

    Ok(())
}
