//! Wordle Probe
//!
//! An entropy-driven Wordle solver with a probe-word fallback for late-game
//! plateaus, where several candidates differ in a single position.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_probe::core::{Pattern, Word};
//! use wordle_probe::solver::WordleSolver;
//! use wordle_probe::wordlists::{WORD_BANK, loader::words_from_slice};
//!
//! let words = words_from_slice(WORD_BANK);
//! let secret = Word::new("crate").unwrap();
//!
//! let mut solver = WordleSolver::new(&words, 6).unwrap();
//! loop {
//!     let guess = solver.next_guess().unwrap();
//!     let feedback = Pattern::of(&guess, &secret);
//!     solver.observe(&guess, feedback).unwrap();
//!     if feedback.is_all_correct() {
//!         break;
//!     }
//! }
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Game oracle
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
