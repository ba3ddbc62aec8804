//! Embedded word bank
//!
//! Generated from `data/word_bank.txt` at build time.

include!(concat!(env!("OUT_DIR"), "/word_bank.rs"));
