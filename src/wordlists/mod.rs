//! Word lists
//!
//! An embedded word bank compiled into the binary, plus a file loader for
//! custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORD_BANK, WORD_BANK_COUNT};
