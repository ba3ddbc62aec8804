//! Word list loading
//!
//! Files are whitespace-separated (one word per line or space-delimited);
//! case is normalized and invalid tokens are skipped.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, skipping tokens that are not five-letter words
///
/// # Errors
/// Returns an I/O error if the file cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .split_whitespace()
        .filter_map(|token| Word::new(token).ok())
        .collect())
}

/// Convert an embedded string slice into words
///
/// # Examples
/// ```
/// use wordle_probe::wordlists::{WORD_BANK, loader::words_from_slice};
///
/// let words = words_from_slice(WORD_BANK);
/// assert_eq!(words.len(), WORD_BANK.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);
        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
    }

    #[test]
    fn words_from_slice_skips_invalid_and_keeps_order() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_normalizes_case() {
        let words = words_from_slice(&["CRANE"]);
        assert_eq!(words[0].text(), "crane");
    }

    #[test]
    fn embedded_bank_loads_completely() {
        use crate::wordlists::WORD_BANK;
        assert_eq!(words_from_slice(WORD_BANK).len(), WORD_BANK.len());
    }
}
