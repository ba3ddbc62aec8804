//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern};

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: &Pattern) -> String {
    pattern
        .symbols()
        .iter()
        .map(|symbol| match symbol {
            Feedback::Absent => '⬜',
            Feedback::Present => '🟨',
            Feedback::Correct => '🟩',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a colored bar
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = 6.0; // Roughly log2(64)
    create_progress_bar(entropy, max_entropy, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn pattern_to_emoji_all_gray() {
        let pattern = Pattern::from_code("00000").unwrap();
        assert_eq!(pattern_to_emoji(&pattern), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn pattern_to_emoji_all_green() {
        assert_eq!(pattern_to_emoji(&Pattern::WIN), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn pattern_to_emoji_mixed() {
        let guess = Word::new("speed").unwrap();
        let solution = Word::new("erase").unwrap();
        let pattern = Pattern::of(&guess, &solution);
        assert_eq!(pattern_to_emoji(&pattern), "🟨⬜🟨🟨⬜");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
