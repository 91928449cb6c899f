//! Input tokenization.
//!
//! Converts raw player input into lowercase words.

use handbasket_world::direction::TRAILING_PUNCTUATION;

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string into words.
    ///
    /// - Converts words to lowercase
    /// - Splits on any whitespace
    /// - Strips sentence punctuation (`.`, `,`, `!`, `?`, `;`, `:`) from the
    ///   end of each word, unless that would leave nothing
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        input
            .split_whitespace()
            .map(|word| {
                let stripped = word.trim_end_matches(TRAILING_PUNCTUATION);
                if stripped.is_empty() { word } else { stripped }
            })
            .map(str::to_lowercase)
            .collect()
    }
}
