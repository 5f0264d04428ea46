//! Text formatting utilities
//!
//! Helpers for presenting roster text in human-readable form.

/// Upper-cases the first character of every word
///
/// Words are delimited by whitespace; a hyphen also starts a new word, so
/// the character immediately following one is upper-cased
/// (`"hello-world"` becomes `"Hello-World"`). All other characters keep
/// their original case.
///
/// # Arguments
/// - `input` - The text to transform; may be empty
///
/// # Returns
/// A new string with boundary-leading characters upper-cased
pub fn capitalize_words(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut at_word_start = true;

    for ch in input.chars() {
        if at_word_start {
            result.extend(ch.to_uppercase());
        } else {
            result.push(ch);
        }
        at_word_start = ch.is_whitespace() || ch == '-';
    }

    result
}
