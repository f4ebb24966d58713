//! Sentence and word tokenization.
//!
//! Rule-based splitting tuned for cleaned wiki text: heading, table and
//! list sentences carry no terminal punctuation and must come through as a
//! single sentence, so an unterminated line is one sentence, never zero.

use crate::patterns;

/// Sentence terminators.
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Closing punctuation absorbed into the sentence after its terminator.
const TRAILING_CLOSERS: [char; 4] = ['"', '\'', ')', ']'];

/// Abbreviations whose trailing period does not end a sentence.
/// Single-letter words (initials, the parts of "e.g." and "i.e.") are
/// handled by a separate rule.
const ABBREVIATIONS: [&str; 16] = [
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "al", "inc", "ltd", "co",
    "no", "fig",
];

/// Splits text into sentences.
///
/// Boundaries are terminator runs followed by whitespace or end of input,
/// with guards for decimal numbers, known abbreviations and single-letter
/// initials. Sentences are trimmed; empty input yields no sentences.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut buffer = String::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        buffer.push(ch);

        if TERMINATORS.contains(&ch) && is_boundary(&chars, i) {
            while i + 1 < chars.len() && TRAILING_CLOSERS.contains(&chars[i + 1]) {
                i += 1;
                buffer.push(chars[i]);
            }
            let sentence = buffer.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            buffer.clear();
        }

        i += 1;
    }

    let rest = buffer.trim();
    if !rest.is_empty() {
        sentences.push(rest.to_string());
    }

    sentences
}

/// True when the terminator at `i` ends a sentence.
fn is_boundary(chars: &[char], i: usize) -> bool {
    // A terminator run ends at its last character.
    match chars.get(i + 1) {
        Some(next) if TERMINATORS.contains(next) => return false,
        Some(next) if TRAILING_CLOSERS.contains(next) => {}
        Some(next) if !next.is_whitespace() => return false,
        _ => {}
    }

    if chars[i] == '.' {
        // Decimal point.
        if i > 0
            && i + 1 < chars.len()
            && chars[i - 1].is_ascii_digit()
            && chars[i + 1].is_ascii_digit()
        {
            return false;
        }
        // Word directly before the period.
        let mut start = i;
        while start > 0 && chars[start - 1].is_alphabetic() {
            start -= 1;
        }
        let word: String = chars[start..i].iter().collect();
        if word.chars().count() == 1 {
            return false;
        }
        let lowered = word.to_lowercase();
        if ABBREVIATIONS.contains(&lowered.as_str()) {
            return false;
        }
        // A lowercase continuation marks an ellipsis or missed abbreviation.
        let mut next = i + 1;
        while next < chars.len() && chars[next].is_whitespace() {
            next += 1;
        }
        if chars.get(next).is_some_and(|c| c.is_lowercase()) {
            return false;
        }
    }

    true
}

/// Lowercased word tokens of the text.
#[must_use]
pub fn words_lower(text: &str) -> Vec<String> {
    patterns::WORD
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}
