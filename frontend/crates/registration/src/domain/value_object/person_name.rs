//! Letters-only rule for personal names
//!
//! Accepts Latin letters, including accented ones (á, é, ñ, ü, ...), and
//! whitespace. Input is NFD-decomposed first so precomposed and combining
//! spellings of the same letter are treated alike.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Whether `input` contains only letters and whitespace
///
/// A combining mark is only accepted directly after a letter (or another
/// mark on that letter). Empty input is accepted; presence is checked by
/// the required rule.
pub fn is_letters_only(input: &str) -> bool {
    let mut after_letter = false;

    for c in input.nfd() {
        if c.is_ascii_alphabetic() {
            after_letter = true;
        } else if is_combining_mark(c) {
            if !after_letter {
                return false;
            }
        } else if c.is_whitespace() {
            after_letter = false;
        } else {
            return false;
        }
    }

    true
}
