//! Character-level script classification for transliteration input.
//!
//! Callers typically detect the input's script first and only
//! transliterate text that is not already Latin.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Devanagari,
    Latin,
    /// Whitespace, digits, punctuation: shared by every script.
    Common,
    Other,
}

pub fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c) || ('\u{A8E0}'..='\u{A8FF}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn classify(c: char) -> Script {
    if is_devanagari(c) {
        Script::Devanagari
    } else if is_latin(c) {
        Script::Latin
    } else if c.is_whitespace() || c.is_ascii_digit() || c.is_ascii_punctuation() {
        Script::Common
    } else {
        Script::Other
    }
}

/// Majority script of `text`, ignoring Common units.
///
/// Returns `Common` for empty input or input with no script-bearing units.
pub fn dominant_script(text: &str) -> Script {
    let mut devanagari = 0usize;
    let mut latin = 0usize;
    let mut other = 0usize;

    for c in text.chars() {
        match classify(c) {
            Script::Devanagari => devanagari += 1,
            Script::Latin => latin += 1,
            Script::Other => other += 1,
            Script::Common => {}
        }
    }

    let max = devanagari.max(latin).max(other);
    if max == 0 {
        Script::Common
    } else if devanagari == max {
        Script::Devanagari
    } else if latin == max {
        Script::Latin
    } else {
        Script::Other
    }
}
