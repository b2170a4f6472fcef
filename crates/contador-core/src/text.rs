//! Text splitting.
//!
//! Word, sentence, and paragraph splitting for the metrics engine. None of
//! these strip punctuation: a token keeps whatever is attached to it.

use regex::Regex;
use std::sync::LazyLock;

/// One or more consecutive sentence terminators.
static SENTENCE_TERMINATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Whether `c` separates words.
///
/// This is the ECMAScript whitespace set: Unicode `White_Space` without
/// U+0085 (NEXT LINE), plus U+FEFF (byte order mark). A leading BOM is
/// therefore never glued to the first word, and NEL stays inside a token.
pub const fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// `s` with leading and trailing [`is_space`] characters removed.
pub fn trim_space(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// Split text into whitespace-delimited tokens.
///
/// Leading and trailing whitespace is ignored and runs of whitespace count
/// as a single separator, so no token is ever empty.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split(is_space).filter(|w| !w.is_empty()).collect()
}

/// Split text into sentence fragments.
///
/// Runs of `.`, `!`, and `?` act as one delimiter. Fragments that are blank
/// once trimmed are dropped; the rest are returned untrimmed.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_TERMINATORS
        .split(text)
        .filter(|s| !trim_space(s).is_empty())
        .collect()
}

/// Split text into paragraphs on single newlines, dropping blank lines.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split('\n')
        .filter(|p| !trim_space(p).is_empty())
        .collect()
}

/// Length of a string in characters (Unicode scalar values), not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
