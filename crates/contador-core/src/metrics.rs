//! Text metrics.
//!
//! [`analyze`] turns text plus an excluded-word set into a
//! [`MetricsSnapshot`]. It is a pure function: it keeps no state and never
//! fails, so empty or fully excluded input yields zeros and empty lists.

use std::collections::{HashMap, HashSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// Number of content words reported by [`analyze`].
pub const DEFAULT_TOP_WORDS: usize = 5;

/// Every metric derived from one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MetricsSnapshot {
    /// Characters in the raw text, whitespace included.
    pub char_count: usize,
    /// Whitespace-delimited tokens.
    pub word_count: usize,
    /// Non-blank fragments between runs of `.`, `!`, `?`.
    pub sentence_count: usize,
    /// Non-blank lines.
    pub paragraph_count: usize,
    /// Mean token length, rounded to two decimals. Zero when there are no words.
    pub average_word_length: f64,
    /// First token of maximal length.
    pub longest_word: LongestWord,
    /// Most frequent content words, highest count first.
    pub top_words: Vec<WordFrequency>,
}

/// The longest token and its length in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LongestWord {
    /// The token as it appears in the text.
    pub word: String,
    /// Length in characters.
    pub length: usize,
}

/// A lowercased content word and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordFrequency {
    /// Lowercased token, punctuation included.
    pub word: String,
    /// Occurrences in the text.
    pub count: usize,
}

/// Compute every metric for `text`, ranking the top five content words.
pub fn analyze(text: &str, excluded: &HashSet<&str>) -> MetricsSnapshot {
    analyze_with_limit(text, excluded, DEFAULT_TOP_WORDS)
}

/// Like [`analyze`], but report up to `top_n` content words.
#[tracing::instrument(skip(text, excluded), fields(text_len = text.len(), excluded = excluded.len()))]
pub fn analyze_with_limit(text: &str, excluded: &HashSet<&str>, top_n: usize) -> MetricsSnapshot {
    let words = text::split_words(text);
    let word_count = words.len();

    let total_len: usize = words.iter().map(|w| text::char_len(w)).sum();
    let average_word_length = if word_count == 0 {
        0.0
    } else {
        round2(total_len as f64 / word_count as f64)
    };

    let snapshot = MetricsSnapshot {
        char_count: text::char_len(text),
        word_count,
        sentence_count: text::split_sentences(text).len(),
        paragraph_count: text::split_paragraphs(text).len(),
        average_word_length,
        longest_word: longest_word(&words),
        top_words: top_content_words(&words, excluded, top_n),
    };

    tracing::debug!(
        words = snapshot.word_count,
        sentences = snapshot.sentence_count,
        paragraphs = snapshot.paragraph_count,
        "analysis complete"
    );
    snapshot
}

/// Fold from the empty string, replacing only on a strictly longer token.
fn longest_word(words: &[&str]) -> LongestWord {
    words
        .iter()
        .fold(LongestWord::default(), |best, w| {
            let length = text::char_len(w);
            if length > best.length {
                LongestWord {
                    word: (*w).to_string(),
                    length,
                }
            } else {
                best
            }
        })
}

/// Count lowercased tokens not in `excluded`; ties keep first-seen order.
fn top_content_words(words: &[&str], excluded: &HashSet<&str>, top_n: usize) -> Vec<WordFrequency> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<WordFrequency> = Vec::new();

    for w in words {
        let lower = w.to_lowercase();
        if excluded.contains(lower.as_str()) {
            continue;
        }
        if let Some(&i) = index.get(&lower) {
            counts[i].count += 1;
        } else {
            index.insert(lower.clone(), counts.len());
            counts.push(WordFrequency {
                word: lower,
                count: 1,
            });
        }
    }

    // Stable: equal counts stay in insertion order.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(top_n);
    counts
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
