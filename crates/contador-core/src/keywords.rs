//! Keyword tracking.
//!
//! A keyword list is an ordered, duplicate-free sequence of trimmed,
//! non-empty strings. [`count_keywords`] reports how often each one occurs
//! in a text as a whole word, ignoring case.

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How keyword text is turned into a match pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum KeywordMatching {
    /// Match the keyword text literally (`.` is a dot, `*` is an asterisk).
    #[default]
    Literal,
    /// Treat the keyword as a regular expression. Keywords that fail to
    /// compile match nothing.
    Pattern,
}

impl KeywordMatching {
    /// Returns the mode as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Pattern => "pattern",
        }
    }
}

impl std::fmt::Display for KeywordMatching {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A keyword and its whole-word occurrences in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordCount {
    /// The keyword as entered.
    pub word: String,
    /// Non-overlapping, case-insensitive whole-word matches.
    pub count: usize,
}

/// Append `raw` (trimmed) to `list` unless it is blank or already present.
///
/// Presence is an exact, case-sensitive comparison. The input is never
/// modified; a copy is returned either way.
pub fn add_keyword(list: &[String], raw: &str) -> Vec<String> {
    let keyword = crate::text::trim_space(raw);
    let mut out = list.to_vec();
    if !keyword.is_empty() && !list.iter().any(|k| k == keyword) {
        out.push(keyword.to_string());
    }
    out
}

/// Count every keyword in `text`, matching keyword text literally.
pub fn count_keywords(keywords: &[String], text: &str) -> Vec<KeywordCount> {
    count_keywords_with(keywords, text, KeywordMatching::Literal)
}

/// Count every keyword in `text` using the given matching mode.
///
/// Output order follows `keywords`. A keyword with no matches, or one whose
/// pattern does not compile, reports a count of zero.
#[tracing::instrument(skip(keywords, text), fields(keywords = keywords.len(), text_len = text.len()))]
pub fn count_keywords_with(
    keywords: &[String],
    text: &str,
    matching: KeywordMatching,
) -> Vec<KeywordCount> {
    keywords
        .iter()
        .map(|word| KeywordCount {
            word: word.clone(),
            count: count_one(word, text, matching),
        })
        .collect()
}

fn count_one(keyword: &str, text: &str, matching: KeywordMatching) -> usize {
    let body = match matching {
        KeywordMatching::Literal => regex::escape(keyword),
        KeywordMatching::Pattern => keyword.to_string(),
    };
    match Regex::new(&format!(r"(?i)\b(?:{body})\b")) {
        Ok(re) => re.find_iter(text).count(),
        Err(err) => {
            tracing::warn!(keyword, error = %err, "keyword pattern does not compile");
            0
        }
    }
}
