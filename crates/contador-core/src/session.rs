//! Stateful analysis session.
//!
//! [`Session`] owns the mutable inputs (text, exclusion flags, keyword list,
//! and the pending keyword entry) and keeps every derived value current.
//! Each mutating method recomputes the metrics snapshot and keyword counts
//! before it returns, so readers never observe stale results.

use crate::exclusion::{ExclusionConfig, WordClass, excluded_words};
use crate::keywords::{self, KeywordCount, KeywordMatching};
use crate::metrics::{self, DEFAULT_TOP_WORDS, MetricsSnapshot};

/// Inputs plus the values derived from them.
#[derive(Debug, Clone)]
pub struct Session {
    text: String,
    exclusions: ExclusionConfig,
    matching: KeywordMatching,
    top_words: usize,
    keywords: Vec<String>,
    keyword_input: String,
    metrics: MetricsSnapshot,
    keyword_counts: Vec<KeywordCount>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ExclusionConfig::default(), KeywordMatching::default())
    }
}

impl Session {
    /// Create an empty session.
    pub fn new(exclusions: ExclusionConfig, matching: KeywordMatching) -> Self {
        Self {
            text: String::new(),
            exclusions,
            matching,
            top_words: DEFAULT_TOP_WORDS,
            keywords: Vec::new(),
            keyword_input: String::new(),
            metrics: metrics::analyze("", &excluded_words(&exclusions)),
            keyword_counts: Vec::new(),
        }
    }

    /// Report up to `top_words` content words instead of the default five.
    #[must_use]
    pub fn with_top_words(mut self, top_words: usize) -> Self {
        self.top_words = top_words;
        self.recompute();
        self
    }

    /// Replace the text wholesale.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.recompute();
    }

    /// Replace every exclusion flag at once.
    pub fn set_exclusions(&mut self, exclusions: ExclusionConfig) {
        self.exclusions = exclusions;
        self.recompute();
    }

    /// Flip the exclusion flag for one word class.
    pub fn toggle(&mut self, class: WordClass) {
        self.exclusions.toggle(class);
        self.recompute();
    }

    /// Change how keywords are matched.
    pub fn set_matching(&mut self, matching: KeywordMatching) {
        self.matching = matching;
        self.recompute();
    }

    /// Replace the pending keyword entry. Does not touch the keyword list.
    pub fn set_keyword_input(&mut self, input: impl Into<String>) {
        self.keyword_input = input.into();
    }

    /// Add the pending entry to the keyword list, then clear the entry.
    ///
    /// The entry is cleared even when nothing was added (blank or duplicate).
    /// Returns `true` if the list grew.
    pub fn submit_keyword(&mut self) -> bool {
        let input = std::mem::take(&mut self.keyword_input);
        self.add_keyword(&input)
    }

    /// Add `raw` to the keyword list. Returns `true` if the list grew.
    pub fn add_keyword(&mut self, raw: &str) -> bool {
        let before = self.keywords.len();
        self.keywords = keywords::add_keyword(&self.keywords, raw);
        let added = self.keywords.len() > before;
        if added {
            tracing::debug!(keyword = raw.trim(), "keyword added");
        }
        self.recompute();
        added
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current exclusion flags.
    pub const fn exclusions(&self) -> &ExclusionConfig {
        &self.exclusions
    }

    /// Current keyword matching mode.
    pub const fn matching(&self) -> KeywordMatching {
        self.matching
    }

    /// Keywords in insertion order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Pending keyword entry.
    pub fn keyword_input(&self) -> &str {
        &self.keyword_input
    }

    /// Metrics for the current text and exclusions.
    pub const fn metrics(&self) -> &MetricsSnapshot {
        &self.metrics
    }

    /// Keyword counts for the current text, in keyword order.
    pub fn keyword_counts(&self) -> &[KeywordCount] {
        &self.keyword_counts
    }

    fn recompute(&mut self) {
        let excluded = excluded_words(&self.exclusions);
        self.metrics = metrics::analyze_with_limit(&self.text, &excluded, self.top_words);
        self.keyword_counts =
            keywords::count_keywords_with(&self.keywords, &self.text, self.matching);
    }
}
