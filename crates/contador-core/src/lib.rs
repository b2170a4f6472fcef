//! Core library for contador.
//!
//! A Spanish text counter and analyzer. Given free-form text it reports
//! character, word, sentence, and paragraph counts, average and longest word,
//! keyword occurrences, and the most frequent content words once closed-class
//! Spanish words (determiners, prepositions, pronouns, conjunctions, common
//! adverbs) are set aside.
//!
//! # Modules
//!
//! - [`exclusion`] - Word classes and the excluded-word set
//! - [`metrics`] - The metrics engine ([`analyze`])
//! - [`keywords`] - Keyword list maintenance and counting
//! - [`session`] - A state holder that recomputes on every change
//! - [`text`] - Word, sentence, and paragraph splitting
//! - [`word_lists`] - The fixed Spanish word tables
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use contador_core::{ExclusionConfig, add_keyword, analyze, count_keywords, excluded_words};
//!
//! let text = "El perro corre. El gato duerme.";
//! let metrics = analyze(text, &excluded_words(&ExclusionConfig::default()));
//! assert_eq!(metrics.word_count, 6);
//!
//! let keywords = add_keyword(&[], "perro");
//! assert_eq!(count_keywords(&keywords, text)[0].count, 1);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod exclusion;
pub mod keywords;
pub mod metrics;
pub mod session;
pub mod text;
pub mod word_lists;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult};
pub use exclusion::{ExclusionConfig, WordClass, excluded_words};
pub use keywords::{KeywordCount, KeywordMatching, add_keyword, count_keywords, count_keywords_with};
pub use metrics::{
    DEFAULT_TOP_WORDS, LongestWord, MetricsSnapshot, WordFrequency, analyze, analyze_with_limit,
};
pub use session::Session;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
