//! Lexical classification: which closed-class words to leave out of the
//! content-word ranking.
//!
//! [`ExclusionConfig`] carries one flag per [`WordClass`]; [`excluded_words`]
//! turns the active flags into the set the metrics engine filters against.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::word_lists::{COMMON_ADVERBS, CONJUNCTIONS, DETERMINERS, PREPOSITIONS, PRONOUNS};

/// A closed class of Spanish words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum WordClass {
    /// Articles, possessives, demonstratives, quantifiers (el, mi, este, ...).
    Determiners,
    /// Prepositions (a, con, de, en, ...).
    Prepositions,
    /// Pronouns (yo, él, que, alguien, ...).
    Pronouns,
    /// Common adverbs (aquí, hoy, muy, ...).
    Adverbs,
    /// Conjunctions (y, o, pero, porque, ...).
    Conjunctions,
}

impl WordClass {
    /// Every class, in the order the flags are declared.
    pub const ALL: [Self; 5] = [
        Self::Determiners,
        Self::Prepositions,
        Self::Pronouns,
        Self::Adverbs,
        Self::Conjunctions,
    ];

    /// The fixed word list for this class.
    pub const fn words(self) -> &'static [&'static str] {
        match self {
            Self::Determiners => DETERMINERS,
            Self::Prepositions => PREPOSITIONS,
            Self::Pronouns => PRONOUNS,
            Self::Adverbs => COMMON_ADVERBS,
            Self::Conjunctions => CONJUNCTIONS,
        }
    }

    /// Returns the class name as a lowercase string slice.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Determiners => "determiners",
            Self::Prepositions => "prepositions",
            Self::Pronouns => "pronouns",
            Self::Adverbs => "adverbs",
            Self::Conjunctions => "conjunctions",
        }
    }
}

impl std::fmt::Display for WordClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which word classes are excluded from the content-word ranking.
///
/// Every flag defaults to `true`. Flags are independent; any subset may be
/// active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct ExclusionConfig {
    /// Exclude determiners.
    pub determiners: bool,
    /// Exclude prepositions.
    pub prepositions: bool,
    /// Exclude pronouns.
    pub pronouns: bool,
    /// Exclude common adverbs.
    pub adverbs: bool,
    /// Exclude conjunctions.
    pub conjunctions: bool,
}

impl Default for ExclusionConfig {
    fn default() -> Self {
        Self::all()
    }
}

impl ExclusionConfig {
    /// Exclude every class.
    pub const fn all() -> Self {
        Self {
            determiners: true,
            prepositions: true,
            pronouns: true,
            adverbs: true,
            conjunctions: true,
        }
    }

    /// Exclude nothing; every token counts as a content word.
    pub const fn none() -> Self {
        Self {
            determiners: false,
            prepositions: false,
            pronouns: false,
            adverbs: false,
            conjunctions: false,
        }
    }

    /// Whether `class` is currently excluded.
    pub const fn is_excluded(&self, class: WordClass) -> bool {
        match class {
            WordClass::Determiners => self.determiners,
            WordClass::Prepositions => self.prepositions,
            WordClass::Pronouns => self.pronouns,
            WordClass::Adverbs => self.adverbs,
            WordClass::Conjunctions => self.conjunctions,
        }
    }

    /// Set the flag for `class`.
    pub const fn set(&mut self, class: WordClass, excluded: bool) {
        match class {
            WordClass::Determiners => self.determiners = excluded,
            WordClass::Prepositions => self.prepositions = excluded,
            WordClass::Pronouns => self.pronouns = excluded,
            WordClass::Adverbs => self.adverbs = excluded,
            WordClass::Conjunctions => self.conjunctions = excluded,
        }
    }

    /// Flip the flag for `class`.
    pub const fn toggle(&mut self, class: WordClass) {
        self.set(class, !self.is_excluded(class));
    }

    /// Classes whose flag is on, in declaration order.
    pub fn active_classes(&self) -> Vec<WordClass> {
        WordClass::ALL
            .into_iter()
            .filter(|c| self.is_excluded(*c))
            .collect()
    }
}

/// Union of the word lists whose flag is active.
///
/// Returns the empty set when every flag is off.
#[tracing::instrument(level = "trace", skip_all)]
pub fn excluded_words(config: &ExclusionConfig) -> HashSet<&'static str> {
    let words: HashSet<&'static str> = WordClass::ALL
        .into_iter()
        .filter(|class| config.is_excluded(*class))
        .flat_map(|class| class.words().iter().copied())
        .collect();
    tracing::trace!(count = words.len(), "built excluded word set");
    words
}
