//! Command implementations.

use std::fmt::Display;
use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;
use clap::Args;
use contador_core::config::Config;
use contador_core::{ExclusionConfig, KeywordMatching, WordClass, add_keyword};
use owo_colors::{OwoColorize, Stream, Style};

pub mod analyze;
pub mod info;
pub mod keywords;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod words;

/// Word-class overrides shared by commands that rank content words.
#[derive(Args, Debug, Default, Clone)]
pub struct ExclusionArgs {
    /// Word classes to keep in the ranking (comma-separated).
    #[arg(long, value_delimiter = ',', value_enum, value_name = "CLASS")]
    pub keep: Vec<WordClass>,

    /// Exclude every word class, ignoring configuration.
    #[arg(long, conflicts_with = "keep_all")]
    pub exclude_all: bool,

    /// Keep every word class, ignoring configuration.
    #[arg(long)]
    pub keep_all: bool,
}

impl ExclusionArgs {
    /// Apply the flags on top of the configured exclusions.
    ///
    /// `--exclude-all` / `--keep-all` replace the base; `--keep` is applied
    /// afterwards, so `--exclude-all --keep pronouns` excludes four classes.
    pub fn resolve(&self, base: ExclusionConfig) -> ExclusionConfig {
        let mut config = if self.exclude_all {
            ExclusionConfig::all()
        } else if self.keep_all {
            ExclusionConfig::none()
        } else {
            base
        };
        for &class in &self.keep {
            config.set(class, false);
        }
        config
    }
}

/// Keyword flags shared by `analyze` and `keywords`.
#[derive(Args, Debug, Default, Clone)]
pub struct KeywordArgs {
    /// Keyword to count (repeatable). Added after configured keywords.
    #[arg(short = 'k', long = "keyword", value_name = "WORD")]
    pub keywords: Vec<String>,

    /// Ignore keywords from configuration.
    #[arg(long)]
    pub no_config_keywords: bool,

    /// Treat keywords as regular expressions instead of literal text.
    #[arg(long, conflicts_with = "literal_keywords")]
    pub pattern_keywords: bool,

    /// Match keywords as literal text, overriding configuration.
    #[arg(long)]
    pub literal_keywords: bool,
}

impl KeywordArgs {
    /// Ordered keyword list: configured keywords first, then `-k` values.
    ///
    /// Every entry passes through [`add_keyword`], so blanks and duplicates
    /// are dropped the same way they are for interactive entry.
    pub fn resolve(&self, config: &Config) -> Vec<String> {
        let configured: &[String] = if self.no_config_keywords {
            &[]
        } else {
            &config.keywords
        };
        configured
            .iter()
            .chain(&self.keywords)
            .fold(Vec::new(), |list, raw| add_keyword(&list, raw))
    }

    /// Matching mode: flags, then configuration.
    pub const fn matching(&self, config: &Config) -> KeywordMatching {
        if self.pattern_keywords {
            KeywordMatching::Pattern
        } else if self.literal_keywords {
            KeywordMatching::Literal
        } else {
            config.keyword_matching
        }
    }
}

/// Display name for an input source.
pub fn source_name(path: Option<&Utf8Path>) -> &str {
    match path {
        Some(p) if p.as_str() != "-" => p.as_str(),
        _ => "<stdin>",
    }
}

/// Read a file (or stdin for `-` / no path) and validate its size against
/// the configured limit.
pub fn read_input(path: Option<&Utf8Path>, max_bytes: Option<usize>) -> anyhow::Result<String> {
    match path {
        Some(p) if p.as_str() != "-" => read_input_file(p, max_bytes),
        _ => read_stdin(max_bytes),
    }
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    read_limited(std::io::stdin().lock(), max_bytes)
}

/// Read `reader` to a string, failing once it yields more than `max_bytes`.
fn read_limited<R: Read>(reader: R, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut content = String::new();
    match max_bytes {
        Some(max) => {
            // One byte past the limit is enough to know it was exceeded.
            reader
                .take((max as u64).saturating_add(1))
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            if content.len() > max {
                anyhow::bail!("input too large: stdin exceeds {max} bytes");
            }
        }
        None => {
            let mut reader = reader;
            reader
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
        }
    }
    Ok(content)
}

/// Style `value` for stdout, honoring `--color` and terminal detection.
pub fn paint<T: Display>(value: T, style: Style) -> String {
    value
        .if_supports_color(Stream::Stdout, |v| v.style(style))
        .to_string()
}
