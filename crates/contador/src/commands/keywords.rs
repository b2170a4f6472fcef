//! Keywords command: whole-word, case-insensitive occurrence counts.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use contador_core::config::Config;
use contador_core::{KeywordCount, KeywordMatching, count_keywords_with};
use owo_colors::Style;
use serde::Serialize;
use tracing::{debug, instrument};

use super::{KeywordArgs, paint};

/// Arguments for the `keywords` subcommand.
#[derive(Args, Debug, Default)]
pub struct KeywordsArgs {
    /// File to scan (`-` or omitted reads stdin).
    pub file: Option<Utf8PathBuf>,

    #[command(flatten)]
    pub keywords: KeywordArgs,

    /// Fail if any keyword does not occur.
    #[arg(long)]
    pub require_all: bool,
}

#[derive(Serialize)]
struct KeywordsReport<'a> {
    source: &'a str,
    matching: KeywordMatching,
    keywords: Vec<KeywordCount>,
}

/// Count each keyword in a file or stdin.
#[instrument(name = "cmd_keywords", skip_all, fields(source))]
pub fn cmd_keywords(
    args: KeywordsArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let source = super::source_name(args.file.as_deref());
    tracing::Span::current().record("source", source);

    let keywords = args.keywords.resolve(config);
    if keywords.is_empty() {
        bail!("no keywords given; pass -k WORD or set `keywords` in configuration");
    }

    let content = super::read_input(args.file.as_deref(), max_input)?;
    let matching = args.keywords.matching(config);
    debug!(count = keywords.len(), %matching, "executing keywords command");

    let report = KeywordsReport {
        source,
        matching,
        keywords: count_keywords_with(&keywords, &content, matching),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", paint(report.source, Style::new().bold()));
        for kw in &report.keywords {
            if kw.count == 0 {
                println!("  {} {}", kw.word, paint("0", Style::new().yellow()));
            } else {
                println!("  {} {}", kw.word, paint(kw.count, Style::new().green()));
            }
        }
    }

    if args.require_all {
        let missing: Vec<&str> = report
            .keywords
            .iter()
            .filter(|kw| kw.count == 0)
            .map(|kw| kw.word.as_str())
            .collect();
        if !missing.is_empty() {
            bail!("{source}: keywords not found: {}", missing.join(", "));
        }
    }

    Ok(())
}
