//! Analyze command: counts, keyword occurrences, and the content-word ranking.

use camino::Utf8PathBuf;
use clap::Args;
use contador_core::config::Config;
use contador_core::{DEFAULT_TOP_WORDS, KeywordCount, MetricsSnapshot, Session, WordClass};
use owo_colors::Style;
use serde::Serialize;
use tracing::{debug, instrument};

use super::{ExclusionArgs, KeywordArgs, paint};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// File to analyze (`-` or omitted reads stdin).
    pub file: Option<Utf8PathBuf>,

    /// Number of content words to rank.
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    #[command(flatten)]
    pub exclusions: ExclusionArgs,

    #[command(flatten)]
    pub keywords: KeywordArgs,
}

#[derive(Serialize)]
struct AnalyzeReport<'a> {
    source: &'a str,
    #[serde(flatten)]
    metrics: &'a MetricsSnapshot,
    excluded_classes: Vec<WordClass>,
    keywords: &'a [KeywordCount],
}

/// Run the full analysis on a file or stdin.
#[instrument(name = "cmd_analyze", skip_all, fields(source))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let source = super::source_name(args.file.as_deref());
    tracing::Span::current().record("source", source);

    let content = super::read_input(args.file.as_deref(), max_input)?;

    let exclusions = args.exclusions.resolve(config.exclusions);
    let matching = args.keywords.matching(config);
    let top = args
        .top
        .or(config.top_words)
        .unwrap_or(DEFAULT_TOP_WORDS);
    debug!(
        excluded = ?exclusions.active_classes(),
        %matching,
        top,
        "executing analyze command"
    );

    let mut session = Session::new(exclusions, matching).with_top_words(top);
    for keyword in args.keywords.resolve(config) {
        session.add_keyword(&keyword);
    }
    session.set_text(content);

    let report = AnalyzeReport {
        source,
        metrics: session.metrics(),
        excluded_classes: session.exclusions().active_classes(),
        keywords: session.keyword_counts(),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &AnalyzeReport<'_>) {
    let m = report.metrics;
    println!("{}", paint(report.source, Style::new().bold()));
    println!("  {} {}", paint("Characters:", Style::new().cyan()), m.char_count);
    println!("  {} {}", paint("Words:", Style::new().cyan()), m.word_count);
    println!("  {} {}", paint("Sentences:", Style::new().cyan()), m.sentence_count);
    println!("  {} {}", paint("Paragraphs:", Style::new().cyan()), m.paragraph_count);
    println!(
        "  {} {:.2}",
        paint("Average word length:", Style::new().cyan()),
        m.average_word_length,
    );
    if m.longest_word.word.is_empty() {
        println!(
            "  {} {}",
            paint("Longest word:", Style::new().cyan()),
            paint("(none)", Style::new().dimmed()),
        );
    } else {
        println!(
            "  {} {} ({} characters)",
            paint("Longest word:", Style::new().cyan()),
            m.longest_word.word,
            m.longest_word.length
        );
    }

    if !report.keywords.is_empty() {
        println!("\n  {}", paint("Keywords:", Style::new().cyan()));
        for kw in report.keywords {
            let count = if kw.count == 0 {
                paint(kw.count, Style::new().dimmed())
            } else {
                paint(kw.count, Style::new().green())
            };
            println!("    {}: {}", kw.word, count);
        }
    }

    println!("\n  {}", paint("Top words:", Style::new().cyan()));
    if m.top_words.is_empty() {
        println!("    {}", paint("(none)", Style::new().dimmed()));
    }
    for (rank, entry) in m.top_words.iter().enumerate() {
        println!("    {}. {} ({})", rank + 1, entry.word, entry.count);
    }

    if report.excluded_classes.is_empty() {
        println!(
            "\n  {} {}",
            paint("Excluding:", Style::new().dimmed()),
            paint("nothing", Style::new().dimmed()),
        );
    } else {
        let names: Vec<&str> = report
            .excluded_classes
            .iter()
            .map(|c| c.as_str())
            .collect();
        println!(
            "\n  {} {}",
            paint("Excluding:", Style::new().dimmed()),
            paint(names.join(", "), Style::new().dimmed()),
        );
    }
}
