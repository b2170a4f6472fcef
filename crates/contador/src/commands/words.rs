//! Words command: show which closed-class words are left out of the ranking.

use std::collections::BTreeMap;

use clap::Args;
use contador_core::config::Config;
use contador_core::{WordClass, excluded_words};
use owo_colors::Style;
use tracing::{debug, instrument};

use super::{ExclusionArgs, paint};

/// Arguments for the `words` subcommand.
#[derive(Args, Debug, Default)]
pub struct WordsArgs {
    /// Show a single word class, whether or not it is excluded.
    #[arg(long, value_enum, value_name = "CLASS", conflicts_with_all = ["keep", "exclude_all", "keep_all"])]
    pub class: Option<WordClass>,

    /// Print the merged, sorted set instead of grouping by class.
    #[arg(long)]
    pub merged: bool,

    #[command(flatten)]
    pub exclusions: ExclusionArgs,
}

/// List excluded words for the active configuration.
#[instrument(name = "cmd_words", skip_all)]
pub fn cmd_words(args: WordsArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    if let Some(class) = args.class {
        debug!(%class, "listing one word class");
        let words = class.words();
        if global_json {
            println!("{}", serde_json::to_string_pretty(words)?);
        } else {
            print_class(class, words);
        }
        return Ok(());
    }

    let exclusions = args.exclusions.resolve(config.exclusions);
    let classes = exclusions.active_classes();
    debug!(?classes, merged = args.merged, "executing words command");

    if args.merged {
        let mut words: Vec<&str> = excluded_words(&exclusions).into_iter().collect();
        words.sort_unstable();
        if global_json {
            println!("{}", serde_json::to_string_pretty(&words)?);
        } else {
            for word in words {
                println!("{word}");
            }
        }
        return Ok(());
    }

    if global_json {
        let grouped: BTreeMap<&str, &[&str]> = classes
            .iter()
            .map(|class| (class.as_str(), class.words()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&grouped)?);
        return Ok(());
    }

    if classes.is_empty() {
        println!("{}", paint("No word classes are excluded.", Style::new().yellow()));
        return Ok(());
    }
    for class in classes {
        print_class(class, class.words());
    }
    Ok(())
}

fn print_class(class: WordClass, words: &[&str]) {
    println!("{} ({})", paint(class.as_str(), Style::new().bold()), words.len());
    println!("  {}", paint(words.join(", "), Style::new().dimmed()));
}
