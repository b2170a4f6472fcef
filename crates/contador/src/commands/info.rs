//! Info command implementation

use clap::Args;
use contador_core::config::{Config, ConfigSources, user_config_dir};
use contador_core::{DEFAULT_TOP_WORDS, WordClass};
use owo_colors::Style;
use serde::Serialize;
use tracing::{debug, instrument};

use super::paint;

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_config_dir: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    excluded_classes: Vec<WordClass>,
    keywords: Vec<String>,
    keyword_matching: String,
    top_words: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let max_input_bytes = if config.disable_input_limit {
            None
        } else {
            Some(
                config
                    .max_input_bytes
                    .unwrap_or(contador_core::DEFAULT_MAX_INPUT_BYTES),
            )
        };
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            user_config_dir: user_config_dir().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            excluded_classes: config.exclusions.active_classes(),
            keywords: config.keywords.clone(),
            keyword_matching: config.keyword_matching.as_str().to_string(),
            top_words: config.top_words.unwrap_or(DEFAULT_TOP_WORDS),
            max_input_bytes,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let pkg = &full_info.package;
    println!(
        "{} {}",
        paint(pkg.name, Style::new().bold()),
        paint(pkg.version, Style::new().green()),
    );
    if !pkg.description.is_empty() {
        println!("{}", pkg.description);
    }
    if !pkg.license.is_empty() {
        println!("{}: {}", paint("License", Style::new().dimmed()), pkg.license);
    }

    let cfg = &full_info.config;
    println!();
    println!("{}", paint("Configuration", Style::new().bold().underline()));
    match cfg.config_file {
        Some(ref path) => {
            println!(
                "{}: {}",
                paint("Config file", Style::new().dimmed()),
                paint(path, Style::new().cyan()),
            );
        }
        None => {
            println!(
                "{}: {}",
                paint("Config file", Style::new().dimmed()),
                paint("none loaded", Style::new().yellow()),
            );
        }
    }
    print_opt("User config dir", &cfg.user_config_dir);
    println!("{}: {}", paint("Log level", Style::new().dimmed()), cfg.log_level);
    print_opt("Log directory", &cfg.log_dir);

    println!();
    println!("{}", paint("Analysis", Style::new().bold().underline()));
    let excluded: Vec<&str> = cfg.excluded_classes.iter().map(|c| c.as_str()).collect();
    if excluded.is_empty() {
        println!(
            "{}: {}",
            paint("Excluded classes", Style::new().dimmed()),
            paint("none", Style::new().yellow()),
        );
    } else {
        println!("{}: {}", paint("Excluded classes", Style::new().dimmed()), excluded.join(", "));
    }
    if cfg.keywords.is_empty() {
        println!(
            "{}: {}",
            paint("Keywords", Style::new().dimmed()),
            paint("(not set)", Style::new().dimmed()),
        );
    } else {
        println!("{}: {}", paint("Keywords", Style::new().dimmed()), cfg.keywords.join(", "));
    }
    println!("{}: {}", paint("Keyword matching", Style::new().dimmed()), cfg.keyword_matching);
    println!("{}: {}", paint("Top words", Style::new().dimmed()), cfg.top_words);
    match cfg.max_input_bytes {
        Some(max) => println!("{}: {max} bytes", paint("Input limit", Style::new().dimmed())),
        None => {
            println!(
                "{}: {}",
                paint("Input limit", Style::new().dimmed()),
                paint("disabled", Style::new().yellow()),
            );
        }
    }

    Ok(())
}

/// Print an optional value or "(not set)".
fn print_opt<T: std::fmt::Display>(label: &str, value: &Option<T>) {
    match value {
        Some(v) => println!("{}: {}", paint(label, Style::new().dimmed()), v),
        None => {
            println!(
                "{}: {}",
                paint(label, Style::new().dimmed()),
                paint("(not set)", Style::new().dimmed()),
            );
        }
    }
}
