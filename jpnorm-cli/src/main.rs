//! jpnorm: normalize Japanese text from the command line
//!
//! With a positional argument the text is normalized once and printed as
//! `input:`/`normalized:`. With `--stdin` every line is normalized in parallel
//! and the results are written in input order.

mod config;

use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use jpnorm_engine::{TildeMode, normalize, normalize_for_dedup};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{Mode, OutputFormat, Settings};

/// Text normalized when no input is given.
const SAMPLE: &str = "ﾜｶﾞﾊｲは㈱である.  ㈴ＭＡＥはまだ迺";

/// Japanese text normalizer
#[derive(Parser, Debug)]
#[command(name = "jpnorm")]
#[command(about = "Normalize Japanese text (width, spaces, dashes, tildes)", long_about = None)]
struct Args {
    /// Text to normalize (default: built-in sample)
    #[arg(conflicts_with = "stdin")]
    text: Option<String>,

    /// Read lines from stdin and normalize each one
    #[arg(long)]
    stdin: bool,

    /// Path to a config file (default: user config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Shorten runs repeated more than N times (0 disables)
    #[arg(long, value_name = "N")]
    repeat: Option<usize>,

    /// Longest repeated unit considered by --repeat
    #[arg(long, value_name = "LEN")]
    max_repeat_unit: Option<usize>,

    /// How wave dashes and tildes are handled
    #[arg(long, value_enum)]
    tilde: Option<TildeArg>,

    /// Keep spaces between Japanese and Latin text
    #[arg(long)]
    keep_space: bool,

    /// Expand parenthesized ideographs such as ㈱
    #[arg(long)]
    parenthesized: bool,

    /// Use the dedup preset
    #[arg(long)]
    dedup: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Number of worker threads for --stdin (default: all CPUs)
    #[arg(long)]
    threads: Option<usize>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum TildeArg {
    Remove,
    Ignore,
    Normalize,
    Zenkaku,
}

impl From<TildeArg> for TildeMode {
    fn from(arg: TildeArg) -> Self {
        match arg {
            TildeArg::Remove => TildeMode::Remove,
            TildeArg::Ignore => TildeMode::Ignore,
            TildeArg::Normalize => TildeMode::Normalize,
            TildeArg::Zenkaku => TildeMode::Zenkaku,
        }
    }
}

#[derive(Debug, Serialize)]
struct Record<'a> {
    input: &'a str,
    normalized: String,
}

/// Layer command-line flags on top of the loaded settings.
fn apply_args(mut settings: Settings, args: &Args) -> Settings {
    let opts = &mut settings.normalize;
    if let Some(repeat) = args.repeat {
        opts.repeat = repeat;
    }
    if let Some(len) = args.max_repeat_unit {
        opts.max_repeat_unit_len = len;
    }
    if let Some(tilde) = args.tilde {
        opts.tilde = tilde.into();
    }
    if args.keep_space {
        opts.remove_space = false;
    }
    if args.parenthesized || (args.text.is_none() && !args.stdin) {
        opts.parenthesized_ideographs = true;
    }
    if args.dedup {
        settings.mode = Mode::Dedup;
    }
    if args.json {
        settings.output.format = OutputFormat::Json;
    }
    settings
}

fn run_one(settings: &Settings, text: &str) -> Result<String> {
    let normalized = match settings.mode {
        Mode::Normalize => normalize(text, &settings.normalize)?,
        Mode::Dedup => normalize_for_dedup(text, &settings.dedup)?,
    };
    Ok(normalized)
}

fn print_single(settings: &Settings, text: &str) -> Result<()> {
    let normalized = run_one(settings, text)?;
    match settings.output.format {
        OutputFormat::Text => {
            println!("input: {text}");
            println!("normalized: {normalized}");
        }
        OutputFormat::Json => {
            let record = Record {
                input: text,
                normalized,
            };
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }
    Ok(())
}

fn run_stdin(settings: &Settings) -> Result<()> {
    let lines: Vec<String> = io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<_>>()
        .context("failed to read stdin")?;
    info!("Normalizing {} line(s)", lines.len());

    let results: Vec<String> = lines
        .par_iter()
        .enumerate()
        .map(|(i, line)| run_one(settings, line).with_context(|| format!("line {}", i + 1)))
        .collect::<Result<_>>()?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for (line, normalized) in lines.iter().zip(results) {
        match settings.output.format {
            OutputFormat::Text => writeln!(out, "{normalized}")?,
            OutputFormat::Json => {
                let record = Record {
                    input: line,
                    normalized,
                };
                writeln!(out, "{}", serde_json::to_string(&record)?)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Default: info level, with --verbose: debug level
    let default_filter = if args.verbose {
        "jpnorm=debug,jpnorm_engine=debug"
    } else {
        "jpnorm=info,jpnorm_engine=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let settings = match &args.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    let settings = apply_args(settings, &args);
    debug!("Effective settings: {:?}", settings);

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads.max(1))
            .build_global()
            .ok(); // ignore error if already initialized
    }

    if args.stdin {
        return run_stdin(&settings);
    }

    let text = args.text.as_deref().unwrap_or(SAMPLE);
    print_single(&settings, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("jpnorm").chain(argv.iter().copied()))
    }

    #[test]
    fn test_sample_enables_expansion() {
        let args = parse(&[]);
        let settings = apply_args(Settings::default(), &args);
        assert!(settings.normalize.parenthesized_ideographs);
        assert_eq!(
            run_one(&settings, SAMPLE).unwrap(),
            "ワガハイは(株)である. (名)MAEはまだ迺"
        );
    }

    #[test]
    fn test_explicit_text_keeps_defaults() {
        let args = parse(&["ﾜｶﾞﾊｲは㈱である"]);
        let settings = apply_args(Settings::default(), &args);
        assert!(!settings.normalize.parenthesized_ideographs);
        assert_eq!(
            run_one(&settings, args.text.as_deref().unwrap()).unwrap(),
            "ワガハイは㈱である"
        );
    }

    #[test]
    fn test_flag_overrides() {
        let args = parse(&[
            "--repeat",
            "2",
            "--max-repeat-unit",
            "3",
            "--tilde",
            "zenkaku",
            "--keep-space",
            "--json",
            "x",
        ]);
        let settings = apply_args(Settings::default(), &args);
        assert_eq!(settings.normalize.repeat, 2);
        assert_eq!(settings.normalize.max_repeat_unit_len, 3);
        assert_eq!(settings.normalize.tilde, TildeMode::Zenkaku);
        assert!(!settings.normalize.remove_space);
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert_eq!(settings.mode, Mode::Normalize);
    }

    #[test]
    fn test_dedup_flag() {
        let args = parse(&["--dedup", "うおおおおおおおおおおおお〜〜！"]);
        let settings = apply_args(Settings::default(), &args);
        assert_eq!(settings.mode, Mode::Dedup);
        assert_eq!(
            run_one(&settings, args.text.as_deref().unwrap()).unwrap(),
            "うおおおおおおおお!"
        );
    }

    #[test]
    fn test_stdin_conflicts_with_text() {
        let result = Args::try_parse_from(["jpnorm", "--stdin", "text"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_input_too_large_surfaces_as_error() {
        let mut settings = Settings::default();
        settings.normalize.max_input_bytes = 1;
        assert!(run_one(&settings, "ab").is_err());
    }
}
