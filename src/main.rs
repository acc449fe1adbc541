//! Command line front end: `word-splitter N_WORDS INPUT_FILENAME OUTPUT_DIR`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use env_logger::Env;
use log::LevelFilter;
use word_splitter::{split_file, ChunkConfig, LogReporter, WordSplitter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Split text into parts.", long_about = None)]
struct Cli {
    /// Each part has this many words
    #[arg(value_name = "N_WORDS")]
    n_words: usize,

    /// Input text filename
    #[arg(value_name = "INPUT_FILENAME")]
    input_filename: PathBuf,

    /// Output directory, which must already exist
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Try to end parts on a sentence boundary
    #[arg(long)]
    preserve_sentences: bool,

    /// How many of the last words of a full part are searched for a sentence end
    #[arg(long, value_name = "WORDS", requires = "preserve_sentences")]
    sentence_window: Option<usize>,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, action = ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let mut config = ChunkConfig::new(cli.n_words)
        .context("invalid N_WORDS")?
        .with_preserve_sentences(cli.preserve_sentences);
    if let Some(window) = cli.sentence_window {
        config = config
            .with_sentence_window(window)
            .context("invalid --sentence-window")?;
    }

    let splitter = WordSplitter::new(config);
    split_file(
        &cli.input_filename,
        &cli.output_dir,
        &splitter,
        &LogReporter,
    )
    .with_context(|| format!("unable to split {}", cli.input_filename.display()))?;

    Ok(())
}

fn init_logging(verbose: u8, quiet: u8) {
    let level = match (quiet, verbose) {
        (0, 0) => LevelFilter::Info,
        (0, 1) => LevelFilter::Debug,
        (0, _) => LevelFilter::Trace,
        (1, _) => LevelFilter::Warn,
        _ => LevelFilter::Error,
    };

    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp_millis();
    if verbose > 0 || quiet > 0 {
        builder.filter_level(level);
    }
    builder.init();
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, CommandFactory};

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_positionals_and_flag() {
        let cli = Cli::try_parse_from([
            "word-splitter",
            "1000",
            "text-french.txt",
            "out",
            "--preserve-sentences",
        ])
        .unwrap();
        assert_eq!(cli.n_words, 1000);
        assert_eq!(cli.input_filename, PathBuf::from("text-french.txt"));
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert!(cli.preserve_sentences);
        assert_eq!(cli.sentence_window, None);
    }

    #[test]
    fn preserve_sentences_defaults_off() {
        let cli = Cli::try_parse_from(["word-splitter", "5", "in.txt", "out"]).unwrap();
        assert!(!cli.preserve_sentences);
    }

    #[test]
    fn rejects_non_integer_word_count() {
        let err = Cli::try_parse_from(["word-splitter", "many", "in.txt", "out"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn sentence_window_requires_preserve_sentences() {
        let err = Cli::try_parse_from([
            "word-splitter",
            "5",
            "in.txt",
            "out",
            "--sentence-window",
            "2",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
