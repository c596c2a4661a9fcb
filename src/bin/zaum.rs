//! Command-line entry point.
//!
//! ```bash
//! # Canonicalize a raw corpus
//! zaum normalize --input-file raw.txt --output-file corpus.txt
//!
//! # Sample verses from the normalized corpus
//! zaum verse --input-file corpus.txt --output-file verses.txt --sentences 60
//! ```
//!
//! All file I/O lives here; the library stays pure.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use zaum::{generate_verses, normalize, NormalizeConfig, VerseConfig, ZaumError};

#[derive(Parser)]
#[command(name = "zaum", version)]
#[command(about = "Normalize raw text and sample stylized verses from it")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Canonicalize raw text into a clean lowercase token stream.
    Normalize {
        /// Source text, read fully into memory as UTF-8.
        #[arg(long, default_value = "input.txt")]
        input_file: PathBuf,
        /// Destination for normalized text; overwritten if present.
        #[arg(long, default_value = "output.txt")]
        output_file: PathBuf,
        /// Keep the original casing instead of lowercasing.
        #[arg(long)]
        keep_case: bool,
        /// Apply Unicode NFKC normalization before the pipeline.
        #[arg(long)]
        nfkc: bool,
    },
    /// Sample sentences from a normalized corpus and render verses.
    Verse {
        /// Normalized corpus, as produced by `zaum normalize`.
        #[arg(long, default_value = "input.txt")]
        input_file: PathBuf,
        /// Destination for the rendered verses; overwritten if present.
        #[arg(long, default_value = "output.txt")]
        output_file: PathBuf,
        /// Minimum effective sentence length (alphanumeric words), inclusive.
        #[arg(long, default_value_t = 4)]
        min_sentence_len: usize,
        /// Maximum effective sentence length, inclusive.
        #[arg(long, default_value_t = 10)]
        max_sentence_len: usize,
        /// Number of output sentences.
        #[arg(long, default_value_t = 60)]
        sentences: usize,
        /// Sentences per stanza.
        #[arg(long, default_value_t = 6)]
        lines_per_verse: usize,
        /// Number of sentences drawn from the corpus before sampling.
        #[arg(long, default_value_t = 200)]
        pool_size: usize,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Command::Normalize {
            input_file,
            output_file,
            keep_case,
            nfkc,
        } => {
            let cfg = NormalizeConfig {
                lowercase: !keep_case,
                normalize_unicode: nfkc,
            };
            let text = read_input(&input_file)?;
            let normalized = normalize(&text, &cfg);
            write_output(&output_file, &normalized)?;
            tracing::info!(
                input = %input_file.display(),
                output = %output_file.display(),
                chars_in = text.chars().count(),
                chars_out = normalized.chars().count(),
                "normalized corpus written"
            );
        }
        Command::Verse {
            input_file,
            output_file,
            min_sentence_len,
            max_sentence_len,
            sentences,
            lines_per_verse,
            pool_size,
        } => {
            let cfg = VerseConfig {
                min_sentence_len,
                max_sentence_len,
                sentence_count: sentences,
                lines_per_verse,
                pool_size,
            };
            let text = read_input(&input_file)?;
            let mut rng = fastrand::Rng::new();
            let verses = generate_verses(&text, &cfg, &mut rng)?;
            write_output(&output_file, &verses)?;
            tracing::info!(
                input = %input_file.display(),
                output = %output_file.display(),
                sentences = cfg.sentence_count,
                "verses written"
            );
        }
    }
    Ok(())
}

/// Reads the whole input as UTF-8. Malformed input surfaces as the
/// `InvalidData` I/O error from `read_to_string` — fatal, nothing written.
fn read_input(path: &Path) -> Result<String, ZaumError> {
    fs::read_to_string(path).map_err(|source| ZaumError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

fn write_output(path: &Path, text: &str) -> Result<(), ZaumError> {
    fs::write(path, text).map_err(|source| ZaumError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
