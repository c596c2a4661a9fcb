use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by verse sampling and the CLI glue.
///
/// The normalization stages themselves are total functions and never fail.
#[derive(Debug, Error)]
pub enum ZaumError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("no sentences with effective length in {min}..={max} in the corpus")]
    EmptyCorpus { min: usize, max: usize },
    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
