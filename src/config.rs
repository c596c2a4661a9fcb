//! Configuration types for normalization and verse sampling.
//!
//! CLI defaults live in the binary's clap attributes and are handed over as
//! explicit config structs; nothing in the library reads ambient state.
//!
//! Both structs are serde-compatible so a config snapshot can be logged or
//! stored next to the corpus it produced.

use serde::{Deserialize, Serialize};

use crate::error::ZaumError;

/// Configuration for the normalization pipeline.
///
/// ```rust
/// use zaum::NormalizeConfig;
///
/// let cfg = NormalizeConfig::default();
/// assert!(cfg.lowercase);
/// assert!(!cfg.normalize_unicode);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Apply locale-free Unicode lowercasing before the stages run.
    ///
    /// Default `true` — the verse sampler assumes a lowercased corpus and
    /// re-capitalizes line starts itself.
    pub lowercase: bool,

    /// Apply Unicode NFKC normalization before anything else.
    ///
    /// Off by default: the pipeline defines its own canonical forms for
    /// dots and dashes, and NFKC folds the `…` glyph back into three
    /// periods (which the ellipsis stage then re-collapses, so enabling
    /// this is safe, just rarely needed).
    pub normalize_unicode: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            normalize_unicode: false,
        }
    }
}

/// Configuration for verse sampling.
///
/// Defaults match the conventional corpus settings: sentences of 4–10
/// effective words, 60 output sentences in stanzas of 6, drawn through a
/// pool of 200.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerseConfig {
    /// Minimum effective sentence length (count of alphanumeric words),
    /// inclusive.
    pub min_sentence_len: usize,

    /// Maximum effective sentence length, inclusive.
    pub max_sentence_len: usize,

    /// Number of sentences in the output.
    pub sentence_count: usize,

    /// Sentences per stanza; a blank line follows each full stanza.
    pub lines_per_verse: usize,

    /// Size of the intermediate sampling pool drawn from the corpus.
    pub pool_size: usize,
}

impl Default for VerseConfig {
    fn default() -> Self {
        Self {
            min_sentence_len: 4,
            max_sentence_len: 10,
            sentence_count: 60,
            lines_per_verse: 6,
            pool_size: 200,
        }
    }
}

impl VerseConfig {
    /// Rejects configurations that cannot produce output.
    pub fn validate(&self) -> Result<(), ZaumError> {
        if self.min_sentence_len > self.max_sentence_len {
            return Err(ZaumError::InvalidConfig(format!(
                "min_sentence_len {} exceeds max_sentence_len {}",
                self.min_sentence_len, self.max_sentence_len
            )));
        }
        if self.lines_per_verse == 0 {
            return Err(ZaumError::InvalidConfig(
                "lines_per_verse must be >= 1".into(),
            ));
        }
        if self.pool_size == 0 {
            return Err(ZaumError::InvalidConfig("pool_size must be >= 1".into()));
        }
        Ok(())
    }
}
