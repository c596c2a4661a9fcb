//! Verse sampling and rendering.
//!
//! Sentences within the configured length bounds are drawn (with
//! replacement) into a pool, sampled again from the pool, decorated with a
//! fixed refrain, and rendered into stanzas.
//!
//! The RNG is injected so callers control the seed: tests use
//! `fastrand::Rng::with_seed`, the CLI an OS-seeded generator.

use crate::config::VerseConfig;
use crate::error::ZaumError;
use crate::sentence::{effective_len, split_sentences};

/// Refrain words and the terminator each one carries.
const REFRAINS: [(&str, &str); 3] = [("много", "."), ("малость", "."), ("зачем", "?")];

/// Samples sentences from a normalized corpus and renders them as verses.
///
/// `text` must already be normalized (single-space token stream). Returns
/// [`ZaumError::EmptyCorpus`] when no sentence falls within the configured
/// length bounds, and [`ZaumError::InvalidConfig`] for unusable bounds.
pub fn generate_verses(
    text: &str,
    cfg: &VerseConfig,
    rng: &mut fastrand::Rng,
) -> Result<String, ZaumError> {
    cfg.validate()?;

    let words: Vec<&str> = text.split(' ').collect();
    let sentences: Vec<Vec<&str>> = split_sentences(&words)
        .into_iter()
        .filter(|sentence| {
            let len = effective_len(sentence);
            len >= cfg.min_sentence_len && len <= cfg.max_sentence_len
        })
        .collect();
    if sentences.is_empty() {
        return Err(ZaumError::EmptyCorpus {
            min: cfg.min_sentence_len,
            max: cfg.max_sentence_len,
        });
    }
    tracing::debug!(
        candidates = sentences.len(),
        pool = cfg.pool_size,
        "sampling verse sentences"
    );

    // Two-level sampling: a pool drawn from the corpus, then the output
    // drawn from the pool. A small pool makes repetition likely on purpose.
    let pool: Vec<&[&str]> = (0..cfg.pool_size)
        .map(|_| sentences[rng.usize(..sentences.len())].as_slice())
        .collect();

    let mut picked: Vec<Vec<&str>> = Vec::with_capacity(cfg.sentence_count);
    for _ in 0..cfg.sentence_count {
        let sentence = pool[rng.usize(..pool.len())];
        let (refrain, terminator) = REFRAINS[rng.usize(..REFRAINS.len())];
        let mut decorated = Vec::with_capacity(sentence.len() + 2);
        decorated.push(refrain);
        decorated.extend_from_slice(sentence);
        decorated.push(terminator);
        picked.push(decorated);
    }

    Ok(render_verses(&picked, cfg.lines_per_verse))
}

/// Renders decorated sentences, one per line, a blank line after every
/// full stanza. The first token of a line is capitalized; commas and the
/// trailing terminator attach without a leading space.
fn render_verses(sentences: &[Vec<&str>], lines_per_verse: usize) -> String {
    let mut out = String::new();
    let mut line = 0;
    for sentence in sentences {
        for (i, token) in sentence.iter().enumerate() {
            if i == 0 {
                push_capitalized(&mut out, token);
            } else if *token == "," || i == sentence.len() - 1 {
                out.push_str(token);
            } else {
                out.push(' ');
                out.push_str(token);
            }
        }
        out.push('\n');
        line += 1;
        if line >= lines_per_verse {
            out.push('\n');
            line = 0;
        }
    }
    out
}

/// Uppercases the first character, lowercases the rest. Uppercasing can
/// expand to multiple characters (ß -> SS), hence the extend.
fn push_capitalized(out: &mut String, token: &str) {
    let mut chars = token.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(&chars.as_str().to_lowercase());
    }
}
