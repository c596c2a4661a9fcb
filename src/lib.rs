//! zaum: text normalization and verse sampling.
//!
//! Two pieces live here. The interesting one is the **normalization
//! pipeline**: five ordered, pure stages that turn raw text into a clean
//! lowercase token stream with canonical ellipses, spaced em dashes, and an
//! allow-listed character set. The second is the **verse sampler**, which
//! draws sentences from a normalized corpus and renders them as refrain-
//! decorated stanzas.
//!
//! ## Pipeline order
//!
//! 1. Whitespace collapse
//! 2. Ellipsis canonicalization (`..` -> `.`, `...`+ -> `…`)
//! 3. Dash canonicalization (six spellings -> ` — `)
//! 4. Punctuation spacing (every set member padded with spaces)
//! 5. Character filtering (alphanumeric / whitespace / allow-list)
//!
//! followed by a final whitespace collapse, since stage 4 over-inserts
//! spaces on purpose.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence inside the pipeline. Every
//! stage is a total `&str -> String` function; the composed pipeline is
//! idempotent. File reading and writing live in the `zaum` binary only.
//!
//! The punctuation conventions target Russian text (spaced em dash,
//! `«»` quotes); this is not a general NLP library.

mod config;
mod dash;
mod ellipsis;
mod error;
mod filter;
mod pipeline;
mod punctuation;
mod sentence;
mod verse;
mod whitespace;

pub use crate::config::{NormalizeConfig, VerseConfig};
pub use crate::dash::{canonicalize_dashes, DASH};
pub use crate::ellipsis::collapse_ellipses;
pub use crate::error::ZaumError;
pub use crate::filter::filter_chars;
pub use crate::pipeline::normalize;
pub use crate::punctuation::{is_allowed, is_punctuation, space_punctuation, PUNCTUATION};
pub use crate::sentence::{effective_len, is_word, split_sentences};
pub use crate::verse::generate_verses;
pub use crate::whitespace::collapse_whitespace;
