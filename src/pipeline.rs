use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizeConfig;
use crate::dash::canonicalize_dashes;
use crate::ellipsis::collapse_ellipses;
use crate::filter::filter_chars;
use crate::punctuation::{is_allowed, space_punctuation};
use crate::whitespace::collapse_whitespace;

/// Main entry point. Runs the full normalization pipeline over `input`.
///
/// Stage order matters: whitespace collapse, ellipsis canonicalization,
/// dash canonicalization, punctuation spacing, character filtering, then a
/// final whitespace collapse to deduplicate the spaces the punctuation
/// stage over-inserts. Each stage sees only its predecessor's output.
///
/// The composed pipeline is idempotent: its output is already in normal
/// form, so a second run is a no-op.
pub fn normalize(input: &str, cfg: &NormalizeConfig) -> String {
    // NFKC first when enabled, since it can change character boundaries.
    // Cow avoids the allocation when it is off.
    let text: Cow<'_, str> = if cfg.normalize_unicode {
        Cow::Owned(input.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(input)
    };

    let text: Cow<'_, str> = if cfg.lowercase {
        Cow::Owned(text.to_lowercase())
    } else {
        text
    };

    let text = collapse_whitespace(&text);
    let text = collapse_ellipses(&text);
    let text = canonicalize_dashes(&text);
    let text = space_punctuation(&text);
    let text = filter_chars(&text, |ch| {
        ch.is_alphanumeric() || ch.is_whitespace() || is_allowed(ch)
    });
    collapse_whitespace(&text)
}
