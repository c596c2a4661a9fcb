//! Dash canonicalization.
//!
//! Russian typography uses a spaced em dash; raw corpora spell it half a
//! dozen ways. All of them are rewritten to the canonical ` — ` form here.

/// The canonical dash glyph (em dash, U+2014).
pub const DASH: char = '—';

/// Rewrites every dash spelling to a space-padded em dash.
///
/// Six spellings are recognized: em dash, en dash, a double hyphen, and a
/// hyphen with a space on the left, right, or both sides. Substitutions run
/// in that fixed order so earlier rewrites feed later ones: a double hyphen
/// becomes the padded dash first and no longer matches any bare-hyphen
/// pattern afterwards.
///
/// A hyphen with no adjacent space is a compound-word hyphen, not a dash,
/// and is left alone:
///
/// ```rust
/// use zaum::canonicalize_dashes;
///
/// assert_eq!(canonicalize_dashes("xx–yy"), "xx — yy");
/// assert_eq!(canonicalize_dashes("xx--yy"), "xx — yy");
/// assert_eq!(canonicalize_dashes("xx-yy"), "xx-yy");
/// ```
pub fn canonicalize_dashes(text: &str) -> String {
    const PADDED: &str = " — ";
    text.replace('—', PADDED)
        .replace('–', PADDED)
        .replace("--", PADDED)
        .replace(" - ", PADDED)
        .replace(" -", PADDED)
        .replace("- ", PADDED)
}
