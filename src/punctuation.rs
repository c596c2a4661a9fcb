//! The punctuation set and the spacing stage.
//!
//! Normalized output treats punctuation as standalone tokens: every
//! character in [`PUNCTUATION`] ends up with exactly one space on each side.
//! The spacing stage inserts spaces unconditionally and leaves
//! deduplication to the final whitespace collapse.

/// Characters given standalone-token treatment by [`space_punctuation`].
pub const PUNCTUATION: [char; 13] = [
    ',', '.', '!', '?', '…', '"', '«', '»', '—', '(', ')', ':', '/',
];

/// True for members of [`PUNCTUATION`].
pub fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(&ch)
}

/// True for characters that survive the filter stage beyond alphanumerics
/// and whitespace: the punctuation set plus the compound-word hyphen.
pub fn is_allowed(ch: char) -> bool {
    is_punctuation(ch) || ch == '-'
}

/// Surrounds every punctuation character with a single space on each side.
///
/// Spaces are inserted even when one is already present, and adjacent
/// punctuation characters are each spaced independently (`"?!"` becomes
/// `" ? ! "` with doubled interior spacing). Callers are expected to run
/// [`collapse_whitespace`](crate::collapse_whitespace) afterwards.
pub fn space_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for ch in text.chars() {
        if is_punctuation(ch) {
            out.push(' ');
            out.push(ch);
            out.push(' ');
        } else {
            out.push(ch);
        }
    }
    out
}
