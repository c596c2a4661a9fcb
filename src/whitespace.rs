//! Whitespace normalization.
//!
//! [`collapse_whitespace`] is both the first and the last stage of the
//! pipeline: punctuation spacing deliberately over-inserts spaces and relies
//! on a final collapse pass to deduplicate them.
//!
//! Unicode's definition of whitespace applies, so tabs, newlines, carriage
//! returns, and exotic spaces (U+00A0 and friends) all collapse the same way
//! as ASCII spaces.

/// Replaces every maximal run of whitespace with a single ASCII space.
///
/// Unlike a trim-and-join, edge whitespace is preserved as a single space:
/// `" xyz "` stays `" xyz "`. Idempotent and total — any input string is
/// valid, including the empty string.
///
/// # Examples
///
/// ```rust
/// use zaum::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("hello \t\n world"), "hello world");
/// assert_eq!(collapse_whitespace(" xyz "), " xyz ");
/// assert_eq!(collapse_whitespace("   \n\t   "), " ");
/// assert_eq!(collapse_whitespace(""), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}
