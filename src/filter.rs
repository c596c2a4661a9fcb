//! Predicate-based character filtering.

/// Retains only the characters the predicate accepts, preserving order and
/// multiplicity.
///
/// The composed pipeline calls this with "alphanumeric, whitespace, or
/// allowed punctuation"; any predicate works:
///
/// ```rust
/// use zaum::filter_chars;
///
/// assert_eq!(filter_chars("z12 xyz", |c| c == 'x' || c == 'y'), "xy");
/// assert_eq!(filter_chars("xyz", |_| false), "");
/// assert_eq!(filter_chars("xyz", |_| true), "xyz");
/// ```
pub fn filter_chars<F>(text: &str, allowed: F) -> String
where
    F: Fn(char) -> bool,
{
    text.chars().filter(|&ch| allowed(ch)).collect()
}
