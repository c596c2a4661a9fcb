//! Ellipsis canonicalization.
//!
//! Runs of periods carry two different intents in raw corpora: a doubled
//! period is almost always a typo for a single one, while three or more
//! signal a real ellipsis. Both are collapsed here, to `.` and `…`
//! respectively.

/// Collapses maximal runs of periods: exactly two become a single period,
/// three or more become one `…` glyph. Lone periods pass through.
///
/// Runs are matched greedily over the whole run, so `"...."` yields one
/// `…`, never an ellipsis-then-period artifact. Runs touching the start or
/// end of the text collapse the same as interior ones.
///
/// ```rust
/// use zaum::collapse_ellipses;
///
/// assert_eq!(collapse_ellipses("..."), "…");
/// assert_eq!(collapse_ellipses(".."), ".");
/// assert_eq!(collapse_ellipses("...."), "…");
/// assert_eq!(collapse_ellipses("....\n.."), "…\n.");
/// assert_eq!(collapse_ellipses("x... y..."), "x… y…");
/// ```
pub fn collapse_ellipses(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = 0usize;
    for ch in text.chars() {
        if ch == '.' {
            run += 1;
        } else {
            flush_periods(&mut out, run);
            run = 0;
            out.push(ch);
        }
    }
    flush_periods(&mut out, run);
    out
}

fn flush_periods(out: &mut String, run: usize) {
    match run {
        0 => {}
        // One period is untouched; two is the typo-repair rule.
        1 | 2 => out.push('.'),
        _ => out.push('…'),
    }
}
