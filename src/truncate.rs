//! Character-safe truncation.
//!
//! The bluntest budget cap: keep the first N characters and drop the rest.
//! Useful when a single prompt must stay under a context limit and losing
//! the tail is acceptable, e.g. capping a raw JSON dump before analysis.
//! `String::truncate` panics on a non-boundary byte index; this counts
//! characters instead.

/// The longest prefix of `text` holding at most `max_chars` characters.
///
/// Returns a borrowed slice; the cut always lands on a UTF-8 character
/// boundary. If the text has `max_chars` characters or fewer, the whole
/// input is returned.
///
/// ```rust
/// use wafers::truncate_chars;
///
/// assert_eq!(truncate_chars("hello world", 5), "hello");
/// assert_eq!(truncate_chars("hi", 5), "hi");
/// assert_eq!(truncate_chars("日本語", 2), "日本");
/// ```
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((offset, _)) => &text[..offset],
        None => text,
    }
}
