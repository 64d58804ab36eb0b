//! Small string helpers: ellipsis truncation and quote/backslash escaping.
use alloc::{borrow::Cow, format, string::String};

/// Shortens `s` to at most `max_chars` characters, ending in `...` when
/// anything was cut.
///
/// Limits below three cannot fit an ellipsis plus text and produce `""`,
/// `"."` or `".."`.
///
/// ```rust
/// use quickprims::text::truncate;
///
/// assert_eq!(truncate("hello world", 8), "hello...");
/// assert_eq!(truncate("hello", 8), "hello");
/// assert_eq!(truncate("hello", 2), "..");
/// ```
#[must_use]
pub fn truncate(s: &str, max_chars: usize) -> Cow<'_, str> {
    if s.char_indices().nth(max_chars).is_none() {
        return Cow::Borrowed(s);
    }

    match max_chars {
        0 => Cow::Borrowed(""),
        1 => Cow::Borrowed("."),
        2 => Cow::Borrowed(".."),
        _ => {
            let keep = s
                .char_indices()
                .nth(max_chars - 3)
                .map_or(s.len(), |(i, _)| i);
            Cow::Owned(format!("{}...", &s[..keep]))
        }
    }
}

/// Backslash-escapes `\` and `"`.
#[must_use]
pub fn escape_quotes_and_slashes(s: &str) -> Cow<'_, str> {
    if s.contains(['\\', '"']) {
        Cow::Owned(s.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        Cow::Borrowed(s)
    }
}

/// Reverses [`escape_quotes_and_slashes`].
#[must_use]
pub fn unescape_quotes_and_slashes(s: &str) -> Cow<'_, str> {
    if s.contains('\\') {
        Cow::Owned(s.replace("\\\"", "\"").replace("\\\\", "\\"))
    } else {
        Cow::Borrowed(s)
    }
}

/// Escapes `s` and wraps it in double quotes.
#[must_use]
pub fn quote(s: &str) -> String {
    format!("\"{}\"", escape_quotes_and_slashes(s))
}

/// Strips surrounding double quotes and unescapes the contents.
///
/// Text that is not wrapped in quotes is returned unchanged.
#[must_use]
pub fn unquote(s: &str) -> Cow<'_, str> {
    match s
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) => unescape_quotes_and_slashes(inner),
        None => Cow::Borrowed(s),
    }
}
