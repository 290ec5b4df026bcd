//! Whole-text normalization applied before line splitting.
//!
//! Case folding runs first, then whitespace collapsing. Whitespace collapsing
//! treats line breaks like any other whitespace, so a text normalized with
//! `ignore_whitespace` always consists of a single line.

use std::borrow::Cow;

use crate::options::ComparisonOptions;

/// Apply the enabled normalization steps to `text`.
///
/// Borrows the input unchanged when no option is enabled. Case folding uses
/// Unicode default case mapping and does not depend on the process locale.
pub fn normalize(text: &str, options: ComparisonOptions) -> Cow<'_, str> {
    let mut text = Cow::Borrowed(text);
    if options.is_verbatim() {
        return text;
    }
    if options.ignore_case {
        text = Cow::Owned(text.to_lowercase());
    }
    if options.ignore_whitespace {
        text = Cow::Owned(collapse_whitespace(&text));
    }
    text
}

/// Replace every maximal whitespace run with a single space and trim the
/// result.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if is_collapsible_whitespace(ch) {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out.trim_matches(' ').to_string()
}

/// Whitespace class used by [`collapse_whitespace`].
///
/// Unicode `White_Space` plus the byte order mark, minus NEL (U+0085).
pub fn is_collapsible_whitespace(ch: char) -> bool {
    match ch {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        _ => ch.is_whitespace(),
    }
}
