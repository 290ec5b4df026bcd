//! HTML presenter.
//!
//! Produces one `<div>` per entry, classed by entry kind so a stylesheet can
//! color additions and removals.

use std::borrow::Cow;

use ldiff_core::{Comparison, EntryKind};

use crate::error::RenderResult;
use crate::{Renderer, NO_DIFFERENCES};

/// Renders comparisons as HTML fragments.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, comparison: &Comparison) -> RenderResult<String> {
        if comparison.is_empty() {
            return Ok(format!("<div class=\"diff-empty\">{NO_DIFFERENCES}</div>\n"));
        }

        let mut out = String::new();
        for entry in &comparison.entries {
            let prefix = match entry.kind {
                EntryKind::Unchanged => "",
                EntryKind::Added => "+ ",
                EntryKind::Removed => "- ",
            };
            out.push_str(&format!(
                "<div class=\"diff-{}\">{}{}</div>\n",
                entry.kind,
                prefix,
                escape_html(&entry.content)
            ));
        }
        Ok(out)
    }
}

/// Escape text for use as HTML element content.
///
/// Matches how a DOM text node serializes: `&`, `<`, `>`, and the no-break
/// space are replaced; quotes are left alone.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '\u{00A0}']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{00A0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}
