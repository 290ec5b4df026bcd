//! Positional line alignment and per-pair classification.
//!
//! Lines are paired strictly by index. There is no search for a matching line
//! elsewhere in the other text, so an inserted line shifts every following
//! pair and shows up as a run of replacements rather than a single addition.

use crate::entry::DiffEntry;

/// Classification of one aligned pair of lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment<'a> {
    /// Both sides hold the same line (possibly both empty).
    Unchanged(&'a str),
    /// The left line is empty and the right line is not.
    Added(&'a str),
    /// The right line is empty and the left line is not.
    Removed(&'a str),
    /// Both lines are non-empty and differ.
    Replaced { removed: &'a str, added: &'a str },
}

impl<'a> Alignment<'a> {
    /// The entries emitted for this pair, in output order.
    ///
    /// A replacement yields the removed line before the added one.
    pub fn entries(self) -> impl Iterator<Item = DiffEntry> + 'a {
        let (first, second) = match self {
            Self::Unchanged(line) => (DiffEntry::unchanged(line), None),
            Self::Added(line) => (DiffEntry::added(line), None),
            Self::Removed(line) => (DiffEntry::removed(line), None),
            Self::Replaced { removed, added } => {
                (DiffEntry::removed(removed), Some(DiffEntry::added(added)))
            }
        };
        std::iter::once(first).chain(second)
    }

    /// Returns `true` if the pair holds two empty lines.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Unchanged(""))
    }
}

/// Classify an aligned pair.
///
/// Equality is checked first, so two empty lines are `Unchanged`.
pub fn classify<'a>(left: &'a str, right: &'a str) -> Alignment<'a> {
    if left == right {
        return Alignment::Unchanged(left);
    }
    match (left.is_empty(), right.is_empty()) {
        (true, _) => Alignment::Added(right),
        (_, true) => Alignment::Removed(left),
        (false, false) => Alignment::Replaced {
            removed: left,
            added: right,
        },
    }
}

/// Split a text on `'\n'`.
///
/// An empty text yields a single empty line. `'\r'` is kept in line content.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Pair two line sequences by index, padding the shorter one with empty lines.
pub fn align<'a>(left: Vec<&'a str>, right: Vec<&'a str>) -> AlignedLines<'a> {
    let len = left.len().max(right.len());
    AlignedLines {
        left,
        right,
        index: 0,
        len,
    }
}

/// Iterator over positionally aligned `(left, right)` line pairs.
#[derive(Clone, Debug)]
pub struct AlignedLines<'a> {
    left: Vec<&'a str>,
    right: Vec<&'a str>,
    index: usize,
    len: usize,
}

impl<'a> Iterator for AlignedLines<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            return None;
        }
        let i = self.index;
        self.index += 1;
        let left = self.left.get(i).copied().unwrap_or("");
        let right = self.right.get(i).copied().unwrap_or("");
        Some((left, right))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AlignedLines<'_> {}
