use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a rendered line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// The line is identical on both sides.
    Unchanged,
    /// The line only exists on the right side at this position.
    Added,
    /// The line only exists on the left side at this position.
    Removed,
}

impl EntryKind {
    /// Lowercase name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unchanged => "unchanged",
            Self::Added => "added",
            Self::Removed => "removed",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single line of comparison output.
///
/// `content` is the literal (normalized) line text with no escaping applied.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffEntry {
    pub kind: EntryKind,
    pub content: String,
}

impl DiffEntry {
    pub fn new(kind: EntryKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    pub fn unchanged(content: impl Into<String>) -> Self {
        Self::new(EntryKind::Unchanged, content)
    }

    pub fn added(content: impl Into<String>) -> Self {
        Self::new(EntryKind::Added, content)
    }

    pub fn removed(content: impl Into<String>) -> Self {
        Self::new(EntryKind::Removed, content)
    }
}
