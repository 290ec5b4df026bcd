use serde::{Deserialize, Serialize};

use crate::align::Alignment;

/// Aggregate line counts for a comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffStats {
    /// Number of `Added` entries.
    pub additions: usize,
    /// Number of `Removed` entries.
    pub deletions: usize,
    /// Number of `Unchanged` entries with non-empty content.
    pub unchanged: usize,
}

impl DiffStats {
    /// Fold one classified pair into the counts.
    ///
    /// A pair of two empty lines is not counted.
    pub fn record(&mut self, alignment: &Alignment<'_>) {
        match alignment {
            Alignment::Unchanged(_) => {
                if !alignment.is_blank() {
                    self.unchanged += 1;
                }
            }
            Alignment::Added(_) => self.additions += 1,
            Alignment::Removed(_) => self.deletions += 1,
            Alignment::Replaced { .. } => {
                self.additions += 1;
                self.deletions += 1;
            }
        }
    }

    /// Sum of all three counters.
    pub fn total(&self) -> usize {
        self.additions + self.deletions + self.unchanged
    }

    /// Returns `true` if any line was added or removed.
    pub fn has_changes(&self) -> bool {
        self.additions > 0 || self.deletions > 0
    }
}
