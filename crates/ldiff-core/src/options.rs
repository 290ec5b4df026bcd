use serde::{Deserialize, Serialize};

/// Normalization switches applied to both texts before they are split into
/// lines.
///
/// Both flags default to `false`, which compares the texts verbatim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonOptions {
    /// Lower-case both texts before comparing.
    pub ignore_case: bool,
    /// Collapse every whitespace run (line breaks included) into a single
    /// space and trim both ends.
    pub ignore_whitespace: bool,
}

impl ComparisonOptions {
    pub fn new(ignore_case: bool, ignore_whitespace: bool) -> Self {
        Self {
            ignore_case,
            ignore_whitespace,
        }
    }

    /// Returns `true` if neither option alters the input texts.
    pub fn is_verbatim(&self) -> bool {
        !self.ignore_case && !self.ignore_whitespace
    }
}
