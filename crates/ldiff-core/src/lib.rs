//! Positional line comparison engine.
//!
//! Compares two texts line by line, aligning lines strictly by position, and
//! produces an ordered list of classified entries together with aggregate
//! change counts. The engine is a pure function of its inputs: it holds no
//! state between calls, never fails, and never escapes content.
//!
//! # Key Types
//!
//! - [`ComparisonOptions`] -- Case and whitespace normalization switches
//! - [`Comparison`] -- The result of [`compare`]: entries plus [`DiffStats`]
//! - [`DiffEntry`] / [`EntryKind`] -- A single rendered line and its class
//! - [`Alignment`] -- Classification of one aligned pair of lines
//!
//! # Example
//!
//! ```
//! use ldiff_core::{compare, ComparisonOptions, EntryKind};
//!
//! let result = compare("a\nb", "a\nc", ComparisonOptions::default());
//! assert_eq!(result.stats.unchanged, 1);
//! assert_eq!(result.stats.deletions, 1);
//! assert_eq!(result.stats.additions, 1);
//! assert_eq!(result.entries[1].kind, EntryKind::Removed);
//! ```

pub mod align;
pub mod compare;
pub mod entry;
pub mod normalize;
pub mod options;
pub mod stats;

pub use align::{align, classify, split_lines, AlignedLines, Alignment};
pub use compare::{compare, Comparison};
pub use entry::{DiffEntry, EntryKind};
pub use normalize::{collapse_whitespace, is_collapsible_whitespace, normalize};
pub use options::ComparisonOptions;
pub use stats::DiffStats;
