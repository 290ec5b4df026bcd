//! The comparison entry point.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::align::{align, classify, split_lines};
use crate::entry::{DiffEntry, EntryKind};
use crate::normalize::normalize;
use crate::options::ComparisonOptions;
use crate::stats::DiffStats;

/// The result of comparing two texts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// Entries in top-to-bottom line order.
    pub entries: Vec<DiffEntry>,
    /// Aggregate counts over `entries`.
    pub stats: DiffStats,
}

impl Comparison {
    /// Returns `true` if there are no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if any line was added or removed.
    pub fn has_changes(&self) -> bool {
        self.stats.has_changes()
    }

    /// Entries of the given kind, in order.
    pub fn entries_of(&self, kind: EntryKind) -> impl Iterator<Item = &DiffEntry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }
}

/// Compare two texts line by line.
///
/// Both texts are normalized according to `options`, split on `'\n'`, and
/// paired by line index. Each pair is classified and contributes one entry,
/// or a removed/added pair of entries when both lines are non-empty and differ.
///
/// With `ignore_whitespace` enabled, line breaks are collapsed along with all
/// other whitespace, so each text is compared as a single line.
///
/// If both texts are empty after normalization the result is empty.
pub fn compare(left: &str, right: &str, options: ComparisonOptions) -> Comparison {
    let left = normalize(left, options);
    let right = normalize(right, options);

    if left.is_empty() && right.is_empty() {
        debug!(?options, "both texts empty after normalization");
        return Comparison::default();
    }

    let aligned = align(split_lines(&left), split_lines(&right));
    let lines = aligned.len();
    let mut comparison = Comparison {
        entries: Vec::with_capacity(lines),
        stats: DiffStats::default(),
    };

    for (a, b) in aligned {
        let alignment = classify(a, b);
        comparison.stats.record(&alignment);
        comparison.entries.extend(alignment.entries());
    }

    debug!(
        lines,
        additions = comparison.stats.additions,
        deletions = comparison.stats.deletions,
        unchanged = comparison.stats.unchanged,
        "compared texts"
    );
    comparison
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::Alignment;
    use proptest::prelude::*;

    fn verbatim() -> ComparisonOptions {
        ComparisonOptions::default()
    }

    #[test]
    fn identical_texts_are_unchanged() {
        let text = "alpha\n\nbeta\ngamma\n";
        let result = compare(text, text, verbatim());

        assert!(result.entries.iter().all(|e| e.kind == EntryKind::Unchanged));
        assert_eq!(result.len(), 5);
        assert_eq!(result.stats.unchanged, 3);
        assert_eq!(result.stats.additions, 0);
        assert_eq!(result.stats.deletions, 0);
        assert!(!result.has_changes());
    }

    #[test]
    fn empty_inputs_yield_empty_result() {
        for opts in [
            ComparisonOptions::new(false, false),
            ComparisonOptions::new(true, false),
            ComparisonOptions::new(false, true),
            ComparisonOptions::new(true, true),
        ] {
            let result = compare("", "", opts);
            assert!(result.is_empty());
            assert_eq!(result.stats, DiffStats::default());
        }
    }

    #[test]
    fn whitespace_only_inputs_collapse_to_empty() {
        let result = compare(" \n\t", "\n\n", ComparisonOptions::new(false, true));
        assert!(result.is_empty());
        assert_eq!(result.stats, DiffStats::default());
    }

    #[test]
    fn whitespace_only_inputs_without_collapse_still_compare() {
        let result = compare("\n", "", verbatim());
        assert_eq!(
            result.entries,
            vec![DiffEntry::unchanged(""), DiffEntry::unchanged("")]
        );
        assert_eq!(result.stats, DiffStats::default());
    }

    #[test]
    fn insertion_shifts_following_lines() {
        let result = compare("a\nb\nc", "a\nx\nb\nc", verbatim());
        assert_eq!(
            result.entries,
            vec![
                DiffEntry::unchanged("a"),
                DiffEntry::removed("b"),
                DiffEntry::added("x"),
                DiffEntry::removed("c"),
                DiffEntry::added("b"),
                DiffEntry::added("c"),
            ]
        );
        assert_eq!(
            result.stats,
            DiffStats {
                additions: 3,
                deletions: 2,
                unchanged: 1
            }
        );
    }

    #[test]
    fn ignore_case_matches_mixed_case() {
        let result = compare("ABC", "abc", ComparisonOptions::new(true, false));
        assert_eq!(result.entries, vec![DiffEntry::unchanged("abc")]);
        assert_eq!(result.stats.unchanged, 1);

        let result = compare("ABC", "abc", verbatim());
        assert_eq!(
            result.entries,
            vec![DiffEntry::removed("ABC"), DiffEntry::added("abc")]
        );
        assert_eq!(result.stats.additions, 1);
        assert_eq!(result.stats.deletions, 1);
    }

    #[test]
    fn ignore_whitespace_collapses_lines() {
        let result = compare("a\nb", "a\nb", ComparisonOptions::new(false, true));
        assert_eq!(result.entries, vec![DiffEntry::unchanged("a b")]);
        assert_eq!(result.stats.unchanged, 1);
    }

    #[test]
    fn ignore_whitespace_equates_reflowed_text() {
        let result = compare(
            "the quick\n  brown fox",
            "the   quick brown\tfox\n",
            ComparisonOptions::new(false, true),
        );
        assert_eq!(result.entries, vec![DiffEntry::unchanged("the quick brown fox")]);
    }

    #[test]
    fn trailing_lines_are_one_sided() {
        let result = compare("a\nb\nc", "a", verbatim());
        assert_eq!(
            result.entries,
            vec![
                DiffEntry::unchanged("a"),
                DiffEntry::removed("b"),
                DiffEntry::removed("c"),
            ]
        );
        assert_eq!(result.stats.deletions, 2);

        let result = compare("", "x\ny", verbatim());
        assert_eq!(
            result.entries,
            vec![DiffEntry::added("x"), DiffEntry::added("y")]
        );
    }

    #[test]
    fn blank_against_content_is_one_sided() {
        let result = compare("a\n\nc", "a\nb\n", verbatim());
        assert_eq!(
            result.entries,
            vec![
                DiffEntry::unchanged("a"),
                DiffEntry::added("b"),
                DiffEntry::removed("c"),
            ]
        );
    }

    #[test]
    fn content_is_not_escaped() {
        let result = compare("<b>&</b>", "", verbatim());
        assert_eq!(result.entries, vec![DiffEntry::removed("<b>&</b>")]);
    }

    #[test]
    fn carriage_returns_are_content() {
        let result = compare("a\r\nb", "a\nb", verbatim());
        assert_eq!(result.stats.unchanged, 1);
        assert_eq!(result.stats.deletions, 1);
        assert_eq!(result.stats.additions, 1);
    }

    #[test]
    fn entries_of_filters_by_kind() {
        let result = compare("a\nb", "a\nc", verbatim());
        let added: Vec<_> = result.entries_of(EntryKind::Added).collect();
        assert_eq!(added, vec![&DiffEntry::added("c")]);
    }

    fn text_strategy() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[abAB \t\n]{0,48}").unwrap()
    }

    proptest! {
        #[test]
        fn stats_match_entry_kinds(
            left in text_strategy(),
            right in text_strategy(),
            ignore_case in any::<bool>(),
            ignore_whitespace in any::<bool>(),
        ) {
            let result = compare(&left, &right, ComparisonOptions::new(ignore_case, ignore_whitespace));

            prop_assert_eq!(result.entries_of(EntryKind::Added).count(), result.stats.additions);
            prop_assert_eq!(result.entries_of(EntryKind::Removed).count(), result.stats.deletions);
            let counted_unchanged = result
                .entries_of(EntryKind::Unchanged)
                .filter(|e| !e.content.is_empty())
                .count();
            prop_assert_eq!(counted_unchanged, result.stats.unchanged);
        }

        #[test]
        fn each_index_counts_at_most_once(
            left in text_strategy(),
            right in text_strategy(),
            ignore_whitespace in any::<bool>(),
        ) {
            let opts = ComparisonOptions::new(false, ignore_whitespace);
            let result = compare(&left, &right, opts);

            let l = normalize(&left, opts);
            let r = normalize(&right, opts);
            let (lines, replaced) = if l.is_empty() && r.is_empty() {
                (0, 0)
            } else {
                let aligned = align(split_lines(&l), split_lines(&r));
                let lines = aligned.len();
                let replaced = aligned
                    .filter(|(a, b)| matches!(classify(a, b), Alignment::Replaced { .. }))
                    .count();
                (lines, replaced)
            };

            prop_assert!(result.stats.total() - replaced <= lines);
        }

        #[test]
        fn identity_has_no_changes(text in text_strategy()) {
            let result = compare(&text, &text, ComparisonOptions::default());
            let non_empty = if text.is_empty() {
                0
            } else {
                text.split('\n').filter(|l| !l.is_empty()).count()
            };
            prop_assert!(!result.has_changes());
            prop_assert_eq!(result.stats.unchanged, non_empty);
        }

        #[test]
        fn comparison_is_deterministic(
            left in text_strategy(),
            right in text_strategy(),
            ignore_case in any::<bool>(),
            ignore_whitespace in any::<bool>(),
        ) {
            let opts = ComparisonOptions::new(ignore_case, ignore_whitespace);
            prop_assert_eq!(compare(&left, &right, opts), compare(&left, &right, opts));
        }
    }
}
