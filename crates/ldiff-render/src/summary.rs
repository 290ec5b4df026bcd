use ldiff_core::DiffStats;

/// One-line human-readable summary of comparison counts.
pub fn summary(stats: &DiffStats) -> String {
    format!(
        "Additions: {} | Removals: {} | Unchanged: {}",
        stats.additions, stats.deletions, stats.unchanged
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_line() {
        let stats = DiffStats {
            additions: 3,
            deletions: 2,
            unchanged: 1,
        };
        assert_eq!(summary(&stats), "Additions: 3 | Removals: 2 | Unchanged: 1");
        assert_eq!(
            summary(&DiffStats::default()),
            "Additions: 0 | Removals: 0 | Unchanged: 0"
        );
    }
}
