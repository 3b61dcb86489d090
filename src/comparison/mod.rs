//! Baseline versus candidate size comparison
//!
//! Joins the two collected tables, classifies each example's change against
//! the significance threshold and renders the markdown report.

mod classifier;
mod joiner;
mod renderer;

pub use classifier::{
    ComparisonRow, SignificanceClassifier, SizeChange, DEFAULT_THRESHOLD,
};
pub use joiner::{join_tables, JoinedRow};
pub use renderer::{ReportRenderer, ALL_CLEAR};

/// Counts shown in the console after a comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComparisonSummary {
    /// Number of examples in the report
    pub examples: usize,
    /// Examples over the threshold
    pub significant: usize,
    /// Examples only present on the candidate build
    pub added: usize,
    /// Examples only present on the baseline build
    pub removed: usize,
}

impl ComparisonSummary {
    /// Summarize joined rows and their classification
    pub fn new(joined: &[JoinedRow], compared: &[ComparisonRow]) -> Self {
        Self {
            examples: joined.len(),
            significant: compared.iter().filter(|row| row.significant).count(),
            added: joined.iter().filter(|row| row.is_added()).count(),
            removed: joined.iter().filter(|row| row.is_removed()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::SizeTable;

    #[test]
    fn test_end_to_end_comparison_without_significant_changes() {
        let baseline: SizeTable = [("a", 2048), ("b", 4096)].into_iter().collect();
        let candidate: SizeTable = [("a", 2048), ("c", 8192)].into_iter().collect();

        let joined = join_tables(&baseline, &candidate);
        let compared = SignificanceClassifier::default().classify_all(&joined);
        let report = ReportRenderer::new().render(&compared);

        assert!(report.contains("| a | 2.000 | 2.000 | 0 | 0.000% |"));
        assert!(report.contains("| b | 4.000 | N/A | N/A | N/A |"));
        assert!(report.contains("| c | N/A | 8.000 | N/A | N/A |"));
        assert!(report.contains(ALL_CLEAR));

        let summary = ComparisonSummary::new(&joined, &compared);
        assert_eq!(
            summary,
            ComparisonSummary {
                examples: 3,
                significant: 0,
                added: 1,
                removed: 1,
            }
        );
    }
}
