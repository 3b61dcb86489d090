//! Delta computation and significance classification

use super::joiner::JoinedRow;
use crate::fmt::{format_delta_kb, format_percent, format_size, NOT_AVAILABLE};

/// Default significance threshold (1%)
pub const DEFAULT_THRESHOLD: f64 = 0.01;

/// How an example's size moved between the two builds
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeChange {
    /// The example is missing from at least one build
    Missing,
    /// Both builds produced exactly the same size
    Unchanged,
    /// The baseline was empty, so no ratio exists
    FromZero {
        /// Candidate minus baseline, in bytes
        delta: i128,
    },
    /// Ordinary change relative to a non-empty baseline
    Changed {
        /// Candidate minus baseline, in bytes
        delta: i128,
        /// `delta / baseline`
        fraction: f64,
    },
}

impl SizeChange {
    /// Work out the change for one joined row
    pub fn of(row: &JoinedRow) -> Self {
        match (row.baseline, row.candidate) {
            (Some(baseline), Some(candidate)) if baseline == candidate => Self::Unchanged,
            (Some(0), Some(candidate)) => Self::FromZero {
                delta: i128::from(candidate),
            },
            (Some(baseline), Some(candidate)) => {
                // Both sides are u64, so the difference always fits in i128.
                let delta = i128::from(candidate) - i128::from(baseline);
                Self::Changed {
                    delta,
                    fraction: delta as f64 / baseline as f64,
                }
            }
            _ => Self::Missing,
        }
    }
}

/// A joined row with display strings and its significance verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    /// Example name
    pub name: String,
    /// Baseline size in KB, `0` or `N/A`
    pub baseline_display: String,
    /// Candidate size in KB, `0` or `N/A`
    pub candidate_display: String,
    /// Signed delta in KB
    pub delta_display: String,
    /// Signed delta as a percentage of the baseline
    pub percent_display: String,
    /// True if the change warrants reviewer attention
    pub significant: bool,
}

/// Flags size changes whose magnitude exceeds a threshold
#[derive(Debug, Clone, Copy)]
pub struct SignificanceClassifier {
    threshold: f64,
}

impl Default for SignificanceClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl SignificanceClassifier {
    /// Create a classifier; `threshold` is a fraction (`0.01` = 1%)
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// The configured threshold
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Classify one row
    ///
    /// A change is significant when `|delta / baseline| > threshold`. Growth
    /// from an empty baseline has no ratio and always counts as significant.
    ///
    /// # Examples
    ///
    /// ```
    /// use wasm_size_report::comparison::{JoinedRow, SignificanceClassifier};
    ///
    /// let row = JoinedRow {
    ///     name: "counter".to_string(),
    ///     baseline: Some(1000),
    ///     candidate: Some(1020),
    /// };
    ///
    /// let compared = SignificanceClassifier::new(0.01).classify(&row);
    /// assert_eq!(compared.percent_display, "+2.000%");
    /// assert!(compared.significant);
    ///
    /// assert!(!SignificanceClassifier::new(0.05).classify(&row).significant);
    /// ```
    pub fn classify(&self, row: &JoinedRow) -> ComparisonRow {
        let (delta_display, percent_display, significant) = match SizeChange::of(row) {
            SizeChange::Missing => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string(), false),
            SizeChange::Unchanged => ("0".to_string(), "0.000%".to_string(), false),
            SizeChange::FromZero { delta } => {
                (format_delta_kb(delta), NOT_AVAILABLE.to_string(), true)
            }
            SizeChange::Changed { delta, fraction } => (
                format_delta_kb(delta),
                format_percent(fraction),
                fraction.abs() > self.threshold,
            ),
        };

        ComparisonRow {
            name: row.name.clone(),
            baseline_display: format_size(row.baseline),
            candidate_display: format_size(row.candidate),
            delta_display,
            percent_display,
            significant,
        }
    }

    /// Classify every row, preserving order
    pub fn classify_all(&self, rows: &[JoinedRow]) -> Vec<ComparisonRow> {
        rows.iter().map(|row| self.classify(row)).collect()
    }
}
