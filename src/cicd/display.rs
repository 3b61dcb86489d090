//! Console output for local and CI log runs

use crate::collector::SizeTable;
use crate::comparison::{ComparisonRow, ComparisonSummary};
use crate::fmt::{emoji, format_bytes, CHART, CHECKMARK, MICROSCOPE, WARNING};
use console::style;
use std::path::Path;

/// Print what the collector found under one checkout root
pub fn print_collection(label: &str, root: &Path, table: &SizeTable) {
    println!(
        "{} {} {}: {} examples, {}",
        emoji(MICROSCOPE),
        style(label).bold(),
        style(root.display()).dim(),
        table.len(),
        format_bytes(table.total_bytes())
    );
}

/// Print comparison counts and the rows that crossed the threshold
pub fn print_summary(summary: &ComparisonSummary, rows: &[ComparisonRow]) {
    println!(
        "\n{} Compared {} examples ({} added, {} removed)",
        emoji(CHART),
        summary.examples,
        summary.added,
        summary.removed
    );

    if summary.significant == 0 {
        println!(
            "{} {}",
            emoji(CHECKMARK),
            style("No significant size changes").green()
        );
        return;
    }

    println!(
        "{} {}",
        emoji(WARNING),
        style(format!("{} significant size change(s)", summary.significant)).yellow()
    );
    for row in rows.iter().filter(|row| row.significant) {
        println!(
            "   {} {} -> {} KB ({})",
            style(&row.name).bold(),
            row.baseline_display,
            row.candidate_display,
            style(&row.percent_display).yellow()
        );
    }
}
