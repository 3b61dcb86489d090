//! Markdown rendering of the size comparison comment

use super::classifier::ComparisonRow;
use std::fmt::Write;

const TITLE: &str = "### Size Comparison";
const HEADER: &str = "| examples | master (KB) | pull request (KB) | diff (KB) | diff (%) |";
const DIVIDER: &str = "|---|---|---|---|---|";

/// Line emitted when nothing crossed the threshold
pub const ALL_CLEAR: &str = "✅ None of the examples has changed their size significantly.";

/// Renders classified rows as a pull request comment
#[derive(Debug, Default)]
pub struct ReportRenderer;

impl ReportRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }

    /// Render the full report
    ///
    /// The first table, folded into a `<details>` block, lists every example.
    /// Significant rows are repeated in a second table under an alert line.
    pub fn render(&self, rows: &[ComparisonRow]) -> String {
        let mut out = String::new();

        out.push_str(TITLE);
        out.push_str("\n\n<details>\n<summary>Details</summary>\n\n");
        push_table(&mut out, rows.iter());
        out.push_str("\n</details>\n\n");

        let significant: Vec<&ComparisonRow> = rows.iter().filter(|r| r.significant).collect();
        match significant.len() {
            0 => {
                out.push_str(ALL_CLEAR);
                out.push('\n');
            }
            count => {
                out.push_str(&alert_line(count));
                out.push_str("\n\n");
                push_table(&mut out, significant.into_iter());
            }
        }

        out
    }
}

fn alert_line(count: usize) -> String {
    if count == 1 {
        "⚠️ The following example has changed its size significantly:".to_string()
    } else {
        "⚠️ The following examples have changed their size significantly:".to_string()
    }
}

fn push_table<'a>(out: &mut String, rows: impl Iterator<Item = &'a ComparisonRow>) {
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(DIVIDER);
    out.push('\n');
    for row in rows {
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} | {} |",
            row.name,
            row.baseline_display,
            row.candidate_display,
            row.delta_display,
            row.percent_display
        );
    }
}
