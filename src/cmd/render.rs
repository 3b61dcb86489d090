//! Render command implementation
//!
//! Handles `wasm-size-report render`, which turns the interchange file into the
//! markdown comment and hands it to the next CI step.

use anyhow::{Context, Result};

use crate::cicd::{display, EnvPublisher, HandoffFile};
use crate::comparison::{ComparisonSummary, ReportRenderer, SignificanceClassifier};
use crate::config::{ConfigFile, EnvBindings};

/// Render the size comparison report and publish it
///
/// With `dry_run` the report is only printed and the environment file is not
/// required.
///
/// # Errors
///
/// Returns an error if:
/// - The environment file is not configured (unless `dry_run`)
/// - The interchange file is missing or malformed
/// - The environment file cannot be appended to
pub fn cmd_render(config: &ConfigFile, env: &EnvBindings, dry_run: bool) -> Result<String> {
    let env_file = if dry_run {
        None
    } else {
        Some(
            env.require_env_file()
                .context("Cannot publish size comparison")?,
        )
    };

    let payload = HandoffFile::new(&config.handoff_path)
        .read()
        .context("Failed to load size comparison")?;

    let classifier = SignificanceClassifier::new(config.threshold);
    let rows = classifier.classify_all(&payload.sizes);
    let report = ReportRenderer::new().render(&rows);

    println!("{}", report);
    display::print_summary(&ComparisonSummary::new(&payload.sizes, &rows), &rows);

    if let Some(env_file) = env_file {
        EnvPublisher::new(env_file)
            .with_keys(&config.report_key, &config.issue_key)
            .publish(&report, &payload.issue_number)?;
    } else {
        log::info!("Dry run: skipping environment publish");
    }

    Ok(report)
}
