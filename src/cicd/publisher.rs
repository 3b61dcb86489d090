//! Environment file publishing for the next CI step

use crate::config::check_identifier;
use crate::error::SizeReportError;
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Default key for the rendered report
pub const DEFAULT_REPORT_KEY: &str = "EXAMPLE_SIZES";

/// Default key for the pull request number
pub const DEFAULT_ISSUE_KEY: &str = "PR_NUMBER";

/// Appends `KEY=value` lines to the CI environment file
pub struct EnvPublisher<FS: FileSystem = RealFileSystem> {
    env_file: PathBuf,
    report_key: String,
    issue_key: String,
    fs: FS,
}

impl EnvPublisher<RealFileSystem> {
    /// Publisher writing to `env_file` with the default keys
    pub fn new(env_file: impl Into<PathBuf>) -> Self {
        Self::with_fs(env_file, RealFileSystem)
    }
}

impl<FS: FileSystem> EnvPublisher<FS> {
    /// Publisher with a custom filesystem implementation
    pub fn with_fs(env_file: impl Into<PathBuf>, fs: FS) -> Self {
        Self {
            env_file: env_file.into(),
            report_key: DEFAULT_REPORT_KEY.to_string(),
            issue_key: DEFAULT_ISSUE_KEY.to_string(),
            fs,
        }
    }

    /// Override the keys the two values are published under
    pub fn with_keys(mut self, report_key: impl Into<String>, issue_key: impl Into<String>) -> Self {
        self.report_key = report_key.into();
        self.issue_key = issue_key.into();
        self
    }

    /// Append the report and the issue number
    ///
    /// The report is JSON-encoded so its newlines survive the one-line format.
    /// The identifier is written raw and must not contain a line break.
    pub fn publish(&self, report: &str, issue_number: &str) -> Result<()> {
        check_identifier(issue_number)?;
        let escaped = serde_json::to_string(report).context("Failed to encode report")?;
        let lines = format!(
            "{}={}\n{}={}\n",
            self.report_key, escaped, self.issue_key, issue_number
        );

        self.fs
            .append(&self.env_file, lines)
            .map_err(|source| SizeReportError::Io {
                context: format!("appending to {}", self.env_file.display()),
                source,
            })?;

        log::info!(
            "Published {} and {} to {}",
            self.report_key,
            self.issue_key,
            self.env_file.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_publish_appends_escaped_report_and_raw_identifier() {
        let temp_dir = TempDir::new().unwrap();
        let env_file = temp_dir.path().join("github_env");
        std::fs::write(&env_file, "EXISTING=1\n").unwrap();

        EnvPublisher::new(&env_file)
            .publish("### Size Comparison\n\n| a | \"b\" |", "2739")
            .unwrap();

        let contents = std::fs::read_to_string(&env_file).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            vec![
                "EXISTING=1",
                r####"EXAMPLE_SIZES="### Size Comparison\n\n| a | \"b\" |""####,
                "PR_NUMBER=2739",
            ]
        );
    }

    #[test]
    fn test_published_report_decodes_back_to_original() {
        let temp_dir = TempDir::new().unwrap();
        let env_file = temp_dir.path().join("github_env");
        let report = "line one\nline two ✅\n";

        EnvPublisher::new(&env_file).publish(report, "7").unwrap();

        let contents = std::fs::read_to_string(&env_file).unwrap();
        let value = contents
            .lines()
            .find_map(|line| line.strip_prefix("EXAMPLE_SIZES="))
            .unwrap();
        let decoded: String = serde_json::from_str(value).unwrap();
        assert_eq!(decoded, report);
    }

    #[test]
    fn test_publish_uses_custom_keys() {
        let temp_dir = TempDir::new().unwrap();
        let env_file = temp_dir.path().join("github_env");

        EnvPublisher::new(&env_file)
            .with_keys("YEW_EXAMPLE_SIZES", "ISSUE")
            .publish("report", "12")
            .unwrap();

        let contents = std::fs::read_to_string(&env_file).unwrap();
        assert!(contents.contains("YEW_EXAMPLE_SIZES=\"report\"\n"));
        assert!(contents.ends_with("ISSUE=12\n"));
    }

    #[test]
    fn test_publish_rejects_identifier_with_line_break() {
        let temp_dir = TempDir::new().unwrap();
        let env_file = temp_dir.path().join("github_env");
        std::fs::write(&env_file, "EXISTING=1\n").unwrap();

        let err = EnvPublisher::new(&env_file)
            .publish("report", "12\nINJECTED=1")
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SizeReportError>(),
            Some(SizeReportError::InvalidIdentifier { .. })
        ));
        assert_eq!(std::fs::read_to_string(&env_file).unwrap(), "EXISTING=1\n");
    }

    #[test]
    fn test_publish_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let env_file = temp_dir.path().join("missing").join("github_env");

        let err = EnvPublisher::new(&env_file)
            .publish("report", "1")
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SizeReportError>(),
            Some(SizeReportError::Io { .. })
        ));
    }
}
