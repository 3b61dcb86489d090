//! Configuration file data structures

use crate::cicd::{DEFAULT_HANDOFF_PATH, DEFAULT_ISSUE_KEY, DEFAULT_REPORT_KEY};
use crate::collector::BundleLayout;
use crate::comparison::DEFAULT_THRESHOLD;
use crate::error::SizeReportError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".size-report.toml";

/// wasm-size-report configuration file structure
///
/// Every key is optional; missing keys take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Significance threshold as a fraction (0.01 = 1%)
    pub threshold: f64,

    /// Interchange file written by `collect` and read by `render`
    pub handoff_path: PathBuf,

    /// Folder under each checkout root holding the examples
    pub examples_dir: String,

    /// Build output folder inside each example
    pub dist_dir: String,

    /// Extension of counted bundle files
    pub artifact_extension: String,

    /// Environment key for the rendered report
    pub report_key: String,

    /// Environment key for the pull request number
    pub issue_key: String,
}

impl Default for ConfigFile {
    fn default() -> Self {
        let layout = BundleLayout::default();
        Self {
            threshold: DEFAULT_THRESHOLD,
            handoff_path: PathBuf::from(DEFAULT_HANDOFF_PATH),
            examples_dir: layout.examples_dir,
            dist_dir: layout.dist_dir,
            artifact_extension: layout.extension,
            report_key: DEFAULT_REPORT_KEY.to_string(),
            issue_key: DEFAULT_ISSUE_KEY.to_string(),
        }
    }
}

impl ConfigFile {
    /// Check values that deserialize fine but make no sense
    pub fn validate(&self) -> Result<(), SizeReportError> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(SizeReportError::InvalidThreshold {
                value: self.threshold,
            });
        }
        Ok(())
    }

    /// Bundle layout used by the collector
    pub fn layout(&self) -> BundleLayout {
        BundleLayout {
            examples_dir: self.examples_dir.clone(),
            dist_dir: self.dist_dir.clone(),
            extension: self.artifact_extension.trim_start_matches('.').to_string(),
        }
    }
}
