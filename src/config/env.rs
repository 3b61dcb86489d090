//! Values supplied by the CI environment
//!
//! Read once at process start and passed down explicitly, so nothing below the
//! command layer looks at process state.

use crate::error::SizeReportError;
use std::path::{Path, PathBuf};

/// Variable holding the pull request / issue number
pub const ISSUE_NUMBER_VAR: &str = "ISSUE_NUMBER";

/// Variable holding the path of the CI environment file
pub const ENV_FILE_VAR: &str = "GITHUB_ENV";

/// Reject an identifier that would add lines to the `KEY=value` environment file
pub fn check_identifier(value: &str) -> Result<&str, SizeReportError> {
    if value.contains(['\n', '\r']) {
        return Err(SizeReportError::InvalidIdentifier {
            value: value.to_string(),
        });
    }
    Ok(value)
}

/// Environment-provided inputs of the pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvBindings {
    /// Pull request / issue number, if set
    pub issue_number: Option<String>,
    /// CI environment file, if set
    pub env_file: Option<PathBuf>,
}

impl EnvBindings {
    /// Capture the bindings from the current process environment
    pub fn from_process_env() -> Self {
        Self {
            issue_number: std::env::var(ISSUE_NUMBER_VAR).ok(),
            env_file: std::env::var_os(ENV_FILE_VAR).map(PathBuf::from),
        }
    }

    /// The issue number, or a configuration error if it is unset, blank or
    /// spans several lines
    pub fn require_issue_number(&self) -> Result<&str, SizeReportError> {
        let value = self
            .issue_number
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| SizeReportError::MissingIdentifier {
                variable: ISSUE_NUMBER_VAR.to_string(),
            })?;
        check_identifier(value)
    }

    /// The environment file path, or a configuration error if it is unset
    pub fn require_env_file(&self) -> Result<&Path, SizeReportError> {
        self.env_file
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or_else(|| SizeReportError::MissingEnvFile {
                variable: ENV_FILE_VAR.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_issue_number_trims_value() {
        let env = EnvBindings {
            issue_number: Some(" 2739\n".to_string()),
            env_file: None,
        };

        assert_eq!(env.require_issue_number().unwrap(), "2739");
    }

    #[test]
    fn test_require_issue_number_rejects_unset_and_blank() {
        for issue_number in [None, Some(String::new()), Some("   ".to_string())] {
            let env = EnvBindings {
                issue_number,
                env_file: None,
            };
            assert!(matches!(
                env.require_issue_number(),
                Err(SizeReportError::MissingIdentifier { .. })
            ));
        }
    }

    #[test]
    fn test_require_issue_number_rejects_embedded_line_breaks() {
        for value in ["12\nEXTRA=1", "12\rEXTRA=1", "12\r\nEXTRA=1"] {
            let env = EnvBindings {
                issue_number: Some(value.to_string()),
                env_file: None,
            };
            assert!(matches!(
                env.require_issue_number(),
                Err(SizeReportError::InvalidIdentifier { .. })
            ));
        }
    }

    #[test]
    fn test_require_env_file() {
        let unset = EnvBindings::default();
        assert!(matches!(
            unset.require_env_file(),
            Err(SizeReportError::MissingEnvFile { .. })
        ));

        let set = EnvBindings {
            issue_number: None,
            env_file: Some(PathBuf::from("/tmp/github_env")),
        };
        assert_eq!(set.require_env_file().unwrap(), Path::new("/tmp/github_env"));
    }
}
