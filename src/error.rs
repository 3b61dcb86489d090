//! Error types with contextual suggestions
//!
//! Domain failures are a [`SizeReportError`]; everything else travels as an
//! `anyhow::Error` with context attached. [`ErrorFormatter`] renders either kind
//! for the terminal and maps it to a process exit code.
//!
//! # Examples
//!
//! ```
//! use wasm_size_report::error::SizeReportError;
//!
//! let err = SizeReportError::MissingIdentifier {
//!     variable: "ISSUE_NUMBER".to_string(),
//! };
//!
//! assert_eq!(err.exit_code(), 78);
//! assert!(err.suggestion().unwrap().contains("ISSUE_NUMBER"));
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the size report pipeline
#[derive(Error, Debug)]
pub enum SizeReportError {
    /// The pull request / issue identifier could not be resolved
    #[error("Issue identifier is missing or empty")]
    MissingIdentifier {
        /// Environment variable the identifier is read from
        variable: String,
    },

    /// The identifier would break the one-line `KEY=value` format
    #[error("Issue identifier contains a line break: {value:?}")]
    InvalidIdentifier {
        /// Rejected value
        value: String,
    },

    /// The environment hand-off file path is not configured
    #[error("Environment file path is not set")]
    MissingEnvFile {
        /// Environment variable the path is read from
        variable: String,
    },

    /// The interchange file written by `collect` does not exist
    #[error("Hand-off file not found: {path}")]
    HandoffNotFound {
        /// Expected location of the interchange file
        path: PathBuf,
    },

    /// The interchange file exists but does not have the expected shape
    #[error("Malformed hand-off file {path}: {reason}")]
    MalformedHandoff {
        /// Location of the interchange file
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// Significance threshold is negative or not a finite number
    #[error("Invalid significance threshold: {value}")]
    InvalidThreshold {
        /// Rejected value
        value: f64,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl SizeReportError {
    /// Get actionable suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::MissingIdentifier { variable } => Some(format!(
                "Export {} with the pull request number before running 'collect'",
                variable
            )),
            Self::InvalidIdentifier { .. } => Some(
                "Pass the pull request number alone, without embedded newlines".to_string(),
            ),
            Self::MissingEnvFile { variable } => Some(format!(
                "Run inside the CI job, or export {} pointing at a writable file",
                variable
            )),
            Self::HandoffNotFound { .. } => Some(
                "Run 'wasm-size-report collect <BASELINE_ROOT> <CANDIDATE_ROOT>' first".to_string(),
            ),
            Self::MalformedHandoff { .. } => Some(
                "The file must look like {\"sizes\": [[name, [baseline, candidate]]], \"issue_number\": \"...\"}"
                    .to_string(),
            ),
            Self::InvalidThreshold { .. } => Some(
                "Use a non-negative fraction, e.g. threshold = 0.01 for 1%".to_string(),
            ),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Follows sysexits.h conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingIdentifier { .. } => 78, // EX_CONFIG
            Self::InvalidIdentifier { .. } => 78, // EX_CONFIG
            Self::MissingEnvFile { .. } => 78,    // EX_CONFIG
            Self::HandoffNotFound { .. } => 66,   // EX_NOINPUT
            Self::MalformedHandoff { .. } => 65,  // EX_DATAERR
            Self::InvalidThreshold { .. } => 78,  // EX_CONFIG
            Self::Io { .. } => 74,                // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and a suggestion when one is known
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(report_error) = Self::find(error) {
            if let Some(suggestion) = report_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        Self::find(error).map_or(1, SizeReportError::exit_code)
    }

    // Context layers wrap the domain error, so look through the whole chain.
    fn find(error: &anyhow::Error) -> Option<&SizeReportError> {
        error
            .chain()
            .find_map(|cause| cause.downcast_ref::<SizeReportError>())
    }
}
