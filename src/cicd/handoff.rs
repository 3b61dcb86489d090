//! Interchange file between the `collect` and `render` jobs
//!
//! The collect job runs against freshly built checkouts; the render job may run
//! in a separate sandbox. The only thing passed between them is this file.

use crate::comparison::JoinedRow;
use crate::config::check_identifier;
use crate::error::SizeReportError;
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default interchange location, relative to the working directory
pub const DEFAULT_HANDOFF_PATH: &str = "size-cmp-info/.SIZE_CMP_INFO";

/// Joined sizes plus the pull request they belong to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoffPayload {
    /// Joined rows in report order
    pub sizes: Vec<JoinedRow>,
    /// Pull request / issue number to comment on
    pub issue_number: String,
}

/// Reads and writes the interchange file
pub struct HandoffFile<FS: FileSystem = RealFileSystem> {
    path: PathBuf,
    fs: FS,
}

impl HandoffFile<RealFileSystem> {
    /// Interchange file at `path` on the real filesystem
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_fs(path, RealFileSystem)
    }
}

impl<FS: FileSystem> HandoffFile<FS> {
    /// Interchange file with a custom filesystem implementation
    pub fn with_fs(path: impl Into<PathBuf>, fs: FS) -> Self {
        Self {
            path: path.into(),
            fs,
        }
    }

    /// Location of the interchange file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the payload, replacing whatever the file held before
    ///
    /// An empty or multi-line identifier is rejected before anything touches
    /// the disk.
    pub fn write(&self, payload: &HandoffPayload) -> Result<()> {
        if payload.issue_number.trim().is_empty() {
            return Err(SizeReportError::MissingIdentifier {
                variable: "issue_number".to_string(),
            }
            .into());
        }
        check_identifier(&payload.issue_number)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.fs
                .create_dir_all(parent)
                .map_err(|source| SizeReportError::Io {
                    context: format!("creating {}", parent.display()),
                    source,
                })?;
        }

        let contents =
            serde_json::to_string(payload).context("Failed to serialize size comparison")?;
        self.fs
            .write(&self.path, contents)
            .map_err(|source| SizeReportError::Io {
                context: format!("writing {}", self.path.display()),
                source,
            })?;

        log::info!(
            "Wrote {} rows for #{} to {}",
            payload.sizes.len(),
            payload.issue_number,
            self.path.display()
        );
        Ok(())
    }

    /// Read and validate the payload
    pub fn read(&self) -> Result<HandoffPayload> {
        let contents = match self.fs.read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SizeReportError::HandoffNotFound {
                    path: self.path.clone(),
                }
                .into());
            }
            Err(source) => {
                return Err(SizeReportError::Io {
                    context: format!("reading {}", self.path.display()),
                    source,
                }
                .into());
            }
        };

        let payload: HandoffPayload =
            serde_json::from_str(&contents).map_err(|e| SizeReportError::MalformedHandoff {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        if payload.issue_number.trim().is_empty() {
            return Err(SizeReportError::MalformedHandoff {
                path: self.path.clone(),
                reason: "issue_number is empty".to_string(),
            }
            .into());
        }
        if check_identifier(&payload.issue_number).is_err() {
            return Err(SizeReportError::MalformedHandoff {
                path: self.path.clone(),
                reason: "issue_number contains a line break".to_string(),
            }
            .into());
        }

        log::debug!(
            "Read {} rows for #{} from {}",
            payload.sizes.len(),
            payload.issue_number,
            self.path.display()
        );
        Ok(payload)
    }
}
