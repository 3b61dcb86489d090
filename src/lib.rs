#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! wasm-size-report library
//!
//! Size-regression reporting for WASM example bundles in CI. The collect phase
//! measures a baseline and a candidate checkout and writes an interchange file;
//! the render phase turns that file into a markdown comment.
//!
//! # Basic Example
//!
//! Joining, classifying and rendering two size tables:
//!
//! ```
//! use wasm_size_report::collector::SizeTable;
//! use wasm_size_report::comparison::{join_tables, ReportRenderer, SignificanceClassifier};
//!
//! let master: SizeTable = [("counter", 1000), ("router", 4096)].into_iter().collect();
//! let pr: SizeTable = [("counter", 1020), ("router", 4096)].into_iter().collect();
//!
//! let rows = join_tables(&master, &pr);
//! let compared = SignificanceClassifier::default().classify_all(&rows);
//! let report = ReportRenderer::new().render(&compared);
//!
//! assert!(report.contains("| counter | 0.977 | 0.996 | +0.020 | +2.000% |"));
//! assert!(report.contains("The following example has changed its size significantly:"));
//! ```
//!
//! # Advanced Example: Hand-off Between Jobs
//!
//! ```
//! use wasm_size_report::cicd::{HandoffFile, HandoffPayload};
//! use wasm_size_report::comparison::JoinedRow;
//! use tempfile::TempDir;
//!
//! let workspace = TempDir::new().unwrap();
//! let handoff = HandoffFile::new(workspace.path().join(".SIZE_CMP_INFO"));
//!
//! let payload = HandoffPayload {
//!     sizes: vec![JoinedRow {
//!         name: "counter".to_string(),
//!         baseline: None,
//!         candidate: Some(2048),
//!     }],
//!     issue_number: "2739".to_string(),
//! };
//! handoff.write(&payload).unwrap();
//!
//! assert_eq!(handoff.read().unwrap(), payload);
//! ```

/// CI/CD integration: hand-off file, environment publishing, console output
pub mod cicd;
/// Command handlers for CLI operations
pub mod cmd;
/// Example bundle size collection
pub mod collector;
/// Join, significance classification and report rendering
pub mod comparison;
/// Configuration file and CI environment bindings
pub mod config;
/// Error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
