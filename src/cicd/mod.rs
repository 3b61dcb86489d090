//! CI/CD integration module
//!
//! Provides:
//! - The interchange file connecting the collect and render jobs
//! - Environment file publishing for the commenting step
//! - Console summaries for job logs

pub mod display;
pub mod handoff;
pub mod publisher;

pub use handoff::{HandoffFile, HandoffPayload, DEFAULT_HANDOFF_PATH};
pub use publisher::{EnvPublisher, DEFAULT_ISSUE_KEY, DEFAULT_REPORT_KEY};
