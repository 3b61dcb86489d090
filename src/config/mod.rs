//! Configuration for wasm-size-report
//!
//! This module provides:
//! - .size-report.toml config file support
//! - CI environment bindings (issue number, environment file)

pub mod env;
pub mod file;
pub mod loader;

pub use env::{check_identifier, EnvBindings, ENV_FILE_VAR, ISSUE_NUMBER_VAR};
pub use file::{ConfigFile, CONFIG_FILE_NAME};
pub use loader::ConfigLoader;
