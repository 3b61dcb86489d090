//! Collect command implementation
//!
//! Handles `wasm-size-report collect`, which measures both checkouts, joins the
//! results and writes the interchange file for the render job.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cicd::{display, HandoffFile, HandoffPayload};
use crate::collector::SizeCollector;
use crate::comparison::join_tables;
use crate::config::{ConfigFile, EnvBindings};

/// Collect example sizes from both roots and write the hand-off file
///
/// The issue number is resolved before any scanning, so a misconfigured job
/// leaves no file behind.
///
/// # Examples
///
/// ```no_run
/// use wasm_size_report::cmd::cmd_collect;
/// use wasm_size_report::config::{ConfigFile, EnvBindings};
/// use std::path::Path;
///
/// cmd_collect(
///     Path::new("master"),
///     Path::new("pr"),
///     &ConfigFile::default(),
///     &EnvBindings::from_process_env(),
/// )?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_collect(
    baseline_root: &Path,
    candidate_root: &Path,
    config: &ConfigFile,
    env: &EnvBindings,
) -> Result<HandoffPayload> {
    let issue_number = env
        .require_issue_number()
        .context("Cannot write size comparison without an issue number")?;

    for root in [baseline_root, candidate_root] {
        if !root.is_dir() {
            log::warn!("{} is not a directory; it will contribute no examples", root.display());
        }
    }

    let collector = SizeCollector::new(config.layout());
    let baseline = collector.collect(baseline_root);
    display::print_collection("master", baseline_root, &baseline);
    let candidate = collector.collect(candidate_root);
    display::print_collection("pull request", candidate_root, &candidate);

    let payload = HandoffPayload {
        sizes: join_tables(&baseline, &candidate),
        issue_number: issue_number.to_string(),
    };

    let handoff = HandoffFile::new(&config.handoff_path);
    handoff
        .write(&payload)
        .context("Failed to write size comparison hand-off")?;
    println!("Wrote {}", handoff.path().display());

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::JoinedRow;
    use crate::error::SizeReportError;
    use std::fs;
    use tempfile::TempDir;

    fn write_bundle(root: &Path, example: &str, bytes: usize) {
        let dist = root.join("examples").join(example).join("dist");
        fs::create_dir_all(&dist).unwrap();
        fs::write(dist.join(format!("{}_bg.wasm", example)), vec![0u8; bytes]).unwrap();
    }

    fn config_in(dir: &Path) -> ConfigFile {
        ConfigFile {
            handoff_path: dir.join("size-cmp-info").join(".SIZE_CMP_INFO"),
            ..ConfigFile::default()
        }
    }

    #[test]
    fn test_collect_writes_joined_sizes() {
        let temp_dir = TempDir::new().unwrap();
        let master = temp_dir.path().join("master");
        let pr = temp_dir.path().join("pr");
        write_bundle(&master, "a", 2048);
        write_bundle(&master, "b", 4096);
        write_bundle(&pr, "a", 2048);
        write_bundle(&pr, "c", 8192);

        let config = config_in(temp_dir.path());
        let env = EnvBindings {
            issue_number: Some("42".to_string()),
            env_file: None,
        };

        let payload = cmd_collect(&master, &pr, &config, &env).unwrap();

        assert_eq!(payload.issue_number, "42");
        assert_eq!(
            payload.sizes,
            vec![
                JoinedRow {
                    name: "a".to_string(),
                    baseline: Some(2048),
                    candidate: Some(2048),
                },
                JoinedRow {
                    name: "b".to_string(),
                    baseline: Some(4096),
                    candidate: None,
                },
                JoinedRow {
                    name: "c".to_string(),
                    baseline: None,
                    candidate: Some(8192),
                },
            ]
        );
        assert_eq!(HandoffFile::new(&config.handoff_path).read().unwrap(), payload);
    }

    #[test]
    fn test_collect_without_issue_number_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(temp_dir.path());

        let err = cmd_collect(
            temp_dir.path(),
            temp_dir.path(),
            &config,
            &EnvBindings::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SizeReportError>(),
            Some(SizeReportError::MissingIdentifier { .. })
        ));
        assert!(!config.handoff_path.exists());
    }

    #[test]
    fn test_collect_tolerates_missing_roots() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(temp_dir.path());
        let env = EnvBindings {
            issue_number: Some("1".to_string()),
            env_file: None,
        };

        let payload = cmd_collect(
            &temp_dir.path().join("nope"),
            &temp_dir.path().join("also-nope"),
            &config,
            &env,
        )
        .unwrap();

        assert!(payload.sizes.is_empty());
        assert!(config.handoff_path.exists());
    }
}
