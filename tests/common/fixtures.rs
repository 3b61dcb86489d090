//! Test fixture helpers for creating checkout layouts
//!
//! Builds `<root>/examples/<name>/dist/*.wasm` trees the way the CI job sees
//! them after building both variants.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// WASM magic number and version, used as bundle content
pub const WASM_MAGIC_HEADER: &[u8] = &[0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00];

/// Write a bundle of exactly `bytes` bytes for `example` under `root`
pub fn write_bundle(root: &Path, example: &str, file: &str, bytes: usize) -> anyhow::Result<PathBuf> {
    let dist = root.join("examples").join(example).join("dist");
    fs::create_dir_all(&dist)?;

    let mut contents = WASM_MAGIC_HEADER.to_vec();
    contents.resize(bytes, 0);

    let path = dist.join(file);
    fs::write(&path, contents)?;
    Ok(path)
}

/// A temporary workspace with `master/` and `pr/` checkouts
///
/// # Returns
///
/// A tuple of (TempDir, master root, pr root) - the TempDir must be kept alive
pub fn create_checkouts(
    master: &[(&str, usize)],
    pr: &[(&str, usize)],
) -> anyhow::Result<(TempDir, PathBuf, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let master_root = temp_dir.path().join("master");
    let pr_root = temp_dir.path().join("pr");
    fs::create_dir_all(&master_root)?;
    fs::create_dir_all(&pr_root)?;

    for (example, bytes) in master {
        write_bundle(&master_root, example, &format!("{}_bg.wasm", example), *bytes)?;
    }
    for (example, bytes) in pr {
        write_bundle(&pr_root, example, &format!("{}_bg.wasm", example), *bytes)?;
    }

    Ok((temp_dir, master_root, pr_root))
}
