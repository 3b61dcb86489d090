//! Example bundle size collection
//!
//! Walks `<root>/examples/<name>/dist/*.wasm` and sums the bundle sizes of each
//! example. Anything missing or unreadable contributes nothing; a scan never
//! fails as a whole.

use crate::infra::{FileSystem, RealFileSystem};
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::Path;

/// Total bundle size of one example under one build variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeSample {
    /// Example directory name
    pub name: String,
    /// Sum of all matching bundle files, in bytes
    pub bytes: u64,
}

/// Example name to aggregate bundle size for one build variant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeTable {
    sizes: BTreeMap<String, u64>,
}

impl SizeTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sample, replacing any earlier sample with the same name
    pub fn insert(&mut self, sample: SizeSample) {
        self.sizes.insert(sample.name, sample.bytes);
    }

    /// Size of the named example, if it was collected
    pub fn get(&self, name: &str) -> Option<u64> {
        self.sizes.get(name).copied()
    }

    /// Example names in lexicographic order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sizes.keys().map(String::as_str)
    }

    /// Iterate over `(name, bytes)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.sizes.iter().map(|(name, bytes)| (name.as_str(), *bytes))
    }

    /// Number of examples in the table
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// True if no example was collected
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Sum of every example in the table
    pub fn total_bytes(&self) -> u64 {
        self.sizes.values().sum()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for SizeTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, bytes) in iter {
            table.insert(SizeSample {
                name: name.into(),
                bytes,
            });
        }
        table
    }
}

/// Where bundles live relative to a checkout root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleLayout {
    /// Folder holding one subdirectory per example
    pub examples_dir: String,
    /// Build output folder inside each example
    pub dist_dir: String,
    /// Extension of counted bundle files, without the dot
    pub extension: String,
}

impl Default for BundleLayout {
    fn default() -> Self {
        Self {
            examples_dir: "examples".to_string(),
            dist_dir: "dist".to_string(),
            extension: "wasm".to_string(),
        }
    }
}

/// Collects per-example bundle sizes from a checkout
pub struct SizeCollector<FS: FileSystem = RealFileSystem> {
    fs: FS,
    layout: BundleLayout,
}

impl SizeCollector<RealFileSystem> {
    /// Create a collector over the real filesystem
    pub fn new(layout: BundleLayout) -> Self {
        Self::with_fs(RealFileSystem, layout)
    }
}

impl<FS: FileSystem> SizeCollector<FS> {
    /// Create a collector with a custom filesystem implementation
    pub fn with_fs(fs: FS, layout: BundleLayout) -> Self {
        Self { fs, layout }
    }

    /// Collect the size of every example under `root`
    ///
    /// Examples whose bundles add up to zero bytes are left out of the table,
    /// so they join as absent rather than as an empty build.
    pub fn collect(&self, root: &Path) -> SizeTable {
        let mut table = SizeTable::new();
        let examples_dir = root.join(&self.layout.examples_dir);

        let entries = match self.fs.read_dir(&examples_dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Cannot read {}: {}", examples_dir.display(), e);
                return table;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable entry in {}: {}", examples_dir.display(), e);
                    continue;
                }
            };
            let path = entry.path();

            match self.fs.metadata(&path) {
                Ok(meta) if meta.is_dir() => {}
                Ok(_) => {
                    log::info!("{} is not a directory, skipping", path.display());
                    continue;
                }
                Err(e) => {
                    log::warn!("Cannot stat {}: {}", path.display(), e);
                    continue;
                }
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            let bytes = self.bundle_size(&path.join(&self.layout.dist_dir));
            if bytes == 0 {
                log::debug!("{}: no {} output", name, self.layout.extension);
                continue;
            }

            log::debug!("{}: {} bytes", name, bytes);
            table.insert(SizeSample { name, bytes });
        }

        table
    }

    /// Sum the sizes of all bundle files directly inside `dist`
    fn bundle_size(&self, dist: &Path) -> u64 {
        let entries = match self.fs.read_dir(dist) {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!("Cannot read {}: {}", dist.display(), e);
                return 0;
            }
        };

        let extension = OsStr::new(&self.layout.extension);
        entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension() == Some(extension))
            .filter_map(|path| match self.fs.metadata(&path) {
                Ok(meta) if meta.is_file() => Some(meta.len()),
                Ok(_) => None,
                Err(e) => {
                    log::warn!("Cannot stat {}: {}", path.display(), e);
                    None
                }
            })
            .sum()
    }
}
