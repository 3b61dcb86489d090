//! Configuration file loading

use super::file::ConfigFile;
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use std::path::Path;

/// Handles loading configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from `path`, falling back to defaults when it does not exist
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use wasm_size_report::config::{ConfigLoader, CONFIG_FILE_NAME};
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new(CONFIG_FILE_NAME))?;
    /// println!("Significance threshold: {}", config.threshold);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<ConfigFile> {
        Self::load_with_fs(path, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(path: &Path, fs: &FS) -> Result<ConfigFile> {
        // Read directly instead of checking exists() first
        let contents = match fs.read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };

        let config: ConfigFile = toml_edit::de::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
