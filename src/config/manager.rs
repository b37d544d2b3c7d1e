//! Configuration manager for locating and persisting `QuickLaunch` files
//!
//! This module provides the data directory layout (%APPDATA%\QuickLaunch),
//! atomic file writes shared by every persisted file, and loading/saving of
//! the background image choice.

use crate::config::models::BackgroundConfig;
use crate::error::{QuickLaunchError, Result, StringError};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File name of the button list inside the data directory
pub const REGISTRY_FILE_NAME: &str = "apps.json";

/// File name of the background image path inside the data directory
pub const BACKGROUND_FILE_NAME: &str = "background.txt";

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the data directory
    ///
    /// Returns: %APPDATA%\QuickLaunch (or `./QuickLaunch` when APPDATA is unset)
    pub fn get_data_dir() -> PathBuf {
        let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(appdata).join("QuickLaunch")
    }

    /// Get the path to the button list file
    pub fn get_registry_path() -> PathBuf {
        Self::get_data_dir().join(REGISTRY_FILE_NAME)
    }

    /// Get the path to the background config file
    pub fn get_background_path() -> PathBuf {
        Self::get_data_dir().join(BACKGROUND_FILE_NAME)
    }

    /// Ensure the data directory exists
    pub fn ensure_data_dir() -> Result<PathBuf> {
        let data_dir = Self::get_data_dir();
        std::fs::create_dir_all(&data_dir)?;
        Ok(data_dir)
    }

    /// Write `contents` to `path` atomically
    ///
    /// Writes into a temporary file in the same directory and renames it over
    /// the destination, so a crash mid-write never leaves a truncated file.
    pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
        let dir = path.parent().ok_or_else(|| {
            QuickLaunchError::ConfigError(StringError::new(format!(
                "Invalid file path: {}",
                path.display()
            )))
        })?;
        std::fs::create_dir_all(dir)?;

        let mut temp = tempfile::NamedTempFile::new_in(dir)?;
        temp.write_all(contents.as_bytes())?;
        temp.flush()?;
        temp.persist(path).map_err(|e| QuickLaunchError::IoError(e.error))?;

        debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }

    /// Load the background config from `path`
    ///
    /// A missing or unreadable file yields an empty config; the file is a
    /// convenience and never blocks startup.
    pub fn load_background_from(path: &Path) -> BackgroundConfig {
        if !path.exists() {
            debug!("No background config at {}", path.display());
            return BackgroundConfig::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let trimmed = contents.trim();
                if trimmed.is_empty() {
                    return BackgroundConfig::default();
                }
                info!("Background config loaded: {}", trimmed);
                BackgroundConfig {
                    image_path: Some(PathBuf::from(trimmed)),
                }
            }
            Err(e) => {
                warn!("Failed to read background config, ignoring it: {}", e);
                BackgroundConfig::default()
            }
        }
    }

    /// Save the background image path to `path` as a single line
    pub fn save_background_to(path: &Path, image_path: &Path) -> Result<()> {
        Self::write_atomic(path, &image_path.to_string_lossy())?;
        info!("Background config saved: {}", image_path.display());
        Ok(())
    }
}
