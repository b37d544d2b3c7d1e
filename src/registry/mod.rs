//! Launch registry
//!
//! Owns the ordered list of [`LaunchRecord`]s and keeps `apps.json` in sync
//! with it: every mutation is written back to disk before the method returns.
//!
//! # Storage format
//!
//! The file holds a JSON array of 5-element arrays:
//!
//! ```text
//! [["Notepad","notepad.exe","C:\\",false,false]]
//! ```
//!
//! The clipboard export uses the same shape, pretty-printed with a 4-space
//! indent and non-ASCII characters kept as-is.

use crate::config::models::{LaunchRecord, describe_json};
use crate::config::{ConfigManager, manager::REGISTRY_FILE_NAME};
use crate::error::{QuickLaunchError, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Suffix appended to a storage file that could not be parsed at startup
const CORRUPT_SUFFIX: &str = "corrupt";

/// Ordered, persisted collection of launch records
#[derive(Debug)]
pub struct LaunchRegistry {
    records: Vec<LaunchRecord>,
    storage_path: PathBuf,
}

impl LaunchRegistry {
    /// Load the registry from the default location in the data directory
    pub fn load_default() -> Result<Self> {
        Self::load(ConfigManager::get_registry_path())
    }

    /// Load the registry from `storage_path`
    ///
    /// A missing file yields an empty registry. A file that cannot be parsed
    /// is moved aside to `apps.json.corrupt` and the registry starts empty,
    /// so the next save cannot silently destroy the user's only copy.
    pub fn load(storage_path: impl Into<PathBuf>) -> Result<Self> {
        let storage_path = storage_path.into();

        if !storage_path.exists() {
            info!(
                "Registry file {} not found, starting with no buttons",
                storage_path.display()
            );
            return Ok(Self {
                records: Vec::new(),
                storage_path,
            });
        }

        let json = std::fs::read_to_string(&storage_path)?;
        let records = match serde_json::from_str::<Vec<LaunchRecord>>(&json) {
            Ok(records) => {
                info!("Registry loaded with {} records", records.len());
                records
            }
            Err(e) => {
                warn!("Failed to parse registry, starting empty: {}", e);
                Self::quarantine(&storage_path);
                Vec::new()
            }
        };

        Ok(Self {
            records,
            storage_path,
        })
    }

    fn quarantine(storage_path: &Path) {
        let file_name = storage_path
            .file_name()
            .map_or_else(|| REGISTRY_FILE_NAME.into(), |n| n.to_string_lossy());
        let backup = storage_path.with_file_name(format!("{file_name}.{CORRUPT_SUFFIX}"));
        match std::fs::rename(storage_path, &backup) {
            Ok(()) => warn!("Corrupt registry moved to {}", backup.display()),
            Err(e) => warn!("Failed to move corrupt registry aside: {}", e),
        }
    }

    /// Records in insertion order
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Path of the backing file
    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    /// Append a record and persist
    ///
    /// The record stays in memory even when the write fails; the error is
    /// returned so the caller can tell the user their change is not saved.
    pub fn add(&mut self, record: LaunchRecord) -> Result<()> {
        info!("Adding launch record: {} ({})", record.name, record.target);
        self.records.push(record);
        self.persist()
    }

    /// Remove every record named `name` and persist
    ///
    /// Returns how many records were removed. Remaining records keep their
    /// relative order.
    pub fn remove(&mut self, name: &str) -> Result<usize> {
        let before = self.records.len();
        self.records.retain(|record| record.name != name);
        let removed = before - self.records.len();
        info!("Removed {} record(s) named {}", removed, name);
        self.persist()?;
        Ok(removed)
    }

    /// Replace the whole registry and persist
    pub fn replace_all(&mut self, records: Vec<LaunchRecord>) -> Result<()> {
        info!(
            "Replacing {} record(s) with {} imported record(s)",
            self.records.len(),
            records.len()
        );
        self.records = records;
        self.persist()
    }

    /// Parse clipboard text and, only if every element is valid, replace the
    /// registry with it
    ///
    /// Returns the number of imported records. On any parse or validation
    /// error the registry is left exactly as it was.
    pub fn import_text(&mut self, text: &str) -> Result<usize> {
        let records = parse_import(text)?;
        let count = records.len();
        self.replace_all(records)?;
        Ok(count)
    }

    /// Export the registry as pretty-printed JSON
    pub fn export_text(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.records.serialize(&mut serializer)?;
        String::from_utf8(buf).map_err(|e| QuickLaunchError::ConfigError(Box::new(e)))
    }

    /// Write the full registry to disk, overwriting the previous contents
    pub fn persist(&self) -> Result<()> {
        let json = serde_json::to_string(&self.records)?;
        ConfigManager::write_atomic(&self.storage_path, &json)?;
        info!(
            "Registry saved ({} records) to {}",
            self.records.len(),
            self.storage_path.display()
        );
        Ok(())
    }
}

/// Parse clipboard text into launch records
///
/// The text must be a JSON list whose every element is a valid record
/// (see [`LaunchRecord::from_json_value`]). The first bad element is
/// reported with its position.
pub fn parse_import(text: &str) -> Result<Vec<LaunchRecord>> {
    let value: Value = serde_json::from_str(text).map_err(QuickLaunchError::ImportUnparseable)?;

    let Value::Array(items) = value else {
        return Err(QuickLaunchError::ImportNotAList(
            describe_json(&value).to_string(),
        ));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            LaunchRecord::from_json_value(item)
                .map_err(|reason| QuickLaunchError::InvalidRecord { index, reason })
        })
        .collect()
}
