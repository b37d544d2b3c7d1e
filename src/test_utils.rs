//! Shared test utilities for `QuickLaunch` unit tests.
//!
//! Only compiled during testing (`#[cfg(test)]`).

use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

/// Serializes tests that point APPDATA somewhere else.
static APPDATA_LOCK: Mutex<()> = Mutex::new(());

/// Create a temporary test directory that is removed when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// RAII guard that points APPDATA at a temp directory for one test and
/// restores the previous value on drop.
///
/// The guard holds `APPDATA_LOCK` for its whole lifetime, so only one test
/// at a time sees a modified environment.
pub struct AppdataGuard {
    original: Option<String>,
    _lock: MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only environment mutation, serialized by APPDATA_LOCK"
)]
impl AppdataGuard {
    /// Set APPDATA to `temp_dir` until the guard is dropped.
    pub fn new(temp_dir: &TempDir) -> Self {
        let lock = APPDATA_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);

        let original = std::env::var("APPDATA").ok();
        // SAFETY: APPDATA_LOCK is held, so no other test reads or writes
        // APPDATA while it is changed.
        unsafe {
            std::env::set_var("APPDATA", temp_dir.path());
        }
        Self {
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only environment mutation, serialized by APPDATA_LOCK"
)]
impl Drop for AppdataGuard {
    fn drop(&mut self) {
        // SAFETY: the lock is still held until this guard's fields drop.
        unsafe {
            match &self.original {
                Some(original) => std::env::set_var("APPDATA", original),
                None => std::env::remove_var("APPDATA"),
            }
        }
    }
}
