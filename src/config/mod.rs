//! Configuration management module
//!
//! This module resolves where `QuickLaunch` keeps its files and defines the
//! persisted data models. Files live in %APPDATA%\QuickLaunch: `apps.json`
//! for the button list and `background.txt` for the background image path.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::{BackgroundConfig, LaunchRecord};
