//! `QuickLaunch` - a panel of buttons that start your programs and scripts
//!
//! Each button is a [`LaunchRecord`]: a program or script, the directory to
//! start it in, and whether to go through the command interpreter. The list
//! is kept in a [`LaunchRegistry`] that is written to disk on every change and
//! can be shared as JSON through the clipboard.
//!
//! The [`LauncherController`] ties the pieces together for the Slint front end
//! in the binary crate.

// Module declarations
pub mod background;
pub mod config;
pub mod controller;
pub mod error;
pub mod launcher;
pub mod registry;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::LaunchRecord;
pub use controller::{LauncherController, StatusKind, StatusMessage};
pub use error::{QuickLaunchError, Result};
pub use registry::LaunchRegistry;
