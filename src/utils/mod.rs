//! Utility modules
//!
//! Provides clipboard access and logging setup.

pub mod clipboard;
pub mod logging;

pub use clipboard::{ClipboardBackend, MemoryClipboard, SystemClipboard};
pub use logging::init_logging;
