//! Clipboard access
//!
//! Button configurations are shared as text on the system clipboard. The
//! [`ClipboardBackend`] trait keeps the controller independent of the real
//! clipboard so import/export can be exercised without a display server.

use crate::error::{QuickLaunchError, Result, StringError};
use cli_clipboard::{ClipboardContext, ClipboardProvider};

/// Read and write plain text on a clipboard
pub trait ClipboardBackend {
    /// Current clipboard text
    fn get_text(&mut self) -> Result<String>;

    /// Replace the clipboard text
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

fn clipboard_error(e: impl std::fmt::Display) -> QuickLaunchError {
    QuickLaunchError::ClipboardError(StringError::new(e.to_string()))
}

impl ClipboardBackend for SystemClipboard {
    fn get_text(&mut self) -> Result<String> {
        let mut ctx = ClipboardContext::new().map_err(clipboard_error)?;
        ctx.get_contents().map_err(clipboard_error)
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut ctx = ClipboardContext::new().map_err(clipboard_error)?;
        ctx.set_contents(text.to_string()).map_err(clipboard_error)
    }
}

/// In-process clipboard for headless use
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    /// Current contents
    pub contents: String,
}

impl ClipboardBackend for MemoryClipboard {
    fn get_text(&mut self) -> Result<String> {
        Ok(self.contents.clone())
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = text.to_string();
        Ok(())
    }
}
