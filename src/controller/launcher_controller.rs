//! Launcher controller implementation
//!
//! Turns user actions into registry mutations, process launches and
//! background changes, and reports each outcome as a [`StatusMessage`].

use crate::background::load_background_image;
use crate::config::{ConfigManager, LaunchRecord};
use crate::controller::grid::{GridCell, button_grid};
use crate::error::get_user_friendly_error;
use crate::launcher::{self, LaunchStatus};
use crate::registry::LaunchRegistry;
use crate::utils::clipboard::{ClipboardBackend, SystemClipboard};
use image::RgbaImage;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Colour category of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Neutral hint (startup prompt)
    Info,
    /// Action completed
    Success,
    /// Action failed
    Failure,
    /// A button was removed
    Removed,
}

/// One line for the status label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Text to show
    pub text: String,
    /// How to colour it
    pub kind: StatusKind,
}

impl StatusMessage {
    /// Informational message
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    /// Success message
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    /// Failure message
    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Failure,
        }
    }

    /// Status shown before the user has done anything
    pub fn initial() -> Self {
        Self::info("Select an application")
    }
}

/// Native prompts used by the add-button flow after the name is known
///
/// Returning `None` from a picker cancels the whole flow.
pub trait AddPrompts {
    /// Choose the executable or script
    fn pick_target(&mut self) -> Option<PathBuf>;
    /// Choose the working directory
    fn pick_work_dir(&mut self) -> Option<PathBuf>;
    /// Ask whether to run through the command interpreter
    fn confirm_shell(&mut self) -> bool;
    /// Ask whether to open a new console
    fn confirm_new_console(&mut self) -> bool;
}

/// Collect a new record named `name` from `prompts`
///
/// Stops at the first cancelled step: a blank name, no target, or no working
/// directory yields `None` and no later prompt is shown.
pub fn prompt_new_record(name: &str, prompts: &mut impl AddPrompts) -> Option<LaunchRecord> {
    let name = name.trim();
    if name.is_empty() {
        info!("Add button cancelled: empty name");
        return None;
    }
    let Some(target) = prompts.pick_target() else {
        info!("Add button cancelled at target selection");
        return None;
    };
    let Some(work_dir) = prompts.pick_work_dir() else {
        info!("Add button cancelled at working directory selection");
        return None;
    };
    let use_shell = prompts.confirm_shell();
    let new_console = prompts.confirm_new_console();

    Some(LaunchRecord::new(
        name,
        target.to_string_lossy(),
        work_dir.to_string_lossy(),
        use_shell,
        new_console,
    ))
}

/// A background image ready to show
#[derive(Debug)]
pub struct BackgroundChange {
    /// Decoded image at canvas size
    pub image: RgbaImage,
    /// Set when the choice could not be written to the background config
    pub save_failure: Option<StatusMessage>,
}

/// Application logic controller
pub struct LauncherController<C: ClipboardBackend = SystemClipboard> {
    registry: LaunchRegistry,
    background_config_path: PathBuf,
    clipboard: C,
}

impl LauncherController<SystemClipboard> {
    /// Load the registry from the data directory and use the system clipboard
    pub fn load_default() -> crate::error::Result<Self> {
        Ok(Self::new(
            LaunchRegistry::load_default()?,
            ConfigManager::get_background_path(),
            SystemClipboard,
        ))
    }
}

impl<C: ClipboardBackend> LauncherController<C> {
    /// Create a controller around an already loaded registry
    pub fn new(registry: LaunchRegistry, background_config_path: PathBuf, clipboard: C) -> Self {
        Self {
            registry,
            background_config_path,
            clipboard,
        }
    }

    /// The registry backing the buttons
    pub fn registry(&self) -> &LaunchRegistry {
        &self.registry
    }

    /// The clipboard backend
    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }

    /// Current button layout
    pub fn grid(&self) -> Vec<GridCell> {
        button_grid(self.registry.records())
    }

    /// Launch the record at `index`
    pub fn run(&self, index: usize) -> StatusMessage {
        let Some(record) = self.registry.records().get(index) else {
            warn!("Run requested for unknown button index {}", index);
            return StatusMessage::failure("That button no longer exists");
        };

        let outcome = launcher::launch(record);
        match outcome.status {
            LaunchStatus::Success => StatusMessage::success(outcome.message),
            LaunchStatus::Failure => StatusMessage::failure(outcome.message),
        }
    }

    /// Add a button named `name`, asking `prompts` for the rest
    ///
    /// Returns `None` when the flow is cancelled; nothing is registered in
    /// that case. See [`prompt_new_record`].
    pub fn run_add_flow(
        &mut self,
        name: &str,
        prompts: &mut impl AddPrompts,
    ) -> Option<StatusMessage> {
        prompt_new_record(name, prompts).map(|record| self.add(record))
    }

    /// Append a record
    pub fn add(&mut self, record: LaunchRecord) -> StatusMessage {
        let name = record.name.clone();
        match self.registry.add(record) {
            Ok(()) => StatusMessage::success(format!("{name} added")),
            Err(e) => {
                warn!("Failed to save after adding {}: {}", name, e);
                StatusMessage::failure(get_user_friendly_error(&e))
            }
        }
    }

    /// Remove every button named `name`
    pub fn delete(&mut self, name: &str) -> StatusMessage {
        match self.registry.remove(name) {
            Ok(0) => {
                warn!("Delete requested for unknown button {}", name);
                StatusMessage::failure(format!("{name} no longer exists"))
            }
            Ok(_) => StatusMessage {
                text: format!("{name} deleted"),
                kind: StatusKind::Removed,
            },
            Err(e) => {
                warn!("Failed to save after deleting {}: {}", name, e);
                StatusMessage::failure(get_user_friendly_error(&e))
            }
        }
    }

    /// Copy the button configuration to the clipboard
    pub fn export_to_clipboard(&mut self) -> StatusMessage {
        let result = self
            .registry
            .export_text()
            .and_then(|text| self.clipboard.set_text(&text));
        match result {
            Ok(()) => {
                info!("Exported {} records to clipboard", self.registry.len());
                StatusMessage::success("Button configuration copied to clipboard")
            }
            Err(e) => {
                warn!("Export failed: {}", e);
                StatusMessage::failure(get_user_friendly_error(&e))
            }
        }
    }

    /// Replace the button configuration with the clipboard contents
    ///
    /// The registry is untouched unless the whole payload is valid. A valid
    /// payload that cannot be saved still replaces the in-memory buttons, so
    /// callers must redraw the grid whatever the returned status.
    pub fn import_from_clipboard(&mut self) -> StatusMessage {
        let result = self
            .clipboard
            .get_text()
            .and_then(|text| self.registry.import_text(&text));
        match result {
            Ok(count) => StatusMessage::success(format!(
                "Button configuration imported from clipboard ({count} buttons)"
            )),
            Err(e) => {
                warn!("Import failed: {}", e);
                StatusMessage::failure(get_user_friendly_error(&e))
            }
        }
    }

    /// Load `image_path` as the background and remember it
    ///
    /// A decode failure leaves the stored path alone and the returned status
    /// explains why. A decoded image is always returned; if its path cannot
    /// be saved, [`BackgroundChange::save_failure`] says so.
    pub fn change_background(
        &mut self,
        image_path: &Path,
    ) -> Result<BackgroundChange, StatusMessage> {
        let image = load_background_image(image_path).map_err(|e| {
            warn!("{}", e);
            StatusMessage::failure(get_user_friendly_error(&e))
        })?;

        let save_failure =
            match ConfigManager::save_background_to(&self.background_config_path, image_path) {
                Ok(()) => None,
                Err(e) => {
                    warn!("Failed to save background config: {}", e);
                    Some(StatusMessage::failure(format!(
                        "Background not saved, it will be lost on restart: {}",
                        get_user_friendly_error(&e)
                    )))
                }
            };

        Ok(BackgroundChange {
            image,
            save_failure,
        })
    }

    /// Background to show at startup, if one was saved and still exists
    pub fn restore_background(&self) -> Option<Result<RgbaImage, StatusMessage>> {
        let config = ConfigManager::load_background_from(&self.background_config_path);
        let path = config.usable_path()?;
        Some(load_background_image(path).map_err(|e| {
            warn!("{}", e);
            StatusMessage::failure(get_user_friendly_error(&e))
        }))
    }
}
