//! `QuickLaunch` - a panel of buttons that start your programs and scripts
//!
//! Loads the saved button list, restores the background image and runs the
//! Slint event loop until the main window is closed.

// Set Windows subsystem to hide console window
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![expect(
    missing_docs,
    reason = "Slint-generated code from include_modules! lacks doc comments"
)]
#![allow(clippy::unwrap_used)] // Slint-generated code from include_modules! uses .unwrap() extensively

// GUI module is only in the binary, not the library
mod gui;

use anyhow::{Context, Result};
use gui::GuiController;
use quicklaunch::{LauncherController, utils};
use tracing::{error, info};

// Include Slint-generated code
slint::include_modules!();

/// Main entry point for the application
fn main() -> Result<()> {
    utils::init_logging().context("Failed to initialize logging system")?;

    info!("QuickLaunch v{} starting...", env!("CARGO_PKG_VERSION"));

    let controller = match LauncherController::load_default() {
        Ok(controller) => controller,
        Err(e) => {
            error!("Failed to load button configuration: {}", e);
            gui::dialogs::show_error(&format!(
                "QuickLaunch could not read its button list:\n\n{}",
                quicklaunch::error::get_user_friendly_error(&e)
            ));
            return Err(e).context("Failed to load button configuration");
        }
    };
    info!(
        "Configuration loaded with {} buttons",
        controller.registry().len()
    );

    let gui_controller =
        GuiController::new(controller).context("Failed to create GUI controller")?;

    info!("Starting GUI event loop");
    gui_controller
        .run()
        .context("GUI event loop terminated with error")?;

    info!("QuickLaunch shutting down");

    Ok(())
}
