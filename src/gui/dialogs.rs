//! Native dialogs
//!
//! File and directory pickers and yes/no boxes come from `rfd`. They block
//! the UI thread while open, as native modal dialogs do.

use quicklaunch::background::IMAGE_EXTENSIONS;
use quicklaunch::controller::AddPrompts;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::PathBuf;

/// Prompts for the add-button flow
pub struct RfdAddPrompts;

impl AddPrompts for RfdAddPrompts {
    fn pick_target(&mut self) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Choose an application or script")
            .pick_file()
    }

    fn pick_work_dir(&mut self) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Choose the working directory")
            .pick_folder()
    }

    fn confirm_shell(&mut self) -> bool {
        ask_yes_no("Run mode", "Run through the command prompt?")
    }

    fn confirm_new_console(&mut self) -> bool {
        ask_yes_no("New console", "Open a new console window?")
    }
}

/// Pick a background image
pub fn pick_background_image() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Choose a background image")
        .add_filter("Images", IMAGE_EXTENSIONS)
        .add_filter("All files", &["*"])
        .pick_file()
}

/// Ask before deleting `name`
pub fn confirm_delete(name: &str) -> bool {
    ask_yes_no(
        "Confirm delete",
        &format!("Are you sure you want to delete {name}?"),
    )
}

/// Report a fatal startup problem
pub fn show_error(message: &str) {
    MessageDialog::new()
        .set_title("QuickLaunch - Error")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .set_level(MessageLevel::Error)
        .show();
}

fn ask_yes_no(title: &str, question: &str) -> bool {
    let result = MessageDialog::new()
        .set_title(title)
        .set_description(question)
        .set_buttons(MessageButtons::YesNo)
        .set_level(MessageLevel::Info)
        .show();
    matches!(result, MessageDialogResult::Yes)
}
