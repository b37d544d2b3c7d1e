//! GUI module
//!
//! Provides the Slint-based main window, the delete window and the native
//! dialogs used by the add and background flows.

pub mod dialogs;
pub mod gui_controller;

pub use gui_controller::GuiController;
