//! Application logic controller module
//!
//! This module holds everything the window does that is not drawing: it
//! owns the [`LaunchRegistry`](crate::registry::LaunchRegistry), routes every
//! user action through it, and answers with a [`StatusMessage`] for the
//! status line.
//!
//! # Event Flow
//!
//! ```text
//! button click ──> LauncherController ──> launcher::launch
//!                        │
//!                        ├──> LaunchRegistry (add / remove / import) ──> apps.json
//!                        │
//!                        └──> StatusMessage + button_grid ──> GUI
//! ```
//!
//! The GUI keeps a single controller behind `Rc<RefCell<_>>` and rebuilds
//! its button grid from [`button_grid`] after every mutation.

pub mod grid;
pub mod launcher_controller;

pub use grid::{GRID_COLUMNS, GridCell, button_grid};
pub use launcher_controller::{
    AddPrompts, BackgroundChange, LauncherController, StatusKind, StatusMessage,
    prompt_new_record,
};
