//! GUI controller
//!
//! Connects the Slint windows to the [`LauncherController`]. Every callback
//! runs on the UI thread, borrows the controller for the duration of one
//! action, then redraws the status line and, after a mutation, the button
//! grid.

use crate::gui::dialogs::{self, RfdAddPrompts};
use crate::{ButtonCell, ButtonRow, DeleteWindow, MainWindow};
use anyhow::{Context, Result};
use image::RgbaImage;
use quicklaunch::controller::{
    GRID_COLUMNS, GridCell, LauncherController, StatusKind, StatusMessage, prompt_new_record,
};
use slint::{Color, ComponentHandle, Image, ModelRc, Rgba8Pixel, SharedPixelBuffer, VecModel};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tracing::{info, warn};

type SharedController = Rc<RefCell<LauncherController>>;

/// Owns the main window and wires its callbacks
pub struct GuiController {
    window: MainWindow,
    controller: SharedController,
    /// Kept alive while open; replaced each time the delete window is opened
    delete_window: Rc<RefCell<Option<DeleteWindow>>>,
}

impl GuiController {
    /// Create the main window, restore the saved background and populate the grid
    pub fn new(controller: LauncherController) -> Result<Self> {
        let window = MainWindow::new().context("Failed to create main window")?;
        let gui = Self {
            window,
            controller: Rc::new(RefCell::new(controller)),
            delete_window: Rc::new(RefCell::new(None)),
        };

        show_status(&gui.window, &StatusMessage::initial());
        refresh_buttons(&gui.window, &gui.controller.borrow());
        gui.restore_background();
        gui.connect_callbacks();

        Ok(gui)
    }

    /// Show the main window and run the event loop until it is closed
    pub fn run(self) -> Result<()> {
        self.window.run().context("Slint event loop failed")?;
        Ok(())
    }

    fn restore_background(&self) {
        match self.controller.borrow().restore_background() {
            Some(Ok(image)) => {
                info!("Restored saved background image");
                set_background(&self.window, image);
            }
            Some(Err(status)) => show_status(&self.window, &status),
            None => {}
        }
    }

    fn connect_callbacks(&self) {
        let weak = self.window.as_weak();

        self.window.on_run_app({
            let weak = weak.clone();
            let controller = Rc::clone(&self.controller);
            move |index| {
                let Some(window) = weak.upgrade() else { return };
                let Ok(index) = usize::try_from(index) else { return };
                let status = controller.borrow().run(index);
                show_status(&window, &status);
            }
        });

        self.window.on_change_background({
            let weak = weak.clone();
            let controller = Rc::clone(&self.controller);
            move || {
                let Some(window) = weak.upgrade() else { return };
                let Some(path) = dialogs::pick_background_image() else {
                    return;
                };
                match controller.borrow_mut().change_background(&path) {
                    Ok(change) => {
                        set_background(&window, change.image);
                        if let Some(status) = change.save_failure {
                            show_status(&window, &status);
                        }
                    }
                    Err(status) => show_status(&window, &status),
                }
            }
        });

        self.window.on_add_button({
            let weak = weak.clone();
            move || {
                let Some(window) = weak.upgrade() else { return };
                window.set_name_input("".into());
                window.set_name_prompt_visible(true);
            }
        });

        self.window.on_name_cancelled({
            let weak = weak.clone();
            move || {
                if let Some(window) = weak.upgrade() {
                    window.set_name_prompt_visible(false);
                }
            }
        });

        self.window.on_name_accepted({
            let weak = weak.clone();
            let controller = Rc::clone(&self.controller);
            let delete_window = Rc::clone(&self.delete_window);
            move |name| {
                let Some(window) = weak.upgrade() else { return };
                window.set_name_prompt_visible(false);

                // Let the prompt disappear before the native pickers open
                let weak = weak.clone();
                let controller = Rc::clone(&controller);
                let delete_window = Rc::clone(&delete_window);
                slint::Timer::single_shot(Duration::ZERO, move || {
                    let Some(window) = weak.upgrade() else { return };
                    // Prompts run before borrowing: native dialogs may pump events
                    let Some(record) = prompt_new_record(name.as_str(), &mut RfdAddPrompts)
                    else {
                        return;
                    };
                    let status = controller.borrow_mut().add(record);
                    close_delete_window(&delete_window);
                    refresh_buttons(&window, &controller.borrow());
                    show_status(&window, &status);
                });
            }
        });

        self.window.on_delete_buttons({
            let weak = weak.clone();
            let controller = Rc::clone(&self.controller);
            let delete_window = Rc::clone(&self.delete_window);
            move || {
                let Some(window) = weak.upgrade() else { return };
                if let Err(e) = open_delete_window(&window, &controller, &delete_window) {
                    warn!("Failed to open delete window: {e:#}");
                    show_status(&window, &StatusMessage::failure(format!("{e}")));
                }
            }
        });

        self.window.on_export_buttons({
            let weak = weak.clone();
            let controller = Rc::clone(&self.controller);
            move || {
                let Some(window) = weak.upgrade() else { return };
                let status = controller.borrow_mut().export_to_clipboard();
                show_status(&window, &status);
            }
        });

        self.window.on_import_buttons({
            let controller = Rc::clone(&self.controller);
            let delete_window = Rc::clone(&self.delete_window);
            move || {
                let Some(window) = weak.upgrade() else { return };
                let status = controller.borrow_mut().import_from_clipboard();
                // A failed save still replaces the in-memory buttons
                close_delete_window(&delete_window);
                refresh_buttons(&window, &controller.borrow());
                show_status(&window, &status);
            }
        });
    }
}

/// Open the secondary window with one delete button per record
fn open_delete_window(
    main: &MainWindow,
    controller: &SharedController,
    slot: &Rc<RefCell<Option<DeleteWindow>>>,
) -> Result<()> {
    let delete_window = DeleteWindow::new().context("Failed to create delete window")?;
    delete_window.set_rows(rows_model(&controller.borrow().grid()));

    let main_weak = main.as_weak();
    let delete_weak = delete_window.as_weak();
    let controller = Rc::clone(controller);
    delete_window.on_delete_app(move |name| {
        let Some(main) = main_weak.upgrade() else { return };
        let name = name.as_str();

        if !dialogs::confirm_delete(name) {
            return;
        }

        let status = controller.borrow_mut().delete(name);
        refresh_buttons(&main, &controller.borrow());
        show_status(&main, &status);

        if let Some(delete_window) = delete_weak.upgrade() {
            hide_delete_window(&delete_window);
        }
    });

    delete_window.show().context("Failed to show delete window")?;

    // Replacing the slot drops any previously opened delete window
    let previous = slot.borrow_mut().replace(delete_window);
    if let Some(previous) = previous {
        hide_delete_window(&previous);
    }
    Ok(())
}

/// Close the delete window, if open, so it never lists stale buttons
fn close_delete_window(slot: &Rc<RefCell<Option<DeleteWindow>>>) {
    let open = slot.borrow_mut().take();
    if let Some(delete_window) = open {
        hide_delete_window(&delete_window);
    }
}

fn hide_delete_window(delete_window: &DeleteWindow) {
    if let Err(e) = delete_window.hide() {
        warn!("Failed to close delete window: {e}");
    }
}

/// Rebuild the button grid from the registry
fn refresh_buttons(window: &MainWindow, controller: &LauncherController) {
    let cells = controller.grid();
    info!("Rebuilding button grid with {} buttons", cells.len());
    window.set_rows(rows_model(&cells));
}

fn rows_model(cells: &[GridCell]) -> ModelRc<ButtonRow> {
    let rows: Vec<ButtonRow> = cells
        .chunks(GRID_COLUMNS)
        .map(|row| {
            let right = row.get(1);
            ButtonRow {
                left: to_button_cell(&row[0]),
                right: right.map(to_button_cell).unwrap_or_default(),
                has_right: right.is_some(),
            }
        })
        .collect();
    ModelRc::new(VecModel::from(rows))
}

fn to_button_cell(cell: &GridCell) -> ButtonCell {
    ButtonCell {
        index: i32::try_from(cell.index).unwrap_or(i32::MAX),
        label: cell.label.as_str().into(),
    }
}

fn show_status(window: &MainWindow, status: &StatusMessage) {
    window.set_status_text(status.text.as_str().into());
    window.set_status_color(status_color(status.kind));
}

fn status_color(kind: StatusKind) -> Color {
    match kind {
        StatusKind::Info => Color::from_rgb_u8(0x00, 0x00, 0xff),
        StatusKind::Success => Color::from_rgb_u8(0x00, 0x80, 0x00),
        StatusKind::Failure | StatusKind::Removed => Color::from_rgb_u8(0xff, 0x00, 0x00),
    }
}

fn set_background(window: &MainWindow, image: RgbaImage) {
    let (width, height) = image.dimensions();
    let buffer =
        SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(image.as_raw(), width, height);
    window.set_background_image(Image::from_rgba8(buffer));
    window.set_has_background(true);
}
