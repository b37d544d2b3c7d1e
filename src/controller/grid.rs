//! Button grid layout
//!
//! Buttons are laid out row-major in insertion order, two per row.

use crate::config::LaunchRecord;

/// Number of buttons per row
pub const GRID_COLUMNS: usize = 2;

/// Position of one button in the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    /// Index of the record in the registry
    pub index: usize,
    /// Zero-based row
    pub row: usize,
    /// Zero-based column
    pub column: usize,
    /// Record name
    pub label: String,
}

/// Compute one cell per record
pub fn button_grid(records: &[LaunchRecord]) -> Vec<GridCell> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| GridCell {
            index,
            row: index / GRID_COLUMNS,
            column: index % GRID_COLUMNS,
            label: record.name.clone(),
        })
        .collect()
}
