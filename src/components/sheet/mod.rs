//! Draggable bottom sheet.
//!
//! The state machine lives in `hoodmap_core::sheet`; this module renders it
//! and connects it to browser input and history.

mod history;
mod sheet;

pub use history::BrowserHistory;
pub use sheet::{DraggableSheet, SheetHandle, sheet_config, use_sheet};
