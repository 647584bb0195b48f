//! Browser utilities.
//!
//! - [`dom`] - window/document access, [`dom::SelectionLock`]
//! - [`notify`] - console logging and alerts for failed actions
//! - [`map_sdk`] - lazy map SDK loader and [`map_sdk::MapView`]

pub mod dom;
pub mod map_sdk;
pub mod notify;
