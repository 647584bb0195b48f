//! Platform-independent logic for the hoodmap client.
//!
//! This crate has no browser dependencies so every state machine can be
//! exercised with plain `cargo test`:
//!
//! - [`sheet`] - draggable bottom-sheet controller shared by every sheet
//! - [`request`] - stale-response guard for view-scoped loads
//! - [`level`] - XP to level progress
//! - [`feed`] - recommendation filtering and sections
//! - [`onboarding`] - onboarding steps and validation
//! - [`models`] - REST wire types
//! - [`error`] - API and navigation errors

pub mod error;
pub mod feed;
pub mod level;
pub mod models;
pub mod onboarding;
pub mod request;
pub mod sheet;

pub use error::{ApiError, NavigationError};
