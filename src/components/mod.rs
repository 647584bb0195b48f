//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`sheet`] - Draggable bottom sheet shared by the screens
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`home`], [`map`], [`feed`], [`profile`] - tab screens
//! - [`onboarding`], [`auth`] - entry flows

pub mod auth;
pub mod feed;
pub mod home;
pub mod icons;
pub mod map;
pub mod onboarding;
pub mod profile;
pub mod router;
pub mod sheet;

pub use router::AppRouter;
