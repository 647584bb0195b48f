//! Client-side models.
//!
//! Wire types shared with the backend live in `hoodmap_core::models`; this
//! module holds what only the browser client needs.

mod route;

pub use route::Route;
