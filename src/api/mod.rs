//! REST backend access.
//!
//! [`ApiClient`] owns the transport; each sibling module adds the endpoint
//! methods for one area:
//!
//! - [`auth`] - login, signup, logout, session lookup
//! - [`places`] - search, detail, categories
//! - [`favorites`] - favorite groups and their places
//! - [`missions`] - leveling missions
//! - [`reviews`] - place reviews and likes
//! - [`recommendations`] - feed entries
//! - [`profile`] - profile read/update and onboarding submission

pub mod auth;
mod client;
pub mod favorites;
pub mod missions;
pub mod places;
pub mod profile;
pub mod recommendations;
pub mod reviews;

pub use client::{AbortHandle, ApiClient};

/// Percent-encode a query parameter value.
pub(crate) fn encode_query(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}
