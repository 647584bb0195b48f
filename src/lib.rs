//! hoodmap web client.
//!
//! A Leptos CSR app for discovering neighborhood places. Platform-independent
//! logic (sheet state machine, level math, feed filtering, onboarding) lives
//! in `hoodmap-core`; this crate owns the browser side:
//!
//! - [`api`] - REST client and endpoint wrappers
//! - [`components`] - screens, router and the draggable sheet
//! - [`utils`] - DOM helpers, alerts and the map SDK loader
//! - [`models`] - client-only types (routes)

pub mod api;
mod app;
pub mod components;
pub mod config;
pub mod models;
pub mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Mount the app on `#app`.
pub fn mount() {
    console_error_panic_hook::set_once();

    let Some(root) = document().get_element_by_id("app") else {
        web_sys::console::error_1(&"[app] missing #app element".into());
        return;
    };

    mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget();
}
