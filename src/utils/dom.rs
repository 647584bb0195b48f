//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Document, HtmlElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get `<body>`.
#[inline]
pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

// =============================================================================
// Text Selection
// =============================================================================

/// Disables text selection on `<body>` for its lifetime.
///
/// Dragging a sheet with the mouse or a finger would otherwise select the
/// text it passes over, and a long press on touch opens the selection
/// callout. The previous values are restored on drop.
pub struct SelectionLock {
    body: HtmlElement,
    previous: [String; 2],
}

/// Standard and WebKit-prefixed spellings; iOS Safari only honours the latter.
const USER_SELECT: [&str; 2] = ["user-select", "-webkit-user-select"];

impl SelectionLock {
    pub fn acquire() -> Option<Self> {
        let body = body()?;
        let style = body.style();
        let previous = USER_SELECT.map(|name| style.get_property_value(name).unwrap_or_default());
        let lock = Self { body, previous };
        for name in USER_SELECT {
            style.set_property(name, "none").ok()?;
        }
        Some(lock)
    }
}

impl Drop for SelectionLock {
    fn drop(&mut self) {
        let style = self.body.style();
        for (name, previous) in USER_SELECT.iter().zip(&self.previous) {
            let _ = if previous.is_empty() {
                style.remove_property(name).map(|_| ())
            } else {
                style.set_property(name, previous)
            };
        }
    }
}
