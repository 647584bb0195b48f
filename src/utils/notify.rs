//! Console logging and user-facing alerts.
//!
//! Passive failures (background loads) are only logged. Failures of an
//! action the user just took are also shown in a blocking alert.

use hoodmap_core::ApiError;

/// Log to the console as `[area] message`.
pub fn log(area: &str, message: &str) {
    web_sys::console::log_1(&format!("[{area}] {message}").into());
}

pub fn warn(area: &str, message: &str) {
    web_sys::console::warn_1(&format!("[{area}] {message}").into());
}

pub fn error(area: &str, message: &str) {
    web_sys::console::error_1(&format!("[{area}] {message}").into());
}

/// Show a blocking alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Ask for confirmation. Returns `false` when no window is available.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Log a failed background load. Aborted requests are expected and skipped.
pub fn load_failed(area: &str, err: &ApiError) {
    if !err.is_silent() {
        warn(area, &err.to_string());
    }
}

/// Log and alert a failed user action.
pub fn action_failed(area: &str, err: &ApiError) {
    if err.is_silent() {
        return;
    }
    error(area, &err.to_string());
    alert(&err.to_string());
}
