#![cfg(target_arch = "wasm32")]

use hoodmap::components::sheet::BrowserHistory;
use hoodmap_core::sheet::NavigationStack;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear_state() {
    let history = web_sys::window().unwrap().history().unwrap();
    history.replace_state(&JsValue::NULL, "").unwrap();
}

#[wasm_bindgen_test]
fn pushed_marker_is_readable() {
    clear_state();
    let nav = BrowserHistory;
    nav.push_marker("place").unwrap();
    assert_eq!(nav.current_marker().as_deref(), Some("place"));
}

#[wasm_bindgen_test]
fn foreign_state_is_not_a_marker() {
    clear_state();
    assert_eq!(BrowserHistory.current_marker(), None);

    let history = web_sys::window().unwrap().history().unwrap();
    history.replace_state(&JsValue::from_str("other"), "").unwrap();
    assert_eq!(BrowserHistory.current_marker(), None);
}

#[wasm_bindgen_test]
fn push_keeps_the_url() {
    let location = web_sys::window().unwrap().location();
    let before = location.href().unwrap();
    BrowserHistory.push_marker("profile").unwrap();
    assert_eq!(location.href().unwrap(), before);
    assert!(BrowserHistory.back().is_ok());
}
