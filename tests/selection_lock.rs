#![cfg(target_arch = "wasm32")]

use hoodmap::utils::dom::SelectionLock;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn user_select() -> String {
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
    body.style().get_property_value("user-select").unwrap()
}

#[wasm_bindgen_test]
fn lock_disables_selection_until_dropped() {
    let lock = SelectionLock::acquire().expect("body is present");
    assert_eq!(user_select(), "none");
    drop(lock);
    assert_eq!(user_select(), "");
}

#[wasm_bindgen_test]
fn previous_value_is_restored() {
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
    body.style().set_property("user-select", "text").unwrap();

    let lock = SelectionLock::acquire().expect("body is present");
    assert_eq!(user_select(), "none");
    drop(lock);
    assert_eq!(user_select(), "text");

    body.style().remove_property("user-select").unwrap();
}
