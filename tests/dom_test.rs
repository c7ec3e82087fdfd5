//! Browser tests for the mounted editor shell
//!
//! Events are dispatched synthetically against the mounted board.

use fretboard_wasm::api::*;
use fretboard_wasm::dom::mount_editor;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, EventTarget, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount(id: &str) -> Element {
    let document = document();
    let root = document.create_element("div").unwrap();
    root.set_id(id);
    document.body().unwrap().append_child(&root).unwrap();
    mount_editor(id).unwrap();
    root
}

fn surface(root: &Element) -> Element {
    root.query_selector(".fretboard-svg").unwrap().expect("board should be rendered")
}

/// Dispatch a primary-button mouse event at a surface-relative point
fn fire(target: &EventTarget, kind: &str, surface: &Element, x: f64, y: f64) {
    let rect = surface.get_bounding_client_rect();
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_button(0);
    init.set_client_x((rect.left() + x) as i32);
    init.set_client_y((rect.top() + y) as i32);
    let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn marks() -> usize {
    let json = get_editor_state_json().unwrap();
    let state: serde_json::Value = serde_json::from_str(&json).unwrap();
    state["marks"].as_array().map(|m| m.len()).unwrap_or(0)
}

fn text_input(root: &Element) -> Option<Element> {
    root.query_selector(".mark-text-input").unwrap()
}

#[wasm_bindgen_test]
fn test_click_on_board_toggles_marker() {
    let root = mount("board-click");
    create_editor(wasm_bindgen::JsValue::UNDEFINED).unwrap();

    let svg = surface(&root);
    fire(svg.unchecked_ref(), "click", &svg, 110.0, 40.0);
    assert_eq!(marks(), 1);
}

#[wasm_bindgen_test]
fn test_press_on_board_release_elsewhere_does_not_swallow_next_click() {
    let root = mount("board-release");
    create_editor(wasm_bindgen::JsValue::UNDEFINED).unwrap();
    toggle_mark(0, 0).unwrap();

    let svg = surface(&root);
    fire(svg.unchecked_ref(), "contextmenu", &svg, 110.0, 40.0);
    assert!(text_input(&root).is_some(), "context click should open the text input");

    // Press on the board, release outside it
    fire(svg.unchecked_ref(), "mousedown", &svg, 210.0, 90.0);
    let body = document().body().unwrap();
    fire(body.unchecked_ref(), "mouseup", &svg, -50.0, -50.0);
    assert!(text_input(&root).is_none());

    let svg = surface(&root);
    fire(svg.unchecked_ref(), "click", &svg, 210.0, 90.0);
    assert_eq!(marks(), 2, "the next board click should toggle normally");
}
