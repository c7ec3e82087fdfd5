//! DOM shell
//!
//! Builds the editor UI inside a host element and wires browser events to
//! the API functions. The page only needs to load the module and call
//! `mountEditor("app")`.
//!
//! Listeners live for the whole page session, so their closures are leaked
//! with `forget()`.

pub mod board;
pub mod panel;

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::error::{describe_js_error, EditorError};
use crate::models::Shape;
use crate::{api, wasm_info, wasm_log};

/// Handles to the mounted UI shared by all listeners
pub struct Ui {
    pub document: Document,
    /// Element that receives the SVG markup
    pub board_host: HtmlElement,
    /// Positioned container for the inline text input
    pub overlay_root: HtmlElement,
    pub shape_buttons: Vec<(Shape, HtmlElement)>,
    pub color_buttons: Vec<(String, HtmlElement)>,
    /// Set on mousedown while a text edit is open; the following click only dismisses it
    pub dismiss_next_click: Cell<bool>,
}

impl Ui {
    /// Re-render the fretboard SVG from the current state
    pub fn refresh_board(&self) {
        let started = now_ms();
        match api::render_svg() {
            Ok(svg) => {
                self.board_host.set_inner_html(&svg);
                wasm_log!("board rendered in {:.1}ms", now_ms() - started);
            }
            Err(e) => log::error!("render failed: {}", describe_js_error(&e)),
        }
    }

    /// Mark the selected shape/color buttons as active
    pub fn refresh_palettes(&self) {
        let Ok(snapshot) = crate::api::helpers::with_editor(|state| state.tool().clone()) else {
            return;
        };
        for (shape, button) in &self.shape_buttons {
            set_class(button, "active", *shape == snapshot.shape);
            let _ = button
                .style()
                .set_property("--preview-color", &snapshot.color);
        }
        for (color, button) in &self.color_buttons {
            set_class(button, "active", *color == snapshot.color);
        }
    }
}

/// Build the editor UI inside the element with id `root_id`
///
/// Creates the editor state if none exists yet.
#[wasm_bindgen(js_name = mountEditor)]
pub fn mount_editor(root_id: &str) -> Result<(), JsValue> {
    wasm_info!("mountEditor called: #{}", root_id);

    if api::helpers::with_editor(|_| ()).is_err() {
        api::create_editor(JsValue::UNDEFINED)?;
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| api::helpers::editor_error(EditorError::Dom("document not available".into())))?;
    let root = document
        .get_element_by_id(root_id)
        .ok_or_else(|| api::helpers::editor_error(EditorError::Dom(format!("no element with id '{}'", root_id))))?;

    let container = create(&document, "div", "app-container")?;
    let panel = panel::build(&document)?;
    let board = board::build(&document)?;
    container.append_child(&panel.root)?;
    container.append_child(&board.root)?;
    root.append_child(&container)?;

    let ui = Rc::new(Ui {
        document,
        board_host: board.host,
        overlay_root: board.scroll_area,
        shape_buttons: panel.shape_buttons,
        color_buttons: panel.color_buttons,
        dismiss_next_click: Cell::new(false),
    });

    panel::attach_listeners(&ui, panel.controls)?;
    board::attach_listeners(&ui)?;

    ui.refresh_palettes();
    ui.refresh_board();
    wasm_info!("mountEditor completed successfully");
    Ok(())
}

/// Create an element with a class name
pub fn create(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let element: HtmlElement = document.create_element(tag)?.dyn_into()?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

/// Add or remove one class
pub fn set_class(element: &HtmlElement, class: &str, on: bool) {
    let list = element.class_list();
    let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}

/// Register a listener for the page lifetime
pub fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
