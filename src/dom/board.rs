//! Fretboard surface: pointer handling and the inline text input

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, KeyboardEvent, MouseEvent, Node};

use super::{create, listen, Ui};
use crate::api;
use crate::api::helpers::with_editor;
use crate::editor::TextEdit;
use crate::error::describe_js_error;
use crate::layout::Point;
use crate::{wasm_log, wasm_warn};

const TEXT_INPUT_CLASS: &str = "mark-text-input";

pub struct Board {
    pub root: HtmlElement,
    pub scroll_area: HtmlElement,
    pub host: HtmlElement,
}

pub fn build(document: &Document) -> Result<Board, JsValue> {
    let root = create(document, "div", "fretboard-container")?;
    let scroll_area = create(document, "div", "fretboard-scroll-area")?;
    scroll_area.style().set_property("position", "relative")?;
    let host = create(document, "div", "fretboard-host")?;
    scroll_area.append_child(&host)?;
    root.append_child(&scroll_area)?;
    Ok(Board {
        root,
        scroll_area,
        host,
    })
}

pub fn attach_listeners(ui: &Rc<Ui>) -> Result<(), JsValue> {
    // Runs before the text input's blur, so we can tell the click was aimed at closing it
    let ui_for_down = Rc::clone(ui);
    listen(&ui.board_host, "mousedown", move |event| {
        let primary = event.dyn_ref::<MouseEvent>().is_some_and(|e| e.button() == 0);
        let editing = with_editor(|state| state.editing().is_some()).unwrap_or(false);
        if primary && editing {
            ui_for_down.dismiss_next_click.set(true);
        }
    })?;

    // Released outside the board: no click follows, so close the edit here
    let ui_for_up = Rc::clone(ui);
    listen(&ui.document, "mouseup", move |event| {
        if !ui_for_up.dismiss_next_click.get() {
            return;
        }
        let on_board = event
            .target()
            .and_then(|target| target.dyn_into::<Node>().ok())
            .is_some_and(|node| ui_for_up.board_host.contains(Some(&node)));
        if !on_board {
            ui_for_up.dismiss_next_click.set(false);
            let _ = api::cancel_text_edit();
            close_text_input(&ui_for_up);
        }
    })?;

    let ui_for_click = Rc::clone(ui);
    listen(&ui.board_host, "click", move |event| {
        if ui_for_click.dismiss_next_click.replace(false) {
            let _ = api::cancel_text_edit();
            close_text_input(&ui_for_click);
            return;
        }
        let Some(point) = surface_point(&ui_for_click, &event) else {
            return;
        };
        if let Err(e) = api::handle_primary_click(point.x, point.y) {
            wasm_warn!("click failed: {}", describe_js_error(&e));
        }
        close_text_input(&ui_for_click);
        ui_for_click.refresh_board();
    })?;

    let ui_for_menu = Rc::clone(ui);
    listen(&ui.board_host, "contextmenu", move |event| {
        event.prevent_default();
        let Some(point) = surface_point(&ui_for_menu, &event) else {
            return;
        };
        if let Err(e) = api::handle_context_click(point.x, point.y) {
            wasm_warn!("context click failed: {}", describe_js_error(&e));
            return;
        }
        match with_editor(|state| state.editing().cloned()) {
            Ok(Some(edit)) => {
                if let Err(e) = open_text_input(&ui_for_menu, &edit) {
                    wasm_warn!("could not open text input: {}", describe_js_error(&e));
                }
            }
            _ => close_text_input(&ui_for_menu),
        }
    })?;

    Ok(())
}

/// Place the inline text input over the edited marker and focus it
fn open_text_input(ui: &Rc<Ui>, edit: &TextEdit) -> Result<(), JsValue> {
    close_text_input(ui);

    let input: HtmlInputElement = ui.document.create_element("input")?.dyn_into()?;
    input.set_class_name(TEXT_INPUT_CLASS);
    input.set_type("text");
    input.set_value(&edit.initial_text);
    let style = input.style();
    style.set_property("position", "absolute")?;
    style.set_property("left", &format!("{}px", edit.anchor.x))?;
    style.set_property("top", &format!("{}px", edit.anchor.y))?;
    style.set_property("transform", "translate(-50%, -50%)")?;

    let ui_for_key = Rc::clone(ui);
    let input_for_key = input.clone();
    listen(&input, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|e| e.key()) else {
            return;
        };
        match key.as_str() {
            "Enter" => {
                let _ = api::commit_text_edit(&input_for_key.value());
                close_text_input(&ui_for_key);
                ui_for_key.refresh_board();
            }
            "Escape" => {
                let _ = api::cancel_text_edit();
                close_text_input(&ui_for_key);
            }
            _ => {}
        }
    })?;

    let ui_for_blur = Rc::clone(ui);
    listen(&input, "blur", move |_| {
        // A mousedown on the board already asked for the click to close the edit
        if ui_for_blur.dismiss_next_click.get() {
            return;
        }
        let _ = api::cancel_text_edit();
        close_text_input(&ui_for_blur);
    })?;

    let ui_for_focus = Rc::clone(ui);
    listen(&input, "focus", move |_| ui_for_focus.dismiss_next_click.set(false))?;

    ui.overlay_root.append_child(&input)?;
    input.focus()?;
    wasm_log!(
        "text input opened at string {}, fret {}",
        edit.cell.string_index,
        edit.cell.fret_index
    );
    Ok(())
}

/// Remove the inline text input if one is open
pub fn close_text_input(ui: &Ui) {
    if let Ok(Some(existing)) = ui.overlay_root.query_selector(&format!(".{}", TEXT_INPUT_CLASS)) {
        existing.remove();
    }
}

/// Pointer position relative to the SVG surface's top-left corner
fn surface_point(ui: &Ui, event: &web_sys::Event) -> Option<Point> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    let surface = ui.board_host.first_element_child()?;
    let rect = surface.get_bounding_client_rect();
    Some(Point::new(
        (mouse.client_x() as f64 - rect.left()) as f32,
        (mouse.client_y() as f64 - rect.top()) as f32,
    ))
}
