//! Control panel: diagram inputs, mark tools and actions

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use super::{create, listen, Ui};
use crate::api;
use crate::error::describe_js_error;
use crate::models::{ConfigField, Shape, COLOR_PALETTE};
use crate::wasm_warn;

const CLEAR_CONFIRMATION: &str = "Are you sure you want to clear all marks?";

pub struct Panel {
    pub root: HtmlElement,
    pub shape_buttons: Vec<(Shape, HtmlElement)>,
    pub color_buttons: Vec<(String, HtmlElement)>,
    pub controls: PanelControls,
}

/// Widgets whose listeners are attached after mounting
pub struct PanelControls {
    pub inputs: Vec<(ConfigField, HtmlInputElement)>,
    pub title_input: HtmlInputElement,
    pub reset_button: HtmlElement,
    pub download_button: HtmlElement,
}

pub fn build(document: &Document) -> Result<Panel, JsValue> {
    let root = create(document, "div", "control-panel")?;
    let config = api::helpers::with_editor(|state| *state.config())?;

    let diagram_header = header(document, "Diagram")?;
    root.append_child(&diagram_header)?;
    let group = create(document, "div", "control-group")?;
    let mut inputs = Vec::new();
    for field in ConfigField::ALL {
        let label = create(document, "label", "")?;
        let caption = create(document, "span", "")?;
        caption.set_text_content(Some(field.label()));
        let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
        input.set_type("number");
        input.set_name(field.name());
        let range = field.range();
        input.set_min(&range.start().to_string());
        input.set_max(&range.end().to_string());
        input.set_value(&config.get_field(field).to_string());
        label.append_child(&caption)?;
        label.append_child(&input)?;
        group.append_child(&label)?;
        inputs.push((field, input));
    }

    let title_label = create(document, "label", "")?;
    let title_caption = create(document, "span", "")?;
    title_caption.set_text_content(Some("Title"));
    let title_input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    title_input.set_type("text");
    title_input.set_name("title");
    title_input.set_placeholder("guitar-diagram");
    title_label.append_child(&title_caption)?;
    title_label.append_child(&title_input)?;
    group.append_child(&title_label)?;
    root.append_child(&group)?;

    let divider = create(document, "div", "panel-divider")?;
    root.append_child(&divider)?;
    let tools_header = header(document, "Mark Tools")?;
    root.append_child(&tools_header)?;

    let shape_group = create(document, "div", "control-group")?;
    let shape_label = tool_label(document, "Shape")?;
    shape_group.append_child(&shape_label)?;
    let shape_palette = create(document, "div", "palette shape-palette")?;
    let mut shape_buttons = Vec::new();
    for shape in Shape::ALL {
        let button = create(document, "button", "shape-btn")?;
        button.set_title(shape.as_str());
        button.set_attribute("data-shape", shape.as_str())?;
        let preview = create(document, "div", &format!("preview-shape {}", shape))?;
        button.append_child(&preview)?;
        shape_palette.append_child(&button)?;
        shape_buttons.push((shape, button));
    }
    shape_group.append_child(&shape_palette)?;
    root.append_child(&shape_group)?;

    let color_group = create(document, "div", "control-group")?;
    let color_label = tool_label(document, "Color")?;
    color_group.append_child(&color_label)?;
    let color_palette = create(document, "div", "palette color-palette")?;
    let mut color_buttons = Vec::new();
    for color in COLOR_PALETTE {
        let button = create(document, "button", "color-btn")?;
        button.set_title(color);
        button.style().set_property("background-color", color)?;
        color_palette.append_child(&button)?;
        color_buttons.push((color.to_string(), button));
    }
    color_group.append_child(&color_palette)?;
    root.append_child(&color_group)?;

    let footer = create(document, "div", "panel-footer")?;
    let reset_button = create(document, "button", "reset-btn")?;
    reset_button.set_text_content(Some("Reset Diagram"));
    let download_button = create(document, "button", "reset-btn download-btn")?;
    download_button.set_text_content(Some("Download PNG"));
    footer.append_child(&reset_button)?;
    footer.append_child(&download_button)?;
    root.append_child(&footer)?;

    Ok(Panel {
        root,
        shape_buttons,
        color_buttons,
        controls: PanelControls {
            inputs,
            title_input,
            reset_button,
            download_button,
        },
    })
}

pub fn attach_listeners(ui: &Rc<Ui>, controls: PanelControls) -> Result<(), JsValue> {
    for (field, input) in controls.inputs {
        let on_input = {
            let ui = Rc::clone(ui);
            let input = input.clone();
            move |_: web_sys::Event| {
                if let Err(e) = api::set_config_field(field.name(), &input.value()) {
                    wasm_warn!("config update failed: {}", describe_js_error(&e));
                }
                ui.refresh_board();
            }
        };
        listen(&input, "input", on_input)?;

        // Show the clamped value once the user leaves the field
        let on_change = {
            let input = input.clone();
            move |_: web_sys::Event| {
                if let Ok(value) = api::helpers::with_editor(|state| state.config().get_field(field)) {
                    input.set_value(&value.to_string());
                }
            }
        };
        listen(&input, "change", on_change)?;
    }

    let title_input = controls.title_input.clone();
    listen(&controls.title_input, "input", move |_| {
        let _ = api::set_title(&title_input.value());
    })?;

    for (shape, button) in &ui.shape_buttons {
        let shape = *shape;
        let ui_for_click = Rc::clone(ui);
        listen(button, "click", move |_| {
            if api::set_active_shape(shape.as_str()).is_ok() {
                ui_for_click.refresh_palettes();
            }
        })?;
    }

    for (color, button) in &ui.color_buttons {
        let color = color.clone();
        let ui_for_click = Rc::clone(ui);
        listen(button, "click", move |_| {
            if api::set_active_color(&color).is_ok() {
                ui_for_click.refresh_palettes();
            }
        })?;
    }

    let ui_for_reset = Rc::clone(ui);
    listen(&controls.reset_button, "click", move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(CLEAR_CONFIRMATION).ok())
            .unwrap_or(false);
        if api::clear_markers(confirmed).is_ok() && confirmed {
            super::board::close_text_input(&ui_for_reset);
            ui_for_reset.refresh_board();
        }
    })?;

    listen(&controls.download_button, "click", move |_| {
        // Failures are already logged and alerted
        let _ = api::download_png();
    })?;

    Ok(())
}

fn header(document: &Document, title: &str) -> Result<HtmlElement, JsValue> {
    let header = create(document, "div", "panel-header")?;
    let h2 = create(document, "h2", "")?;
    h2.set_text_content(Some(title));
    header.append_child(&h2)?;
    Ok(header)
}

fn tool_label(document: &Document, text: &str) -> Result<HtmlElement, JsValue> {
    let label = create(document, "div", "tool-label")?;
    label.set_text_content(Some(text));
    Ok(label)
}
