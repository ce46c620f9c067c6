//! WASM browser tests for blockpad-js.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, KeyboardEvent, KeyboardEventInit, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

use blockpad_js::{JsBlockEditor, JsBlockSeed, JsDocument, JsEditorConfig};

fn make_container() -> HtmlElement {
    let container = gloo_utils::document()
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    gloo_utils::body().append_child(&container).unwrap();
    container
}

fn document_of(editor: &JsBlockEditor) -> JsDocument {
    serde_wasm_bindgen::from_value(editor.get_document().unwrap()).unwrap()
}

fn elements(container: &HtmlElement, selector: &str) -> Vec<HtmlElement> {
    let nodes = container.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn content_elements(container: &HtmlElement) -> Vec<HtmlElement> {
    elements(container, ".blockpad-content")
}

fn seeded_editor(content: &str) -> JsBlockEditor {
    let config = JsEditorConfig {
        initial_blocks: Some(vec![JsBlockSeed {
            block_type: None,
            content: Some(content.into()),
        }]),
        ..JsEditorConfig::default()
    };
    JsBlockEditor::new(serde_wasm_bindgen::to_value(&config).unwrap()).unwrap()
}

fn counter() -> (Rc<Cell<u32>>, Closure<dyn FnMut()>) {
    let calls = Rc::new(Cell::new(0));
    let closure = {
        let calls = calls.clone();
        Closure::<dyn FnMut()>::new(move || calls.set(calls.get() + 1))
    };
    (calls, closure)
}

fn select_all(element: &HtmlElement) {
    let range = gloo_utils::document().create_range().unwrap();
    range.select_node_contents(element).unwrap();
    let selection = gloo_utils::window().get_selection().unwrap().unwrap();
    selection.remove_all_ranges().unwrap();
    selection.add_range(&range).unwrap();
}

fn right_click(element: &HtmlElement) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_client_x(40);
    init.set_client_y(12);
    let event = MouseEvent::new_with_mouse_event_init_dict("contextmenu", &init).unwrap();
    element.dispatch_event(&event).unwrap();
    event
}

fn press_key(element: &HtmlElement, key: &str) -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_key(key);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    element.dispatch_event(&event).unwrap();
    event
}

#[wasm_bindgen_test]
fn test_default_document() {
    let editor = JsBlockEditor::new(JsValue::UNDEFINED).unwrap();
    assert_eq!(editor.block_count().unwrap(), 1);
    assert!(!editor.is_mounted());

    let doc = document_of(&editor);
    assert_eq!(doc.blocks[0].block_type, "paragraph");
    assert_eq!(doc.blocks[0].content, "");
    assert_eq!(doc.focused_index, None);
}

#[wasm_bindgen_test]
fn test_config_from_js_object() {
    let config = JsEditorConfig {
        initial_blocks: Some(vec![JsBlockSeed {
            block_type: Some("heading1".into()),
            content: Some("Title".into()),
        }]),
        ..JsEditorConfig::default()
    };
    let editor = JsBlockEditor::new(serde_wasm_bindgen::to_value(&config).unwrap()).unwrap();
    let doc = document_of(&editor);
    assert_eq!(doc.blocks[0].block_type, "heading1");
    assert_eq!(doc.blocks[0].content, "Title");
}

#[wasm_bindgen_test]
fn test_mount_and_unmount_keep_document() {
    let container = make_container();
    let editor = JsBlockEditor::new(JsValue::UNDEFINED).unwrap();
    editor.insert_block_after(0).unwrap();

    editor.mount(&container, None).unwrap();
    assert!(editor.is_mounted());
    assert_eq!(content_elements(&container).len(), 2);
    assert!(editor.mount(&container, None).is_err());

    editor.unmount();
    assert!(!editor.is_mounted());
    assert!(content_elements(&container).is_empty());
    assert_eq!(editor.block_count().unwrap(), 2);
}

#[wasm_bindgen_test]
fn test_input_event_updates_document() {
    let container = make_container();
    let (calls, on_change) = counter();

    let editor = JsBlockEditor::new(JsValue::UNDEFINED).unwrap();
    let callback = on_change.as_ref().unchecked_ref::<js_sys::Function>().clone();
    editor.mount(&container, Some(callback)).unwrap();

    let content = content_elements(&container).remove(0);
    content.set_inner_html("hello <b>world</b>");
    content
        .dispatch_event(&web_sys::Event::new("input").unwrap())
        .unwrap();

    let doc = document_of(&editor);
    assert_eq!(doc.blocks[0].content, "hello <b>world</b>");
    assert_eq!(calls.get(), 1);
    editor.unmount();
}

#[wasm_bindgen_test]
fn test_block_type_needs_focus() {
    let container = make_container();
    let editor = JsBlockEditor::new(JsValue::UNDEFINED).unwrap();
    editor.mount(&container, None).unwrap();

    assert!(!editor.set_block_type("heading2").unwrap());
    assert!(editor.set_block_type("heading9").is_err());

    editor.set_focused_index(Some(0)).unwrap();
    assert!(editor.set_block_type("heading2").unwrap());
    let doc = document_of(&editor);
    assert_eq!(doc.blocks[0].block_type, "heading2");
    assert!(doc.blocks[0].is_focused);

    let style = content_elements(&container)[0]
        .get_attribute("style")
        .unwrap_or_default();
    assert!(style.contains("font-size: 1.25rem; font-weight: bold;"));
    editor.unmount();
}

#[wasm_bindgen_test]
fn test_insert_out_of_range_is_an_error() {
    let editor = JsBlockEditor::new(JsValue::UNDEFINED).unwrap();
    assert!(editor.insert_block_after(5).is_err());
    assert!(editor.set_focused_index(Some(5)).is_err());
    assert_eq!(editor.block_count().unwrap(), 1);
}

#[wasm_bindgen_test]
fn test_menu_bolds_selected_text() {
    let container = make_container();
    let (calls, on_change) = counter();
    let editor = seeded_editor("hello world");
    let callback = on_change.as_ref().unchecked_ref::<js_sys::Function>().clone();
    editor.mount(&container, Some(callback)).unwrap();

    let content = content_elements(&container).remove(0);
    let menu = elements(&container, ".blockpad-menu").remove(0);
    content.focus().unwrap();
    select_all(&content);

    let event = right_click(&content);
    assert!(event.default_prevented());
    assert!(!menu.hidden());
    assert_eq!(menu.style().get_property_value("left").unwrap(), "40px");

    let bold = elements(&container, ".blockpad-menu-item")
        .into_iter()
        .find(|item| item.get_attribute("data-style").as_deref() == Some("bold"))
        .unwrap();
    let before = calls.get();
    bold.click();

    let doc = document_of(&editor);
    assert!(doc.blocks[0].content.contains("<b>"));
    assert!(doc.blocks[0].content.contains("hello world"));
    assert_eq!(doc.focused_index, Some(0));
    assert!(menu.hidden());
    assert_eq!(calls.get(), before + 1);

    // The selection was used up by the first click.
    bold.click();
    let again = document_of(&editor);
    assert_eq!(again.blocks[0].content, doc.blocks[0].content);
    assert_eq!(calls.get(), before + 1);
    editor.unmount();
}

#[wasm_bindgen_test]
fn test_right_click_without_selection_keeps_menu_hidden() {
    let container = make_container();
    let editor = seeded_editor("hello world");
    editor.mount(&container, None).unwrap();

    gloo_utils::window()
        .get_selection()
        .unwrap()
        .unwrap()
        .remove_all_ranges()
        .unwrap();
    let content = content_elements(&container).remove(0);
    let event = right_click(&content);

    assert!(event.default_prevented());
    assert!(elements(&container, ".blockpad-menu")[0].hidden());
    editor.unmount();
}

#[wasm_bindgen_test]
fn test_enter_key_adds_block_after() {
    let container = make_container();
    let (calls, on_change) = counter();
    let editor = seeded_editor("first");
    let callback = on_change.as_ref().unchecked_ref::<js_sys::Function>().clone();
    editor.mount(&container, Some(callback)).unwrap();

    let content = content_elements(&container).remove(0);
    let event = press_key(&content, "Enter");
    assert!(event.default_prevented());
    assert_eq!(editor.block_count().unwrap(), 2);
    assert!(calls.get() >= 1);

    let doc = document_of(&editor);
    assert_eq!(doc.blocks[0].content, "first");
    assert_eq!(doc.blocks[1].block_type, "paragraph");
    assert_eq!(doc.blocks[1].content, "");

    let wrappers = elements(&container, ".blockpad-block");
    assert_eq!(wrappers.len(), 2);
    assert_eq!(
        wrappers[1].get_attribute("data-block-id").as_deref(),
        Some(doc.blocks[1].id.as_str())
    );

    // Shift+Enter is a line break inside the block.
    let init = KeyboardEventInit::new();
    init.set_cancelable(true);
    init.set_key("Enter");
    init.set_shift_key(true);
    let shifted = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    content.dispatch_event(&shifted).unwrap();
    assert!(!shifted.default_prevented());
    assert_eq!(editor.block_count().unwrap(), 2);
    editor.unmount();
}
