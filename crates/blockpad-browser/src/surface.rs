//! Browser implementation of the editable surface.
//!
//! Each block gets a wrapper element holding three children:
//!
//! ```html
//! <div class="blockpad-block" data-block-id="b-0">
//!   <div class="blockpad-placeholder">Type something...</div>
//!   <div class="blockpad-content" contenteditable="true"></div>
//!   <div class="blockpad-menu" hidden>...</div>
//! </div>
//! ```
//!
//! The contenteditable element is the source of truth for the block's markup.
//! It is seeded once at mount and only ever read afterwards.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlDocument, HtmlElement};

use blockpad_core::{
    Block, ContextMenu, EditableSurface, InlineStyle, SelectionCapture, SurfaceError,
    SurfaceProvider,
};

pub const BLOCK_CLASS: &str = "blockpad-block";
pub const CONTENT_CLASS: &str = "blockpad-content";
pub const PLACEHOLDER_CLASS: &str = "blockpad-placeholder";
pub const MENU_CLASS: &str = "blockpad-menu";
pub const MENU_ITEM_CLASS: &str = "blockpad-menu-item";

const WRAPPER_STYLE: &str = "position: relative;";
const PLACEHOLDER_STYLE: &str =
    "position: absolute; top: 0; left: 0; color: #9ca3af; pointer-events: none;";
const MENU_STYLE: &str = "position: fixed; z-index: 10; background: #fff; \
    border: 1px solid #d1d5db; border-radius: 4px; padding: 4px 0;";
const MENU_ITEM_STYLE: &str = "padding: 4px 12px; cursor: pointer; white-space: nowrap;";

/// `document.execCommand` name for an inline style.
pub fn command_name(style: InlineStyle) -> &'static str {
    match style {
        InlineStyle::Bold => "bold",
        InlineStyle::Italic => "italic",
        InlineStyle::Underline => "underline",
    }
}

fn js_err(context: &'static str) -> impl Fn(wasm_bindgen::JsValue) -> SurfaceError {
    move |e| SurfaceError(format!("{} failed: {:?}", context, e))
}

fn create_div(document: &Document, class: &str) -> Result<HtmlElement, SurfaceError> {
    let element = document
        .create_element("div")
        .map_err(js_err("create_element"))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| "created element is not an HtmlElement")?;
    element.set_class_name(class);
    Ok(element)
}

type MenuItems = Vec<(InlineStyle, HtmlElement)>;

/// A contenteditable element bound to one block.
pub struct DomSurface {
    wrapper: HtmlElement,
    content: HtmlElement,
    placeholder: HtmlElement,
    menu: HtmlElement,
    menu_items: MenuItems,
}

impl DomSurface {
    /// The outer element holding content, placeholder and menu.
    pub fn wrapper(&self) -> &HtmlElement {
        &self.wrapper
    }

    /// The contenteditable element.
    pub fn content_element(&self) -> &HtmlElement {
        &self.content
    }

    pub fn placeholder_element(&self) -> &HtmlElement {
        &self.placeholder
    }

    pub fn menu_element(&self) -> &HtmlElement {
        &self.menu
    }

    /// Menu entries in display order.
    pub fn menu_items(&self) -> &[(InlineStyle, HtmlElement)] {
        &self.menu_items
    }

    /// Show or hide the placeholder hint.
    pub fn set_placeholder_visible(&self, visible: bool) {
        self.placeholder.set_hidden(!visible);
    }

    /// Apply block-type styling to the content and placeholder.
    pub fn set_block_css(&self, css: &str) {
        let _ = self.content.set_attribute("style", css);
        let _ = self
            .placeholder
            .set_attribute("style", &format!("{} {}", PLACEHOLDER_STYLE, css));
    }

    /// Show the formatting menu at its position, or hide it.
    pub fn sync_menu(&self, menu: &ContextMenu) {
        if !menu.is_visible() {
            self.menu.set_hidden(true);
            return;
        }
        let position = menu.position();
        let style = self.menu.style();
        let _ = style.set_property("left", &format!("{}px", position.x));
        let _ = style.set_property("top", &format!("{}px", position.y));
        self.menu.set_hidden(false);
    }

    fn document(&self) -> Result<Document, SurfaceError> {
        self.content
            .owner_document()
            .ok_or_else(|| "surface is not attached to a document".into())
    }

    fn exec(&self, style: InlineStyle) -> Result<(), SurfaceError> {
        let document = self
            .document()?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| "document is not an HtmlDocument")?;
        let name = command_name(style);
        let applied = document.exec_command(name).map_err(js_err("execCommand"))?;
        if !applied {
            return Err(format!("execCommand({}) was not applied", name).into());
        }
        tracing::trace!(target: "blockpad::surface", command = name, "applied inline style");
        Ok(())
    }
}

impl EditableSurface for DomSurface {
    type Range = web_sys::Range;

    fn read_content(&self) -> String {
        self.content.inner_html()
    }

    fn write_content_once(&mut self, initial: &str) -> bool {
        if !self.content.inner_html().is_empty() {
            return false;
        }
        self.content.set_inner_html(initial);
        true
    }

    fn capture_active_selection(&self) -> Option<SelectionCapture<Self::Range>> {
        let selection = web_sys::window()?.get_selection().ok()??;
        if selection.range_count() == 0 {
            return None;
        }
        let range = selection.get_range_at(0).ok()?;
        let ancestor = range.common_ancestor_container().ok()?;
        if !self.content.contains(Some(&ancestor)) {
            tracing::trace!(target: "blockpad::surface", "selection outside surface");
            return None;
        }
        let text = String::from(selection.to_string());
        Some(SelectionCapture::new(range.clone_range(), text))
    }

    fn restore_selection(&mut self, range: &Self::Range) -> Result<(), SurfaceError> {
        let selection = web_sys::window()
            .ok_or("no window")?
            .get_selection()
            .map_err(js_err("get_selection"))?
            .ok_or("no selection object")?;
        selection
            .remove_all_ranges()
            .map_err(js_err("remove_all_ranges"))?;
        selection.add_range(range).map_err(js_err("add_range"))?;
        Ok(())
    }

    fn apply_selection_command(
        &mut self,
        range: &Self::Range,
        style: InlineStyle,
    ) -> Result<(), SurfaceError> {
        let ancestor = range
            .common_ancestor_container()
            .map_err(js_err("common_ancestor_container"))?;
        if !self.content.contains(Some(&ancestor)) {
            return Err("captured range no longer lies inside the surface".into());
        }
        self.exec(style)
    }

    fn apply_live_command(&mut self, style: InlineStyle) -> Result<(), SurfaceError> {
        self.exec(style)
    }

    fn focus(&mut self) -> Result<(), SurfaceError> {
        self.content.focus().map_err(js_err("focus"))
    }
}

/// Creates block surfaces inside a list element.
///
/// The list's element children are the block wrappers, in document order.
pub struct DomSurfaceProvider {
    document: Document,
    list: HtmlElement,
    placeholder: String,
    is_mac: bool,
}

impl DomSurfaceProvider {
    pub fn new(
        document: Document,
        list: HtmlElement,
        placeholder: impl Into<String>,
        is_mac: bool,
    ) -> Self {
        Self {
            document,
            list,
            placeholder: placeholder.into(),
            is_mac,
        }
    }

    /// The element block wrappers are inserted into.
    pub fn list_element(&self) -> &HtmlElement {
        &self.list
    }

    fn build_menu(&self) -> Result<(HtmlElement, MenuItems), SurfaceError> {
        let menu = create_div(&self.document, MENU_CLASS)?;
        let _ = menu.set_attribute("style", MENU_STYLE);
        menu.set_hidden(true);

        let mut items = Vec::with_capacity(InlineStyle::ALL.len());
        for item in ContextMenu::items(self.is_mac) {
            let element = create_div(&self.document, MENU_ITEM_CLASS)?;
            let _ = element.set_attribute("style", MENU_ITEM_STYLE);
            let _ = element.set_attribute("data-style", command_name(item.style));
            element.set_text_content(Some(&item.label));
            menu.append_child(&element).map_err(js_err("append_child"))?;
            items.push((item.style, element));
        }
        Ok((menu, items))
    }
}

impl SurfaceProvider for DomSurfaceProvider {
    type Surface = DomSurface;

    fn create_surface(&mut self, index: usize, block: &Block) -> Result<DomSurface, SurfaceError> {
        let wrapper = create_div(&self.document, BLOCK_CLASS)?;
        let _ = wrapper.set_attribute("style", WRAPPER_STYLE);
        let _ = wrapper.set_attribute("data-block-id", block.id.as_str());

        let placeholder = create_div(&self.document, PLACEHOLDER_CLASS)?;
        placeholder.set_text_content(Some(&self.placeholder));

        let content = create_div(&self.document, CONTENT_CLASS)?;
        content
            .set_attribute("contenteditable", "true")
            .map_err(js_err("set_attribute"))?;

        let (menu, menu_items) = self.build_menu()?;

        for child in [&placeholder, &content, &menu] {
            wrapper.append_child(child).map_err(js_err("append_child"))?;
        }

        let reference: Option<Element> = self.list.children().item(index as u32);
        self.list
            .insert_before(&wrapper, reference.as_deref())
            .map_err(js_err("insert_before"))?;

        tracing::debug!(
            target: "blockpad::surface",
            id = %block.id,
            index,
            "created block surface"
        );

        let surface = DomSurface {
            wrapper,
            content,
            placeholder,
            menu,
            menu_items,
        };
        surface.set_block_css(&block.block_type.style().css());
        Ok(surface)
    }
}
