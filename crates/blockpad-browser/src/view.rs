//! Editor chrome rendering.
//!
//! Builds the toolbar and block list elements inside a host container and
//! keeps their visual state in line with the session after every event.
//! Block content is never rendered from here; surfaces own their markup.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use blockpad_core::{BlockEditor, BlockType, Editor, SurfaceError, Toolbar, ToolbarButton};

use crate::surface::{DomSurface, DomSurfaceProvider};

pub const ROOT_CLASS: &str = "blockpad";
pub const TOOLBAR_CLASS: &str = "blockpad-toolbar";
pub const LIST_CLASS: &str = "blockpad-blocks";
pub const ACTIVE_CLASS: &str = "active";

fn create_element(
    document: &Document,
    tag: &str,
    class: &str,
) -> Result<HtmlElement, SurfaceError> {
    let element = document
        .create_element(tag)
        .map_err(|e| format!("create_element({}) failed: {:?}", tag, e))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| "created element is not an HtmlElement")?;
    element.set_class_name(class);
    Ok(element)
}

fn append(parent: &HtmlElement, child: &HtmlElement) -> Result<(), SurfaceError> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| format!("append_child failed: {:?}", e).into())
}

/// Block-type buttons plus the passive shortcut hints.
pub struct ToolbarDom {
    root: HtmlElement,
    buttons: Vec<(BlockType, HtmlElement)>,
}

impl ToolbarDom {
    pub fn build(document: &Document, is_mac: bool) -> Result<Self, SurfaceError> {
        let root = create_element(document, "div", TOOLBAR_CLASS)?;

        let mut buttons = Vec::with_capacity(BlockType::ALL.len());
        for block_type in BlockType::ALL {
            let button = create_element(document, "button", "blockpad-toolbar-button")?;
            let _ = button.set_attribute("type", "button");
            let _ = button.set_attribute("data-block-type", block_type.name());
            button.set_text_content(Some(block_type.label()));
            append(&root, &button)?;
            buttons.push((block_type, button));
        }

        for hint in Toolbar::format_hints(is_mac) {
            let span = create_element(document, "span", "blockpad-toolbar-hint")?;
            span.set_text_content(Some(&format!("{}: {}", hint.letter, hint.shortcut)));
            append(&root, &span)?;
        }

        Ok(Self { root, buttons })
    }

    pub fn root(&self) -> &HtmlElement {
        &self.root
    }

    /// Buttons in toolbar order.
    pub fn buttons(&self) -> &[(BlockType, HtmlElement)] {
        &self.buttons
    }

    /// Apply active/disabled state.
    pub fn sync(&self, states: &[ToolbarButton]) {
        for state in states {
            let Some((_, button)) = self.buttons.iter().find(|(ty, _)| *ty == state.block_type)
            else {
                continue;
            };
            let class_list = button.class_list();
            if state.active {
                let _ = class_list.add_1(ACTIVE_CLASS);
            } else {
                let _ = class_list.remove_1(ACTIVE_CLASS);
            }
            if state.disabled {
                let _ = button.set_attribute("disabled", "");
            } else {
                let _ = button.remove_attribute("disabled");
            }
        }
    }
}

/// Everything the editor adds to its host container.
pub struct EditorDom {
    root: HtmlElement,
    toolbar: ToolbarDom,
    list: HtmlElement,
}

impl EditorDom {
    /// Build the chrome and append it to `container`.
    pub fn build(
        document: &Document,
        container: &HtmlElement,
        is_mac: bool,
    ) -> Result<Self, SurfaceError> {
        let root = create_element(document, "div", ROOT_CLASS)?;
        let toolbar = ToolbarDom::build(document, is_mac)?;
        let list = create_element(document, "div", LIST_CLASS)?;

        append(&root, toolbar.root())?;
        append(&root, &list)?;
        append(container, &root)?;

        Ok(Self {
            root,
            toolbar,
            list,
        })
    }

    pub fn root(&self) -> &HtmlElement {
        &self.root
    }

    pub fn toolbar(&self) -> &ToolbarDom {
        &self.toolbar
    }

    /// Element the block wrappers live in.
    pub fn list(&self) -> &HtmlElement {
        &self.list
    }

    /// Refresh toolbar and per-block chrome from the session.
    pub fn sync(&self, editor: &Editor<DomSurfaceProvider>) {
        self.toolbar.sync(&editor.toolbar_buttons());
        for block_editor in editor.block_editors() {
            sync_block(block_editor);
        }
    }

    /// Detach everything from the host container.
    pub fn remove(&self) {
        self.root.remove();
    }
}

/// Apply one block editor's placeholder, style and menu state to its surface.
pub fn sync_block(editor: &BlockEditor<DomSurface>) {
    let surface = editor.surface();
    surface.set_placeholder_visible(editor.is_placeholder_visible());
    surface.set_block_css(&editor.block_type().style().css());
    surface.sync_menu(editor.menu());
}
