//! JsBlockEditor - the main editor wrapper for JavaScript.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use blockpad_browser::{DomSurfaceProvider, EditorDom, platform};
use blockpad_core::{BlockId, BlockStore, Editor, EditorConfig, EditorError, Toolbar};

use crate::events::{Followup, wire_toolbar};
use crate::types::{JsDocument, JsEditorConfig, parse_block_type};

/// Live DOM binding of a mounted editor.
pub(crate) struct Mounted {
    pub(crate) editor: Editor<DomSurfaceProvider>,
    pub(crate) dom: EditorDom,
    pub(crate) on_change: Option<js_sys::Function>,
    pub(crate) block_listeners: HashMap<BlockId, Vec<EventListener>>,
    pub(crate) _toolbar_listeners: Vec<EventListener>,
}

pub(crate) enum State {
    /// Not mounted: only the document exists.
    Detached(BlockStore),
    Mounted(Mounted),
}

impl State {
    pub(crate) fn store(&self) -> &BlockStore {
        match self {
            State::Detached(store) => store,
            State::Mounted(mounted) => mounted.editor.store(),
        }
    }
}

fn busy() -> JsError {
    JsError::new("Editor is busy handling another event")
}

fn to_js_error(e: EditorError) -> JsError {
    JsError::new(&e.to_string())
}

/// The block editor instance exposed to JavaScript.
///
/// The document outlives mounting: unmounting keeps the blocks, and a later
/// `mount` builds fresh surfaces from them.
#[wasm_bindgen]
pub struct JsBlockEditor {
    config: EditorConfig,
    is_mac: bool,
    state: Rc<RefCell<State>>,
}

#[wasm_bindgen]
impl JsBlockEditor {
    /// Create an editor. `config` may be omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsBlockEditor, JsError> {
        let config = if config.is_undefined() || config.is_null() {
            EditorConfig::default()
        } else {
            let js: JsEditorConfig = serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?;
            EditorConfig::try_from(js).map_err(|e| JsError::new(&e))?
        };

        crate::init_tracing(config.tracing_level());
        let is_mac = platform().is_mac(config.platform);
        let store = BlockStore::with_blocks(&config.initial_blocks);
        tracing::debug!(target: "blockpad::js", blocks = store.len(), is_mac, "editor created");

        Ok(Self {
            config,
            is_mac,
            state: Rc::new(RefCell::new(State::Detached(store))),
        })
    }

    // === Content access ===

    /// Get the document as `{ blocks, focusedIndex }`.
    #[wasm_bindgen(js_name = getDocument)]
    pub fn get_document(&self) -> Result<JsValue, JsError> {
        let state = self.state.try_borrow().map_err(|_| busy())?;
        let document = JsDocument::from(&state.store().view());
        serde_wasm_bindgen::to_value(&document)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Number of blocks.
    #[wasm_bindgen(js_name = blockCount)]
    pub fn block_count(&self) -> Result<usize, JsError> {
        let state = self.state.try_borrow().map_err(|_| busy())?;
        Ok(state.store().len())
    }

    // === Document operations ===

    /// Insert an empty paragraph after `index`. Returns the new block's id.
    #[wasm_bindgen(js_name = insertBlockAfter)]
    pub fn insert_block_after(&self, index: usize) -> Result<String, JsError> {
        self.apply(|state| match state {
            State::Detached(store) => store.insert_block_after(index),
            State::Mounted(mounted) => mounted.editor.insert_block_after(index),
        })
        .map(|id| id.to_string())
    }

    /// Change the focused block's type (`"paragraph"`, `"heading1"`, ...).
    ///
    /// Returns false when no block is focused.
    #[wasm_bindgen(js_name = setBlockType)]
    pub fn set_block_type(&self, block_type: &str) -> Result<bool, JsError> {
        let block_type = parse_block_type(block_type).map_err(|e| JsError::new(&e))?;
        self.apply(|state| {
            Ok(match state {
                State::Detached(store) => Toolbar::press(store, block_type),
                State::Mounted(mounted) => mounted.editor.set_block_type(block_type),
            })
        })
    }

    /// Set or clear the focused block index.
    #[wasm_bindgen(js_name = setFocusedIndex)]
    pub fn set_focused_index(&self, index: Option<usize>) -> Result<(), JsError> {
        self.apply(|state| match state {
            State::Detached(store) => store.set_focused_index(index),
            State::Mounted(mounted) => mounted.editor.set_focused_index(index),
        })
    }

    // === Mounting ===

    /// Mount the editor into a container element.
    ///
    /// Appends the toolbar and one contenteditable per block to the container
    /// and sets up event handlers. The onChange callback is called after each
    /// change to the document.
    #[wasm_bindgen]
    pub fn mount(
        &self,
        container: &HtmlElement,
        on_change: Option<js_sys::Function>,
    ) -> Result<(), JsError> {
        let followup = {
            let mut state = self.state.try_borrow_mut().map_err(|_| busy())?;
            let State::Detached(store) = &*state else {
                return Err(JsError::new("Editor is already mounted"));
            };

            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or_else(|| JsError::new("No document"))?;
            let dom = EditorDom::build(&document, container, self.is_mac)
                .map_err(|e| JsError::new(&format!("Failed to build editor: {}", e)))?;
            let provider = DomSurfaceProvider::new(
                document,
                dom.list().clone(),
                &self.config.placeholder,
                self.is_mac,
            );
            let editor = match Editor::with_store(store.clone(), provider) {
                Ok(editor) => editor,
                Err(e) => {
                    dom.remove();
                    return Err(to_js_error(e));
                }
            };

            let weak = Rc::downgrade(&self.state);
            let toolbar_listeners = wire_toolbar(&weak, &dom);
            let mut mounted = Mounted {
                editor,
                dom,
                on_change,
                block_listeners: HashMap::new(),
                _toolbar_listeners: toolbar_listeners,
            };
            let followup = mounted.refresh(&weak, false);
            tracing::debug!(target: "blockpad::js", blocks = mounted.editor.len(), "mounted");
            *state = State::Mounted(mounted);
            followup
        };
        followup.run();
        Ok(())
    }

    /// Check if the editor is mounted.
    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.state
            .try_borrow()
            .map(|state| matches!(*state, State::Mounted(_)))
            // Only a DOM event handler holds the state, so it is mounted.
            .unwrap_or(true)
    }

    /// Unmount the editor and clean up. The document is kept.
    #[wasm_bindgen]
    pub fn unmount(&self) {
        let Ok(mut state) = self.state.try_borrow_mut() else {
            tracing::warn!(target: "blockpad::js", "unmount while handling an event ignored");
            return;
        };
        if let State::Mounted(mounted) = &*state {
            let store = mounted.editor.store().clone();
            mounted.dom.remove();
            *state = State::Detached(store);
            tracing::debug!(target: "blockpad::js", "unmounted");
        }
    }

    /// Focus the focused block, or the first block if none is focused.
    #[wasm_bindgen]
    pub fn focus(&self) {
        let target = {
            let Ok(state) = self.state.try_borrow() else {
                return;
            };
            let State::Mounted(mounted) = &*state else {
                return;
            };
            let index = mounted.editor.store().focused_index().unwrap_or(0);
            mounted
                .editor
                .block_editors()
                .get(index)
                .map(|e| e.surface().content_element().clone())
        };
        if let Some(element) = target {
            let _ = element.focus();
        }
    }
}

impl Drop for JsBlockEditor {
    fn drop(&mut self) {
        self.unmount();
    }
}

// Internal methods (not exposed to JS)
impl JsBlockEditor {
    /// Run a document operation, then refresh the DOM and notify.
    fn apply<T>(
        &self,
        op: impl FnOnce(&mut State) -> Result<T, EditorError>,
    ) -> Result<T, JsError> {
        let (result, followup) = {
            let mut state = self.state.try_borrow_mut().map_err(|_| busy())?;
            let before = state.store().revision();
            let result = op(&mut state);
            let changed = state.store().revision() != before;
            let followup = match &mut *state {
                State::Mounted(mounted) => mounted.refresh(&Rc::downgrade(&self.state), changed),
                State::Detached(_) => Followup::default(),
            };
            (result, followup)
        };
        followup.run();
        result.map_err(to_js_error)
    }
}
