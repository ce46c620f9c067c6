//! DOM listeners for a mounted editor.
//!
//! Every listener holds a weak handle to the editor state and takes it with
//! `try_borrow_mut`. Our own DOM calls fire some events synchronously:
//! `execCommand` fires `input` and `focus()` fires `focus`. Those find the
//! state borrowed and are skipped, and the handler that caused them has
//! already accounted for them.

use std::cell::RefCell;
use std::rc::Weak;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent};

use blockpad_browser::{
    DomSurface, DomSurfaceProvider, EditorDom, keydown_from_event, menu_position,
};
use blockpad_core::{BlockId, Editor, EditorError};

use crate::editor::{Mounted, State};

pub(crate) type WeakState = Weak<RefCell<State>>;

/// Work left for after the state borrow is released.
///
/// Both steps can re-enter the editor: focusing fires a `focus` event, and the
/// host's onChange callback may call back into the editor.
#[derive(Default)]
pub(crate) struct Followup {
    focus: Option<HtmlElement>,
    on_change: Option<js_sys::Function>,
}

impl Followup {
    pub(crate) fn run(self) {
        if let Some(element) = self.focus {
            if let Err(e) = element.focus() {
                tracing::debug!(target: "blockpad::js", "focus failed: {:?}", e);
            }
        }
        if let Some(callback) = self.on_change {
            let this = JsValue::null();
            let _ = callback.call0(&this);
        }
    }
}

impl Mounted {
    /// Bring listeners and chrome in line with the session.
    pub(crate) fn refresh(&mut self, weak: &WeakState, changed: bool) -> Followup {
        for block_editor in self.editor.block_editors() {
            if self.block_listeners.contains_key(block_editor.id()) {
                continue;
            }
            let listeners = wire_block(weak, block_editor.id(), block_editor.surface());
            self.block_listeners.insert(block_editor.id().clone(), listeners);
        }
        self.dom.sync(&self.editor);

        let focus = self
            .editor
            .take_pending_focus()
            .and_then(|id| self.editor.block_editor(&id))
            .map(|e| e.surface().content_element().clone());
        let on_change = if changed { self.on_change.clone() } else { None };
        Followup { focus, on_change }
    }
}

/// Run `f` against the mounted session, unless the state is busy or gone.
fn with_session(
    weak: &WeakState,
    event: &'static str,
    f: impl FnOnce(&mut Editor<DomSurfaceProvider>) -> Result<(), EditorError>,
) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    let followup = {
        let Ok(mut guard) = state.try_borrow_mut() else {
            tracing::trace!(target: "blockpad::js", event, "nested event skipped");
            return;
        };
        let State::Mounted(mounted) = &mut *guard else {
            return;
        };

        let before = mounted.editor.store().revision();
        if let Err(e) = f(&mut mounted.editor) {
            // Listeners only pass ids of live blocks.
            debug_assert!(!e.is_contract_violation(), "{} handler: {}", event, e);
            tracing::warn!(target: "blockpad::js", event, "{}", e);
        }
        let changed = mounted.editor.store().revision() != before;
        mounted.refresh(weak, changed)
    };
    followup.run();
}

/// Listen to one block's surface and menu.
pub(crate) fn wire_block(
    weak: &WeakState,
    id: &BlockId,
    surface: &DomSurface,
) -> Vec<EventListener> {
    let content = surface.content_element();
    let active = EventListenerOptions::enable_prevent_default();
    let mut listeners = Vec::with_capacity(5 + surface.menu_items().len());

    listeners.push({
        let (weak, id) = (weak.clone(), id.clone());
        EventListener::new(content, "input", move |_| {
            with_session(&weak, "input", |editor| editor.content_changed(&id));
        })
    });

    listeners.push({
        let (weak, id) = (weak.clone(), id.clone());
        EventListener::new_with_options(content, "keydown", active, move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let (key, modifiers) = keydown_from_event(event);
            with_session(&weak, "keydown", |editor| {
                let result = editor.keydown(&id, &key, modifiers)?;
                if result.prevents_default() {
                    event.prevent_default();
                }
                Ok(())
            });
        })
    });

    listeners.push({
        let (weak, id) = (weak.clone(), id.clone());
        EventListener::new_with_options(content, "contextmenu", active, move |event| {
            // The platform menu never shows, whether or not ours opens.
            event.prevent_default();
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let pointer = menu_position(event);
            with_session(&weak, "contextmenu", |editor| {
                editor.context_menu(&id, pointer).map(|_| ())
            });
        })
    });

    listeners.push({
        let (weak, id) = (weak.clone(), id.clone());
        EventListener::new(content, "focus", move |_| {
            with_session(&weak, "focus", |editor| editor.focused(&id));
        })
    });

    listeners.push({
        let (weak, id) = (weak.clone(), id.clone());
        EventListener::new(surface.menu_element(), "mouseleave", move |_| {
            with_session(&weak, "mouseleave", |editor| editor.dismiss_menu(&id));
        })
    });

    for (style, item) in surface.menu_items() {
        let (weak, id, style) = (weak.clone(), id.clone(), *style);
        listeners.push(EventListener::new(item, "click", move |_| {
            with_session(&weak, "menu", |editor| {
                editor.apply_formatting(&id, style)?;
                // Formatting refocuses the surface while the session is held.
                editor.focused(&id)
            });
        }));
    }

    listeners
}

/// Listen to the block-type buttons.
pub(crate) fn wire_toolbar(weak: &WeakState, dom: &EditorDom) -> Vec<EventListener> {
    dom.toolbar()
        .buttons()
        .iter()
        .map(|(block_type, button)| {
            let (weak, block_type) = (weak.clone(), *block_type);
            EventListener::new(button, "click", move |_| {
                with_session(&weak, "toolbar", |editor| {
                    if !editor.set_block_type(block_type) {
                        tracing::debug!(target: "blockpad::js", ?block_type, "no focused block");
                    }
                    Ok(())
                });
            })
        })
        .collect()
}
