//! Single-block editor.
//!
//! A `BlockEditor` owns one block's editing surface and turns raw interaction
//! into discrete events for its owner. It never pushes content back into the
//! surface after mount: content is read from the live surface on every change,
//! so the platform cursor is never disturbed by a re-render.
//!
//! Deferred formatting works in two steps:
//!
//! 1. `on_context_menu` captures the live selection and opens the menu.
//! 2. `apply_formatting` takes that capture, restores it, applies the style
//!    and closes the menu.
//!
//! The capture lives in an `Option` and is moved out on use, so it is applied
//! at most once and never survives the menu closing.

use crate::actions::{InlineStyle, Key, KeydownResult, Modifiers};
use crate::menu::{ContextMenu, MenuPosition};
use crate::placeholder::PlaceholderState;
use crate::platform::{EditableSurface, SelectionCapture};
use crate::types::{Block, BlockId, BlockType};

/// Events a block editor reports to its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockEvent {
    /// Surface content changed; same id and type, new content.
    Updated(Block),
    /// User committed this block; continue in a new block below.
    AddBlockAfter,
    /// This block received input focus.
    Focused,
}

/// Editor for one block, generic over its surface.
pub struct BlockEditor<S: EditableSurface> {
    id: BlockId,
    block_type: BlockType,
    surface: S,
    placeholder: PlaceholderState,
    menu: ContextMenu,
    capture: Option<SelectionCapture<S::Range>>,
}

impl<S: EditableSurface> BlockEditor<S> {
    /// Bind a block to its surface.
    ///
    /// Seeds the surface with the block's content if the surface is still
    /// empty, and computes the initial placeholder state from that content.
    pub fn mount(block: &Block, mut surface: S) -> Self {
        surface.write_content_once(&block.content);
        Self {
            id: block.id.clone(),
            block_type: block.block_type,
            surface,
            placeholder: PlaceholderState::for_content(&block.content),
            menu: ContextMenu::default(),
            capture: None,
        }
    }

    // === Accessors ===

    pub fn id(&self) -> &BlockId {
        &self.id
    }

    pub fn block_type(&self) -> BlockType {
        self.block_type
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn placeholder(&self) -> PlaceholderState {
        self.placeholder
    }

    pub fn is_placeholder_visible(&self) -> bool {
        self.placeholder.is_visible()
    }

    pub fn menu(&self) -> &ContextMenu {
        &self.menu
    }

    /// Whether a selection is waiting for a menu choice.
    pub fn has_capture(&self) -> bool {
        self.capture.is_some()
    }

    /// Owner pushed a type change down. Only the style changes, never content.
    pub fn sync_block_type(&mut self, block_type: BlockType) {
        self.block_type = block_type;
    }

    // === Events ===

    /// The surface reported an edit.
    pub fn on_content_change(&mut self) -> BlockEvent {
        let content = self.surface.read_content();
        self.placeholder = PlaceholderState::for_content(&content);
        BlockEvent::Updated(Block::new(self.id.clone(), self.block_type, content))
    }

    /// Enter without Shift: commit this block.
    pub fn on_submit_key(&mut self) -> BlockEvent {
        tracing::trace!(target: "blockpad::editor", id = %self.id, "submit key");
        BlockEvent::AddBlockAfter
    }

    /// Apply a style to the live selection right away.
    ///
    /// Returns the resulting content update, or None if the surface refused.
    pub fn on_format_shortcut(&mut self, style: InlineStyle) -> Option<BlockEvent> {
        if let Err(e) = self.surface.apply_live_command(style) {
            tracing::debug!(target: "blockpad::editor", ?style, "shortcut not applied: {}", e);
            return None;
        }
        Some(self.on_content_change())
    }

    /// Route a keydown to the operations above.
    pub fn handle_keydown(
        &mut self,
        key: &Key,
        modifiers: Modifiers,
    ) -> (KeydownResult, Option<BlockEvent>) {
        if *key == Key::Enter {
            if modifiers.shift {
                // Literal line break inside this block.
                return (KeydownResult::PassThrough, None);
            }
            return (KeydownResult::Handled, Some(self.on_submit_key()));
        }

        if modifiers.has_command() && !modifiers.alt {
            if let Some(style) = InlineStyle::from_shortcut_key(key) {
                return (KeydownResult::Handled, self.on_format_shortcut(style));
            }
        }

        (KeydownResult::NotHandled, None)
    }

    /// Right-click on the surface. The platform menu is always suppressed.
    ///
    /// Opens the formatting menu only if text is visibly selected, and returns
    /// whether it did.
    pub fn on_context_menu(&mut self, pointer: MenuPosition) -> bool {
        let Some(capture) = self.surface.capture_active_selection() else {
            return false;
        };
        if !capture.has_visible_text() {
            return false;
        }

        tracing::trace!(
            target: "blockpad::editor",
            id = %self.id,
            x = pointer.x,
            y = pointer.y,
            "opening format menu"
        );
        self.capture = Some(capture);
        self.menu.open(pointer);
        true
    }

    /// Apply a menu choice to the captured selection.
    ///
    /// No-op without a capture. The capture is consumed even if the surface
    /// fails to apply the style.
    pub fn apply_formatting(&mut self, style: InlineStyle) -> Option<BlockEvent> {
        let Some(capture) = self.capture.take() else {
            tracing::debug!(target: "blockpad::editor", ?style, "apply_formatting without capture");
            return None;
        };
        let range = capture.into_range();

        let applied = self
            .surface
            .restore_selection(&range)
            .and_then(|()| self.surface.apply_selection_command(&range, style));
        if let Err(e) = &applied {
            tracing::warn!(target: "blockpad::editor", ?style, "formatting failed: {}", e);
        }

        let event = applied.is_ok().then(|| self.on_content_change());
        self.menu.close();
        if let Err(e) = self.surface.focus() {
            tracing::debug!(target: "blockpad::editor", "focus after formatting failed: {}", e);
        }
        event
    }

    /// Pointer left the menu: hide it and drop the capture.
    pub fn dismiss_menu(&mut self) {
        self.menu.close();
        self.capture = None;
    }

    /// The surface received input focus.
    pub fn on_focus(&mut self) -> BlockEvent {
        BlockEvent::Focused
    }
}
