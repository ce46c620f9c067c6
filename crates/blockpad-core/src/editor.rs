//! Editor session: one block store plus one block editor per block.
//!
//! The session is the owner that block editors report to. It routes each
//! [`BlockEvent`] to the matching store operation and keeps the list of
//! block editors aligned with the store's block list (same length, same ids,
//! same order).

use crate::actions::{InlineStyle, Key, KeydownResult, Modifiers};
use crate::block_editor::{BlockEditor, BlockEvent};
use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::menu::MenuPosition;
use crate::platform::SurfaceProvider;
use crate::store::BlockStore;
use crate::toolbar::{Toolbar, ToolbarButton};
use crate::types::{Block, BlockId, BlockType, DocumentView};

/// A mounted document.
pub struct Editor<P: SurfaceProvider> {
    store: BlockStore,
    editors: Vec<BlockEditor<P::Surface>>,
    provider: P,
    /// Block that should receive input focus once the host is free to move it.
    pending_focus: Option<BlockId>,
}

impl<P: SurfaceProvider> Editor<P> {
    /// Build the document from config and mount a surface for every block.
    pub fn new(config: &EditorConfig, provider: P) -> Result<Self, EditorError> {
        Self::with_store(BlockStore::with_blocks(&config.initial_blocks), provider)
    }

    /// Mount an existing store.
    pub fn with_store(store: BlockStore, mut provider: P) -> Result<Self, EditorError> {
        let mut editors = Vec::with_capacity(store.len());
        for (i, block) in store.blocks().iter().enumerate() {
            let surface = provider.create_surface(i, block)?;
            editors.push(BlockEditor::mount(block, surface));
        }
        Ok(Self {
            store,
            editors,
            provider,
            pending_focus: None,
        })
    }

    // === Accessors ===

    pub fn store(&self) -> &BlockStore {
        &self.store
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn block_editors(&self) -> &[BlockEditor<P::Surface>] {
        &self.editors
    }

    pub fn block_editor(&self, id: &BlockId) -> Option<&BlockEditor<P::Surface>> {
        self.editors.iter().find(|e| e.id() == id)
    }

    pub fn block_editor_mut(&mut self, id: &BlockId) -> Option<&mut BlockEditor<P::Surface>> {
        self.editors.iter_mut().find(|e| e.id() == id)
    }

    pub fn view(&self) -> DocumentView {
        self.store.view()
    }

    pub fn toolbar_buttons(&self) -> Vec<ToolbarButton> {
        Toolbar::buttons(&self.store)
    }

    /// Take the block that should be focused next, if any.
    ///
    /// Moving platform focus can fire focus events synchronously, so the host
    /// does it after it is done with the session.
    pub fn take_pending_focus(&mut self) -> Option<BlockId> {
        self.pending_focus.take()
    }

    fn index_of(&self, id: &BlockId) -> Result<usize, EditorError> {
        self.store
            .position_of(id)
            .ok_or_else(|| EditorError::UnknownBlock(id.clone()))
    }

    fn editor_at(&mut self, id: &BlockId) -> Result<&mut BlockEditor<P::Surface>, EditorError> {
        let index = self.index_of(id)?;
        Ok(&mut self.editors[index])
    }

    // === Store operations ===

    /// Insert an empty paragraph after `index` and mount a surface for it.
    ///
    /// The surface is created before the store changes, so a provider failure
    /// leaves the document as it was.
    pub fn insert_block_after(&mut self, index: usize) -> Result<BlockId, EditorError> {
        if index >= self.store.len() {
            return Err(EditorError::IndexOutOfRange {
                index,
                len: self.store.len(),
            });
        }
        let new_index = index + 1;
        let block = Block::new(self.store.next_block_id(), BlockType::Paragraph, "");
        let surface = self.provider.create_surface(new_index, &block)?;

        let id = self.store.insert_block_after(index)?;
        debug_assert_eq!(id, block.id);
        self.editors.insert(new_index, BlockEditor::mount(&block, surface));
        self.pending_focus = Some(id.clone());
        Ok(id)
    }

    /// Toolbar button: change the focused block's type.
    pub fn set_block_type(&mut self, block_type: BlockType) -> bool {
        if !Toolbar::press(&mut self.store, block_type) {
            return false;
        }
        if let Some(index) = self.store.focused_index() {
            self.editors[index].sync_block_type(block_type);
        }
        true
    }

    pub fn set_focused_index(&mut self, index: Option<usize>) -> Result<(), EditorError> {
        self.store.set_focused_index(index)
    }

    /// Apply an event reported by the block editor for `id`.
    pub fn dispatch(&mut self, id: &BlockId, event: BlockEvent) -> Result<(), EditorError> {
        let index = self.index_of(id)?;
        match event {
            BlockEvent::Updated(block) => self.store.replace_block(index, block),
            BlockEvent::AddBlockAfter => self.insert_block_after(index).map(|_| ()),
            BlockEvent::Focused => self.store.set_focused_index(Some(index)),
        }
    }

    fn dispatch_opt(&mut self, id: &BlockId, event: Option<BlockEvent>) -> Result<(), EditorError> {
        match event {
            Some(event) => self.dispatch(id, event),
            None => Ok(()),
        }
    }

    // === Surface events ===

    /// The surface for `id` reported an edit.
    pub fn content_changed(&mut self, id: &BlockId) -> Result<(), EditorError> {
        let event = self.editor_at(id)?.on_content_change();
        self.dispatch(id, event)
    }

    /// A key went down in the surface for `id`.
    pub fn keydown(
        &mut self,
        id: &BlockId,
        key: &Key,
        modifiers: Modifiers,
    ) -> Result<KeydownResult, EditorError> {
        let (result, event) = self.editor_at(id)?.handle_keydown(key, modifiers);
        self.dispatch_opt(id, event)?;
        Ok(result)
    }

    /// Right-click in the surface for `id`. Returns whether the menu opened.
    pub fn context_menu(
        &mut self,
        id: &BlockId,
        pointer: MenuPosition,
    ) -> Result<bool, EditorError> {
        Ok(self.editor_at(id)?.on_context_menu(pointer))
    }

    /// Menu item clicked in the menu for `id`. Returns whether a style was applied.
    pub fn apply_formatting(
        &mut self,
        id: &BlockId,
        style: InlineStyle,
    ) -> Result<bool, EditorError> {
        let event = self.editor_at(id)?.apply_formatting(style);
        let applied = event.is_some();
        self.dispatch_opt(id, event)?;
        Ok(applied)
    }

    /// Pointer left the menu for `id`.
    pub fn dismiss_menu(&mut self, id: &BlockId) -> Result<(), EditorError> {
        self.editor_at(id)?.dismiss_menu();
        Ok(())
    }

    /// The surface for `id` received focus.
    pub fn focused(&mut self, id: &BlockId) -> Result<(), EditorError> {
        let event = self.editor_at(id)?.on_focus();
        self.dispatch(id, event)
    }
}
