//! Block store: the single source of truth for the block list.
//!
//! Owns the ordered blocks and the index of the block that last received
//! input focus. Every mutation validates its arguments before touching the
//! list, so a failed call never leaves a half-updated document behind.

use crate::config::BlockSeed;
use crate::error::EditorError;
use crate::types::{Block, BlockId, BlockType, BlockView, DocumentView};

/// Ordered block list plus focus tracking.
#[derive(Debug, Clone)]
pub struct BlockStore {
    blocks: Vec<Block>,
    focused: Option<usize>,
    /// Next sequence number for block ids. Never decremented.
    next_seq: u64,
    /// Bumped on every successful mutation.
    revision: u64,
}

impl Default for BlockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockStore {
    /// Create a document holding a single empty paragraph.
    pub fn new() -> Self {
        let mut store = Self {
            blocks: Vec::new(),
            focused: None,
            next_seq: 0,
            revision: 0,
        };
        let block = store.fresh_block(BlockType::Paragraph, String::new());
        store.blocks.push(block);
        store
    }

    /// Create a document from seed blocks, each getting a fresh id.
    ///
    /// An empty seed list yields the default single empty paragraph.
    pub fn with_blocks(seeds: &[BlockSeed]) -> Self {
        if seeds.is_empty() {
            return Self::new();
        }
        let mut store = Self {
            blocks: Vec::with_capacity(seeds.len()),
            focused: None,
            next_seq: 0,
            revision: 0,
        };
        for seed in seeds {
            let block = store.fresh_block(seed.block_type, seed.content.clone());
            store.blocks.push(block);
        }
        store
    }

    fn fresh_block(&mut self, block_type: BlockType, content: String) -> Block {
        let id = BlockId::from_seq(self.next_seq);
        self.next_seq += 1;
        Block::new(id, block_type, content)
    }

    fn check_index(&self, index: usize) -> Result<(), EditorError> {
        if index < self.blocks.len() {
            Ok(())
        } else {
            Err(EditorError::IndexOutOfRange {
                index,
                len: self.blocks.len(),
            })
        }
    }

    // === Accessors ===

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false for a store built through the public constructors.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// Current index of the block with this id.
    pub fn position_of(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| &b.id == id)
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    pub fn focused_block(&self) -> Option<&Block> {
        self.focused.and_then(|i| self.blocks.get(i))
    }

    /// Revision counter; changes whenever the document or focus changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Id the next inserted block will get.
    pub fn next_block_id(&self) -> BlockId {
        BlockId::from_seq(self.next_seq)
    }

    /// Snapshot for the presentation layer.
    pub fn view(&self) -> DocumentView {
        DocumentView {
            blocks: self
                .blocks
                .iter()
                .enumerate()
                .map(|(i, b)| BlockView {
                    id: b.id.clone(),
                    block_type: b.block_type,
                    content: b.content.clone(),
                    is_focused: self.focused == Some(i),
                })
                .collect(),
            focused_index: self.focused,
        }
    }

    // === Mutations ===

    /// Insert a new empty paragraph immediately after `index`.
    ///
    /// Returns the id of the new block. Blocks after `index` shift right; the
    /// focused index follows its block if it shifted.
    pub fn insert_block_after(&mut self, index: usize) -> Result<BlockId, EditorError> {
        self.check_index(index)?;

        let block = self.fresh_block(BlockType::Paragraph, String::new());
        let id = block.id.clone();
        self.blocks.insert(index + 1, block);

        if let Some(focused) = self.focused {
            if focused > index {
                self.focused = Some(focused + 1);
            }
        }
        self.revision += 1;

        tracing::debug!(
            target: "blockpad::store",
            index,
            id = %id,
            len = self.blocks.len(),
            "inserted block"
        );
        Ok(id)
    }

    /// Replace the block at `index` wholesale.
    ///
    /// The replacement must carry the id of the block it replaces.
    pub fn replace_block(&mut self, index: usize, updated: Block) -> Result<(), EditorError> {
        self.check_index(index)?;
        let current = &self.blocks[index];
        if current.id != updated.id {
            return Err(EditorError::IdMismatch {
                index,
                expected: current.id.clone(),
                found: updated.id,
            });
        }

        if *current != updated {
            self.blocks[index] = updated;
            self.revision += 1;
        }
        Ok(())
    }

    /// Record which block most recently received input focus.
    pub fn set_focused_index(&mut self, index: Option<usize>) -> Result<(), EditorError> {
        if let Some(i) = index {
            self.check_index(i)?;
        }
        if self.focused != index {
            self.focused = index;
            self.revision += 1;
        }
        Ok(())
    }

    /// Change the focused block's type, keeping its content byte-for-byte.
    ///
    /// Returns false (and changes nothing) when no block is focused.
    pub fn set_block_type(&mut self, block_type: BlockType) -> bool {
        let Some(index) = self.focused else {
            tracing::debug!(target: "blockpad::store", "set_block_type with no focused block");
            return false;
        };
        let Some(block) = self.blocks.get(index) else {
            return false;
        };
        let updated = block.with_type(block_type);
        match self.replace_block(index, updated) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(target: "blockpad::store", "set_block_type failed: {}", e);
                false
            }
        }
    }
}
