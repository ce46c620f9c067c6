//! Block-type toolbar.
//!
//! Stateless: every button state is derived from the store on demand, and a
//! press is forwarded straight to [`BlockStore::set_block_type`].

use crate::actions::InlineStyle;
use crate::store::BlockStore;
use crate::types::BlockType;

/// Render state of one block-type button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolbarButton {
    pub block_type: BlockType,
    pub label: &'static str,
    /// The focused block has this type.
    pub active: bool,
    /// No block is focused.
    pub disabled: bool,
}

/// Passive shortcut hint shown next to the buttons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatHint {
    pub letter: char,
    pub shortcut: String,
}

pub struct Toolbar;

impl Toolbar {
    /// Button states for the current document.
    pub fn buttons(store: &BlockStore) -> Vec<ToolbarButton> {
        let focused_type = store.focused_block().map(|b| b.block_type);
        let disabled = focused_type.is_none();
        BlockType::ALL
            .iter()
            .map(|&block_type| ToolbarButton {
                block_type,
                label: block_type.label(),
                active: focused_type == Some(block_type),
                disabled,
            })
            .collect()
    }

    /// A block-type button was clicked.
    pub fn press(store: &mut BlockStore, block_type: BlockType) -> bool {
        store.set_block_type(block_type)
    }

    pub fn format_hints(is_mac: bool) -> Vec<FormatHint> {
        InlineStyle::ALL
            .iter()
            .map(|&style| FormatHint {
                letter: style.shortcut_letter(),
                shortcut: style.shortcut_label(is_mac),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_without_focus() {
        let store = BlockStore::new();
        let buttons = Toolbar::buttons(&store);
        assert_eq!(buttons.len(), 7);
        assert!(buttons.iter().all(|b| b.disabled && !b.active));
    }

    #[test]
    fn test_active_on_first_block() {
        let mut store = BlockStore::new();
        store.set_focused_index(Some(0)).unwrap();

        let buttons = Toolbar::buttons(&store);
        let active: Vec<_> = buttons.iter().filter(|b| b.active).map(|b| b.label).collect();
        assert_eq!(active, ["P"]);
        assert!(buttons.iter().all(|b| !b.disabled));
    }

    #[test]
    fn test_press_changes_focused_type() {
        let mut store = BlockStore::new();
        store.insert_block_after(0).unwrap();
        store.set_focused_index(Some(1)).unwrap();

        assert!(Toolbar::press(&mut store, BlockType::Heading2));
        assert_eq!(store.get(1).unwrap().block_type, BlockType::Heading2);
        assert_eq!(store.get(0).unwrap().block_type, BlockType::Paragraph);

        let active: Vec<_> = Toolbar::buttons(&store)
            .into_iter()
            .filter(|b| b.active)
            .map(|b| b.block_type)
            .collect();
        assert_eq!(active, [BlockType::Heading2]);
    }

    #[test]
    fn test_press_without_focus() {
        let mut store = BlockStore::new();
        assert!(!Toolbar::press(&mut store, BlockType::Heading1));
        assert_eq!(store.get(0).unwrap().block_type, BlockType::Paragraph);
    }

    #[test]
    fn test_format_hints() {
        let hints = Toolbar::format_hints(false);
        let letters: Vec<_> = hints.iter().map(|h| h.letter).collect();
        assert_eq!(letters, ['B', 'I', 'U']);
        assert_eq!(hints[0].shortcut, "Ctrl + B");
    }
}
