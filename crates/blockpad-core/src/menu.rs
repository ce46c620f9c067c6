//! Formatting context menu state.

use crate::actions::InlineStyle;

/// Pointer position in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuPosition {
    pub x: f64,
    pub y: f64,
}

impl MenuPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One entry of the formatting menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub style: InlineStyle,
    pub label: String,
}

/// Visibility and placement of a block's formatting menu.
///
/// Holds no selection; the owning block editor keeps the capture and drops it
/// whenever the menu closes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContextMenu {
    visible: bool,
    position: MenuPosition,
}

impl ContextMenu {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn position(&self) -> MenuPosition {
        self.position
    }

    pub fn open(&mut self, position: MenuPosition) {
        self.visible = true;
        self.position = position;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Menu entries in display order.
    pub fn items(is_mac: bool) -> Vec<MenuItem> {
        InlineStyle::ALL
            .iter()
            .map(|&style| MenuItem {
                style,
                label: style.menu_label(is_mac),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close() {
        let mut menu = ContextMenu::default();
        assert!(!menu.is_visible());

        menu.open(MenuPosition::new(10.0, 20.0));
        assert!(menu.is_visible());
        assert_eq!(menu.position(), MenuPosition::new(10.0, 20.0));

        menu.close();
        assert!(!menu.is_visible());
    }

    #[test]
    fn test_items() {
        let labels: Vec<_> = ContextMenu::items(false)
            .into_iter()
            .map(|i| i.label)
            .collect();
        assert_eq!(
            labels,
            ["Bold (Ctrl + B)", "Italic (Ctrl + I)", "Underline (Ctrl + U)"]
        );
    }
}
