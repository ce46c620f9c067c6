//! Editor input types and inline style commands.
//!
//! Platform-agnostic definitions for keyboard input and the closed set of
//! inline styles the editor can apply. Platform-specific code converts from
//! native key events to these types.

use smol_str::SmolStr;

/// Inline style commands.
///
/// Each variant maps to exactly one surface operation. The browser layer is
/// the only place these turn into command names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineStyle {
    Bold,
    Italic,
    Underline,
}

impl InlineStyle {
    /// All inline styles in menu order.
    pub const ALL: [InlineStyle; 3] = [Self::Bold, Self::Italic, Self::Underline];

    /// Style bound to a primary-modifier shortcut key (B, I, U; any case).
    pub fn from_shortcut_key(key: &Key) -> Option<Self> {
        let Key::Character(c) = key else {
            return None;
        };
        match c.to_ascii_lowercase().as_str() {
            "b" => Some(Self::Bold),
            "i" => Some(Self::Italic),
            "u" => Some(Self::Underline),
            _ => None,
        }
    }

    /// Letter used in the shortcut and in the toolbar hint.
    pub fn shortcut_letter(self) -> char {
        match self {
            Self::Bold => 'B',
            Self::Italic => 'I',
            Self::Underline => 'U',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Underline => "Underline",
        }
    }

    /// Human-readable shortcut, e.g. `Ctrl + B` or `⌘ + B`.
    pub fn shortcut_label(self, is_mac: bool) -> String {
        let modifier = if is_mac { "⌘" } else { "Ctrl" };
        format!("{} + {}", modifier, self.shortcut_letter())
    }

    /// Context menu entry text, e.g. `Bold (Ctrl + B)`.
    pub fn menu_label(self, is_mac: bool) -> String {
        format!("{} ({})", self.label(), self.shortcut_label(is_mac))
    }
}

/// Key values for keyboard input.
///
/// Only the keys the block editor reacts to get their own variant. Everything
/// else arrives as `Character` or `Unidentified` and passes through.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A character key.
    Character(SmolStr),

    /// Unknown/unidentified key.
    Unidentified,

    Enter,
}

impl Key {
    /// Create a character key.
    pub fn character(s: impl Into<SmolStr>) -> Self {
        Self::Character(s.into())
    }
}

/// Modifier key state for a key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        ctrl: false,
        alt: false,
        shift: true,
        meta: false,
    };

    pub const META: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: true,
    };

    /// Whether either Ctrl or Meta is held.
    ///
    /// Formatting shortcuts accept both on every platform, so Ctrl+B works on
    /// a Mac keyboard too.
    pub fn has_command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Result of handling a keydown event.
#[derive(Debug, Clone, PartialEq)]
pub enum KeydownResult {
    /// Event was handled, prevent default.
    Handled,
    /// Event was not a keybinding, let platform handle it.
    NotHandled,
    /// Event should be passed through (line breaks, navigation, etc.).
    PassThrough,
}

impl KeydownResult {
    /// Whether the platform default action must be suppressed.
    pub fn prevents_default(&self) -> bool {
        matches!(self, Self::Handled)
    }
}
