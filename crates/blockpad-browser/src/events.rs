//! Browser event extraction.
//!
//! Converts DOM keyboard and pointer events into the core's `Key`,
//! `Modifiers` and `MenuPosition` types.

use blockpad_core::{Key, MenuPosition, Modifiers};

/// Parse a `KeyboardEvent.key` string to the editor's Key enum.
pub fn parse_key(key: &str) -> Key {
    match key {
        "Enter" => Key::Enter,
        s if s.chars().count() == 1 => Key::character(s),
        _ => Key::Unidentified,
    }
}

/// Modifier state of a keyboard event.
pub fn modifiers_from_event(event: &web_sys::KeyboardEvent) -> Modifiers {
    Modifiers {
        ctrl: event.ctrl_key(),
        alt: event.alt_key(),
        shift: event.shift_key(),
        meta: event.meta_key(),
    }
}

/// Key and modifiers of a keyboard event.
pub fn keydown_from_event(event: &web_sys::KeyboardEvent) -> (Key, Modifiers) {
    (parse_key(&event.key()), modifiers_from_event(event))
}

/// Pointer position of a mouse event, in viewport coordinates.
pub fn menu_position(event: &web_sys::MouseEvent) -> MenuPosition {
    MenuPosition::new(event.client_x() as f64, event.client_y() as f64)
}
