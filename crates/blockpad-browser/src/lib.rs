//! Browser DOM layer for the blockpad editor.
//!
//! This crate binds the core block editor to real `contenteditable`
//! elements. It assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `surface`: `EditableSurface` over a contenteditable element, using the
//!   Selection API and `execCommand`
//! - `events`: keyboard and pointer event extraction
//! - `view`: toolbar and editor chrome rendering
//! - `platform`: Browser/OS detection for shortcut labels
//!
//! # Re-exports
//!
//! This crate re-exports `blockpad-core` for convenience, so consumers
//! only need to depend on `blockpad-browser`.

// Re-export core crate
pub use blockpad_core;
pub use blockpad_core::*;

pub mod events;
pub mod platform;
pub mod surface;
pub mod view;

pub use events::{keydown_from_event, menu_position, modifiers_from_event, parse_key};
pub use platform::{Platform, platform};
pub use surface::{DomSurface, DomSurfaceProvider};
pub use view::{EditorDom, ToolbarDom};
