//! blockpad-core: Pure Rust block editor logic without framework dependencies.
//!
//! This crate provides:
//! - `BlockStore` - ordered block list and focus tracking
//! - `BlockEditor<S>` - per-block editing state machine, generic over its surface
//! - `EditableSurface` trait for the platform editing region
//! - `MemorySurface` - in-memory surface for headless use and tests
//! - `Editor<P>` - session that wires block editors to the store
//! - Toolbar and context menu state

pub mod actions;
pub mod block_editor;
pub mod config;
pub mod editor;
pub mod error;
pub mod memory;
pub mod menu;
pub mod placeholder;
pub mod platform;
pub mod store;
pub mod toolbar;
pub mod types;

pub use actions::{InlineStyle, Key, KeydownResult, Modifiers};
pub use block_editor::{BlockEditor, BlockEvent};
pub use config::{BlockSeed, DEFAULT_PLACEHOLDER, EditorConfig, PlatformHint};
pub use editor::Editor;
pub use error::EditorError;
pub use memory::{MemorySurface, MemorySurfaceProvider};
pub use menu::{ContextMenu, MenuItem, MenuPosition};
pub use placeholder::{PlaceholderState, is_visually_empty};
pub use platform::{EditableSurface, SelectionCapture, SurfaceError, SurfaceProvider};
pub use smol_str::SmolStr;
pub use store::BlockStore;
pub use toolbar::{FormatHint, Toolbar, ToolbarButton};
pub use types::{Block, BlockId, BlockStyle, BlockType, BlockView, DocumentView, FontSize};
