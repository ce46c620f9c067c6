//! Platform abstraction traits for editing surfaces.
//!
//! These traits define the interface between the block editor logic and the
//! platform-specific editable region (a browser `contenteditable` element, an
//! in-memory buffer for tests, a native text widget...). The core never touches
//! a DOM directly; it only talks to an [`EditableSurface`].

use crate::actions::InlineStyle;
use crate::types::Block;

/// Error type for surface operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceError(pub String);

impl std::fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for SurfaceError {}

impl From<&str> for SurfaceError {
    fn from(s: &str) -> Self {
        SurfaceError(s.to_string())
    }
}

impl From<String> for SurfaceError {
    fn from(s: String) -> Self {
        SurfaceError(s)
    }
}

/// A saved selection range plus the text it covered when captured.
///
/// Owned by the block editor that captured it and consumed by value, so a
/// capture can be applied at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionCapture<R> {
    range: R,
    text: String,
}

impl<R> SelectionCapture<R> {
    pub fn new(range: R, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }

    /// The surface-specific range handle.
    pub fn range(&self) -> &R {
        &self.range
    }

    /// Text covered by the selection at capture time.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the selection covers any non-whitespace text.
    pub fn has_visible_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn into_range(self) -> R {
        self.range
    }
}

/// Platform-specific editable region bound to one block.
///
/// Content is read from the surface, never pushed into it after mount. The
/// only write is [`EditableSurface::write_content_once`], which must refuse
/// to clobber a surface that already has content.
pub trait EditableSurface {
    /// Opaque selection range handle.
    type Range: Clone;

    /// Current markup of the surface.
    fn read_content(&self) -> String;

    /// Seed the surface with initial markup if it is still empty.
    ///
    /// Returns true if the content was written.
    fn write_content_once(&mut self, initial: &str) -> bool;

    /// Capture the live selection, if it lies inside this surface.
    ///
    /// Collapsed selections may be returned; callers check
    /// [`SelectionCapture::has_visible_text`].
    fn capture_active_selection(&self) -> Option<SelectionCapture<Self::Range>>;

    /// Make a previously captured range the active selection again.
    fn restore_selection(&mut self, range: &Self::Range) -> Result<(), SurfaceError>;

    /// Apply an inline style to a previously captured range.
    fn apply_selection_command(
        &mut self,
        range: &Self::Range,
        style: InlineStyle,
    ) -> Result<(), SurfaceError>;

    /// Apply an inline style to whatever is selected right now.
    fn apply_live_command(&mut self, style: InlineStyle) -> Result<(), SurfaceError>;

    /// Move input focus to the surface.
    fn focus(&mut self) -> Result<(), SurfaceError>;
}

/// Creates surfaces for newly mounted blocks.
///
/// The editor session calls this whenever a block appears in the store that
/// has no surface yet (initial mount and every insertion).
pub trait SurfaceProvider {
    type Surface: EditableSurface;

    /// Create a surface for `block`, which will live at `index`.
    fn create_surface(
        &mut self,
        index: usize,
        block: &Block,
    ) -> Result<Self::Surface, SurfaceError>;
}
