//! In-memory editing surface.
//!
//! `MemorySurface` stores markup as a plain `String` with a byte-range
//! selection. Inline styles wrap the selected range in `<b>`, `<i>` or `<u>`
//! tags, the same markup a browser `contenteditable` produces. Use it for
//! headless hosts and as the surface in tests.

use std::ops::Range;

use crate::actions::InlineStyle;
use crate::platform::{EditableSurface, SelectionCapture, SurfaceError, SurfaceProvider};
use crate::types::Block;

/// Tag wrapped around a range for each inline style.
fn style_tag(style: InlineStyle) -> &'static str {
    match style {
        InlineStyle::Bold => "b",
        InlineStyle::Italic => "i",
        InlineStyle::Underline => "u",
    }
}

/// Simple field-based surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    content: String,
    selection: Option<Range<usize>>,
    focused: bool,
    /// Every style command applied, in order.
    commands: Vec<InlineStyle>,
}

impl MemorySurface {
    /// Surface that already holds markup (e.g. restored from elsewhere).
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Style commands applied so far.
    pub fn commands(&self) -> &[InlineStyle] {
        &self.commands
    }

    /// Select a byte range of the markup.
    pub fn select(&mut self, range: Range<usize>) -> Result<(), SurfaceError> {
        self.check_range(&range)?;
        self.selection = Some(range);
        Ok(())
    }

    /// Collapse the selection to a caret at `offset`.
    pub fn collapse_to(&mut self, offset: usize) -> Result<(), SurfaceError> {
        self.select(offset..offset)
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Type text at the caret, replacing any selection, like a user would.
    ///
    /// Without a selection the text is appended.
    pub fn type_text(&mut self, text: &str) {
        let range = self
            .selection
            .clone()
            .unwrap_or(self.content.len()..self.content.len());
        self.content.replace_range(range.clone(), text);
        let caret = range.start + text.len();
        self.selection = Some(caret..caret);
    }

    /// Replace all markup, as a browser does on select-all + delete.
    pub fn replace_all(&mut self, markup: &str) {
        self.content = markup.to_string();
        self.selection = Some(markup.len()..markup.len());
    }

    fn check_range(&self, range: &Range<usize>) -> Result<(), SurfaceError> {
        if range.start > range.end
            || range.end > self.content.len()
            || !self.content.is_char_boundary(range.start)
            || !self.content.is_char_boundary(range.end)
        {
            return Err(format!(
                "range {:?} invalid for content of {} bytes",
                range,
                self.content.len()
            )
            .into());
        }
        Ok(())
    }

    fn wrap(&mut self, range: &Range<usize>, style: InlineStyle) -> Result<(), SurfaceError> {
        self.check_range(range)?;
        if range.is_empty() {
            return Err("cannot style a collapsed selection".into());
        }
        let tag = style_tag(style);
        let open = format!("<{}>", tag);
        let close = format!("</{}>", tag);

        let inner = &self.content[range.clone()];
        let wrapped = format!("{}{}{}", open, inner, close);
        let new_end = range.start + wrapped.len();
        self.content.replace_range(range.clone(), &wrapped);
        self.selection = Some(range.start..new_end);
        self.commands.push(style);
        Ok(())
    }
}

impl EditableSurface for MemorySurface {
    type Range = Range<usize>;

    fn read_content(&self) -> String {
        self.content.clone()
    }

    fn write_content_once(&mut self, initial: &str) -> bool {
        if !self.content.is_empty() {
            return false;
        }
        self.content = initial.to_string();
        true
    }

    fn capture_active_selection(&self) -> Option<SelectionCapture<Self::Range>> {
        let range = self.selection.clone()?;
        let text = self.content.get(range.clone())?;
        Some(SelectionCapture::new(range, text))
    }

    fn restore_selection(&mut self, range: &Self::Range) -> Result<(), SurfaceError> {
        self.select(range.clone())
    }

    fn apply_selection_command(
        &mut self,
        range: &Self::Range,
        style: InlineStyle,
    ) -> Result<(), SurfaceError> {
        self.wrap(range, style)
    }

    fn apply_live_command(&mut self, style: InlineStyle) -> Result<(), SurfaceError> {
        let range = self.selection.clone().ok_or("no active selection")?;
        self.wrap(&range, style)
    }

    fn focus(&mut self) -> Result<(), SurfaceError> {
        self.focused = true;
        Ok(())
    }
}

/// Provider handing out empty memory surfaces.
#[derive(Debug, Clone, Default)]
pub struct MemorySurfaceProvider {
    created: usize,
}

impl MemorySurfaceProvider {
    /// Number of surfaces created so far.
    pub fn created(&self) -> usize {
        self.created
    }
}

impl SurfaceProvider for MemorySurfaceProvider {
    type Surface = MemorySurface;

    fn create_surface(
        &mut self,
        _index: usize,
        _block: &Block,
    ) -> Result<MemorySurface, SurfaceError> {
        self.created += 1;
        Ok(MemorySurface::default())
    }
}
