//! Core document types: blocks, block types, and the views handed to the
//! presentation layer.
//!
//! These types are framework-agnostic. The browser layer renders them, the
//! store owns them, and block editors emit updated copies of them.

use serde::{Deserialize, Serialize};
use smol_str::{SmolStr, format_smolstr};

/// Opaque, stable block identifier.
///
/// Used as the list key by whatever renders the document. Ids are handed out
/// by [`crate::BlockStore`] and never reused within a store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(SmolStr);

impl BlockId {
    /// Build the id for the given sequence number (format: `b-{seq}`).
    pub fn from_seq(seq: u64) -> Self {
        Self(format_smolstr!("b-{}", seq))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(s: &str) -> Self {
        Self(SmolStr::new(s))
    }
}

/// Block type. Determines presentation only, never content shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    #[default]
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
}

impl BlockType {
    /// All block types in toolbar order.
    pub const ALL: [BlockType; 7] = [
        BlockType::Heading1,
        BlockType::Heading2,
        BlockType::Heading3,
        BlockType::Heading4,
        BlockType::Heading5,
        BlockType::Heading6,
        BlockType::Paragraph,
    ];

    /// Parse the wire name (`"paragraph"`, `"heading1"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "paragraph" => Some(Self::Paragraph),
            "heading1" => Some(Self::Heading1),
            "heading2" => Some(Self::Heading2),
            "heading3" => Some(Self::Heading3),
            "heading4" => Some(Self::Heading4),
            "heading5" => Some(Self::Heading5),
            "heading6" => Some(Self::Heading6),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Heading1 => "heading1",
            Self::Heading2 => "heading2",
            Self::Heading3 => "heading3",
            Self::Heading4 => "heading4",
            Self::Heading5 => "heading5",
            Self::Heading6 => "heading6",
        }
    }

    /// Short toolbar label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Paragraph => "P",
            Self::Heading1 => "H1",
            Self::Heading2 => "H2",
            Self::Heading3 => "H3",
            Self::Heading4 => "H4",
            Self::Heading5 => "H5",
            Self::Heading6 => "H6",
        }
    }

    /// Presentation style for this block type.
    pub fn style(self) -> BlockStyle {
        use FontSize::*;
        match self {
            Self::Paragraph => BlockStyle::new(Md, false),
            Self::Heading1 => BlockStyle::new(Xxl, true),
            Self::Heading2 => BlockStyle::new(Xl, true),
            Self::Heading3 => BlockStyle::new(Lg, true),
            Self::Heading4 => BlockStyle::new(Md, true),
            Self::Heading5 => BlockStyle::new(Sm, true),
            Self::Heading6 => BlockStyle::new(Xs, true),
        }
    }
}

/// Font size scale used by block styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontSize {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl FontSize {
    pub fn rem(self) -> &'static str {
        match self {
            Self::Xs => "0.75rem",
            Self::Sm => "0.875rem",
            Self::Md => "1rem",
            Self::Lg => "1.125rem",
            Self::Xl => "1.25rem",
            Self::Xxl => "1.5rem",
        }
    }
}

/// Visual style of a block surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockStyle {
    pub font_size: FontSize,
    pub bold: bool,
}

impl BlockStyle {
    pub fn new(font_size: FontSize, bold: bool) -> Self {
        Self { font_size, bold }
    }

    /// Inline CSS declarations for this style.
    pub fn css(&self) -> String {
        let weight = if self.bold { "bold" } else { "normal" };
        format!("font-size: {}; font-weight: {};", self.font_size.rem(), weight)
    }
}

/// A single block of the document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: BlockId,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    /// Rendered rich markup, as read back from the surface.
    pub content: String,
}

impl Block {
    pub fn new(id: BlockId, block_type: BlockType, content: impl Into<String>) -> Self {
        Self {
            id,
            block_type,
            content: content.into(),
        }
    }

    /// Copy of this block with a different type and identical content.
    pub fn with_type(&self, block_type: BlockType) -> Self {
        Self {
            block_type,
            ..self.clone()
        }
    }

    /// Copy of this block with new content and the same id and type.
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..self.clone()
        }
    }
}

/// Per-block data the presentation layer renders from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockView {
    pub id: BlockId,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    pub content: String,
    pub is_focused: bool,
}

/// Whole-document data the presentation layer renders from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView {
    pub blocks: Vec<BlockView>,
    pub focused_index: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_id_format() {
        assert_eq!(BlockId::from_seq(0).as_str(), "b-0");
        assert_eq!(BlockId::from_seq(42).to_string(), "b-42");
    }

    #[test]
    fn test_block_type_names() {
        for ty in BlockType::ALL {
            assert_eq!(BlockType::from_name(ty.name()), Some(ty));
        }
        assert_eq!(BlockType::from_name("h1"), None);
    }

    #[test]
    fn test_block_type_serde_name() {
        let json = serde_json::to_string(&BlockType::Heading3).unwrap();
        assert_eq!(json, "\"heading3\"");
    }

    #[test]
    fn test_toolbar_order() {
        let labels: Vec<_> = BlockType::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["H1", "H2", "H3", "H4", "H5", "H6", "P"]);
    }

    #[test]
    fn test_block_style_css() {
        let heading = BlockType::Heading1.style().css();
        insta::assert_snapshot!(heading, @"font-size: 1.5rem; font-weight: bold;");
        let paragraph = BlockType::Paragraph.style().css();
        insta::assert_snapshot!(paragraph, @"font-size: 1rem; font-weight: normal;");
    }

    #[test]
    fn test_with_type_preserves_content() {
        let block = Block::new(BlockId::from_seq(1), BlockType::Paragraph, "a <b>b</b>");
        let heading = block.with_type(BlockType::Heading2);
        assert_eq!(heading.id, block.id);
        assert_eq!(heading.content, block.content);
        assert_eq!(heading.block_type, BlockType::Heading2);
    }
}
