//! Editor configuration.
//!
//! Deserialized from whatever the host hands over (a plain JS object in the
//! browser build). Every field has a default, so an empty object is valid.

use serde::{Deserialize, Serialize};

use crate::types::BlockType;

/// Placeholder hint shown in empty blocks.
pub const DEFAULT_PLACEHOLDER: &str = "Type something...";

/// Initial content for one block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSeed {
    #[serde(rename = "type", default)]
    pub block_type: BlockType,
    #[serde(default)]
    pub content: String,
}

impl BlockSeed {
    pub fn new(block_type: BlockType, content: impl Into<String>) -> Self {
        Self {
            block_type,
            content: content.into(),
        }
    }
}

/// Which keyboard conventions to use for shortcut labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformHint {
    /// Detect from the host environment.
    #[default]
    Auto,
    Mac,
    Other,
}

impl PlatformHint {
    /// Resolve to a Mac flag, using `detected` when set to `Auto`.
    pub fn is_mac(self, detected: bool) -> bool {
        match self {
            Self::Auto => detected,
            Self::Mac => true,
            Self::Other => false,
        }
    }
}

/// Top-level editor configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// Hint text for empty blocks.
    pub placeholder: String,
    /// Blocks to start with. Empty means one empty paragraph.
    pub initial_blocks: Vec<BlockSeed>,
    /// Maximum tracing level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    pub platform: PlatformHint,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            initial_blocks: Vec::new(),
            log_level: "info".to_string(),
            platform: PlatformHint::Auto,
        }
    }
}

impl EditorConfig {
    /// Parsed log level, falling back to `INFO` for unknown values.
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level
            .parse::<tracing::Level>()
            .unwrap_or(tracing::Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_object() {
        let config: EditorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.placeholder, "Type something...");
    }

    #[test]
    fn test_initial_blocks() {
        let config: EditorConfig = serde_json::from_str(
            r#"{"initialBlocks": [{"type": "heading2", "content": "Hi"}, {"content": "x"}]}"#,
        )
        .unwrap();
        assert_eq!(
            config.initial_blocks,
            vec![
                BlockSeed::new(BlockType::Heading2, "Hi"),
                BlockSeed::new(BlockType::Paragraph, "x"),
            ]
        );
    }

    #[test]
    fn test_log_level() {
        let mut config = EditorConfig::default();
        assert_eq!(config.tracing_level(), tracing::Level::INFO);
        config.log_level = "debug".into();
        assert_eq!(config.tracing_level(), tracing::Level::DEBUG);
        config.log_level = "chatty".into();
        assert_eq!(config.tracing_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_platform_hint() {
        assert!(PlatformHint::Auto.is_mac(true));
        assert!(!PlatformHint::Auto.is_mac(false));
        assert!(PlatformHint::Mac.is_mac(false));
        assert!(!PlatformHint::Other.is_mac(true));
    }
}
