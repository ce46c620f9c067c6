//! Types exposed to JavaScript via wasm-bindgen.

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

use blockpad_core::{
    BlockSeed, BlockType, BlockView, DEFAULT_PLACEHOLDER, DocumentView, EditorConfig, PlatformHint,
};

#[wasm_bindgen(typescript_custom_section)]
const BLOCK_TYPE_NAME: &'static str = r#"
export type BlockTypeName =
    | "heading1" | "heading2" | "heading3" | "heading4" | "heading5" | "heading6"
    | "paragraph";
"#;

/// Initial content for one block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase", default)]
pub struct JsBlockSeed {
    #[serde(rename = "type")]
    #[tsify(optional, type = "BlockTypeName")]
    pub block_type: Option<String>,
    #[tsify(optional)]
    pub content: Option<String>,
}

/// Editor options. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase", default)]
pub struct JsEditorConfig {
    /// Hint text for empty blocks.
    #[tsify(optional)]
    pub placeholder: Option<String>,
    #[tsify(optional)]
    pub initial_blocks: Option<Vec<JsBlockSeed>>,
    #[tsify(optional, type = "\"error\" | \"warn\" | \"info\" | \"debug\" | \"trace\"")]
    pub log_level: Option<String>,
    /// Shortcut label convention.
    #[tsify(optional, type = "\"auto\" | \"mac\" | \"other\"")]
    pub platform: Option<String>,
}

/// Parse a block type name as used on the JS side.
pub fn parse_block_type(name: &str) -> Result<BlockType, String> {
    BlockType::from_name(name).ok_or_else(|| format!("Unknown block type: {}", name))
}

impl TryFrom<JsEditorConfig> for EditorConfig {
    type Error = String;

    fn try_from(js: JsEditorConfig) -> Result<Self, Self::Error> {
        let defaults = EditorConfig::default();

        let initial_blocks = js
            .initial_blocks
            .unwrap_or_default()
            .into_iter()
            .map(|seed| {
                let block_type = match seed.block_type.as_deref() {
                    Some(name) => parse_block_type(name)?,
                    None => BlockType::default(),
                };
                Ok(BlockSeed::new(block_type, seed.content.unwrap_or_default()))
            })
            .collect::<Result<Vec<_>, String>>()?;

        let platform = match js.platform.as_deref() {
            None | Some("auto") => PlatformHint::Auto,
            Some("mac") => PlatformHint::Mac,
            Some("other") => PlatformHint::Other,
            Some(other) => return Err(format!("Unknown platform: {}", other)),
        };

        Ok(EditorConfig {
            placeholder: js
                .placeholder
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
            initial_blocks,
            log_level: js.log_level.unwrap_or(defaults.log_level),
            platform,
        })
    }
}

/// One block as seen from JavaScript.
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsBlock {
    pub id: String,
    #[serde(rename = "type")]
    #[tsify(type = "BlockTypeName")]
    pub block_type: String,
    /// Markup as produced by the surface.
    pub content: String,
    pub is_focused: bool,
}

impl From<&BlockView> for JsBlock {
    fn from(view: &BlockView) -> Self {
        Self {
            id: view.id.to_string(),
            block_type: view.block_type.name().to_string(),
            content: view.content.clone(),
            is_focused: view.is_focused,
        }
    }
}

/// Document snapshot returned by `getDocument`.
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsDocument {
    pub blocks: Vec<JsBlock>,
    pub focused_index: Option<usize>,
}

impl From<&DocumentView> for JsDocument {
    fn from(view: &DocumentView) -> Self {
        Self {
            blocks: view.blocks.iter().map(JsBlock::from).collect(),
            focused_index: view.focused_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = EditorConfig::try_from(JsEditorConfig::default()).unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_config_conversion() {
        let js = JsEditorConfig {
            placeholder: Some("Write here".into()),
            initial_blocks: Some(vec![
                JsBlockSeed {
                    block_type: Some("heading3".into()),
                    content: Some("Intro".into()),
                },
                JsBlockSeed::default(),
            ]),
            log_level: Some("debug".into()),
            platform: Some("mac".into()),
        };
        let config = EditorConfig::try_from(js).unwrap();
        assert_eq!(config.placeholder, "Write here");
        assert_eq!(
            config.initial_blocks,
            vec![
                BlockSeed::new(BlockType::Heading3, "Intro"),
                BlockSeed::new(BlockType::Paragraph, ""),
            ]
        );
        assert_eq!(config.tracing_level(), tracing::Level::DEBUG);
        assert_eq!(config.platform, PlatformHint::Mac);
    }

    #[test]
    fn test_config_rejects_unknown_names() {
        let js = JsEditorConfig {
            initial_blocks: Some(vec![JsBlockSeed {
                block_type: Some("heading7".into()),
                content: None,
            }]),
            ..JsEditorConfig::default()
        };
        assert_eq!(
            EditorConfig::try_from(js),
            Err("Unknown block type: heading7".to_string())
        );

        let js = JsEditorConfig {
            platform: Some("windows".into()),
            ..JsEditorConfig::default()
        };
        assert!(EditorConfig::try_from(js).is_err());
    }
}
