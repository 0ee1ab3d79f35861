//! Top-level layout blocks.
//!
//! `Block` is the unit a message or view is made of. Every variant carries an
//! optional `block_id` used to locate the block when editing a rendered layout.

use serde::{Deserialize, Serialize};

use crate::composition::{PlainText, SlackFile, Text};
use crate::element::{Accessory, ActionElement, ContextElement, InputElement};
use crate::rich_text::RichTextElement;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionsBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    pub elements: Vec<ActionElement>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    pub call_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    pub elements: Vec<ContextElement>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DividerBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

/// A remote file added through the remote files API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    pub external_id: String,
    /// Always `remote`.
    #[serde(default = "default_file_source")]
    pub source: String,
}

fn default_file_source() -> String {
    "remote".to_string()
}

impl Default for FileBlock {
    fn default() -> Self {
        Self {
            block_id: None,
            external_id: String::new(),
            source: default_file_source(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    pub text: PlainText,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack_file: Option<SlackFile>,
    pub alt_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<PlainText>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    pub label: PlainText,
    pub element: InputElement,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispatch_action: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<PlainText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    pub elements: Vec<RichTextElement>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Text>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessory: Option<Accessory>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    pub alt_text: String,
    pub title: PlainText,
    pub video_url: String,
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<PlainText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_icon_url: Option<String>,
}

/// A top-level layout block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Actions(ActionsBlock),
    Call(CallBlock),
    Context(ContextBlock),
    Divider(DividerBlock),
    File(FileBlock),
    Header(HeaderBlock),
    Image(ImageBlock),
    Input(InputBlock),
    RichText(RichTextBlock),
    Section(SectionBlock),
    Video(VideoBlock),
}

macro_rules! block_dispatch {
    ($self:ident, $b:ident => $body:expr) => {
        match $self {
            Block::Actions($b) => $body,
            Block::Call($b) => $body,
            Block::Context($b) => $body,
            Block::Divider($b) => $body,
            Block::File($b) => $body,
            Block::Header($b) => $body,
            Block::Image($b) => $body,
            Block::Input($b) => $body,
            Block::RichText($b) => $body,
            Block::Section($b) => $body,
            Block::Video($b) => $body,
        }
    };
}

impl Block {
    pub fn block_id(&self) -> Option<&str> {
        block_dispatch!(self, b => b.block_id.as_deref())
    }

    pub fn set_block_id(&mut self, block_id: Option<String>) {
        block_dispatch!(self, b => b.block_id = block_id)
    }

    /// The wire discriminant of this block (`"section"`, `"rich_text"`, ...).
    pub fn type_name(&self) -> &'static str {
        match self {
            Block::Actions(_) => "actions",
            Block::Call(_) => "call",
            Block::Context(_) => "context",
            Block::Divider(_) => "divider",
            Block::File(_) => "file",
            Block::Header(_) => "header",
            Block::Image(_) => "image",
            Block::Input(_) => "input",
            Block::RichText(_) => "rich_text",
            Block::Section(_) => "section",
            Block::Video(_) => "video",
        }
    }
}

impl Default for Block {
    fn default() -> Self {
        Block::Divider(DividerBlock::default())
    }
}

/// A block type that can be constructed empty and recovered from a `Block`.
///
/// Implemented by every block record and by `Block` itself, so typed and
/// untyped edits share one code path.
pub trait BlockKind: Default + Into<Block> {
    fn from_block(block: &Block) -> Option<&Self>;
    fn from_block_mut(block: &mut Block) -> Option<&mut Self>;
}

impl BlockKind for Block {
    fn from_block(block: &Block) -> Option<&Self> {
        Some(block)
    }

    fn from_block_mut(block: &mut Block) -> Option<&mut Self> {
        Some(block)
    }
}

macro_rules! impl_block_kind {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Block {
                fn from(block: $ty) -> Self {
                    Block::$variant(block)
                }
            }

            impl BlockKind for $ty {
                fn from_block(block: &Block) -> Option<&Self> {
                    match block {
                        Block::$variant(b) => Some(b),
                        _ => None,
                    }
                }

                fn from_block_mut(block: &mut Block) -> Option<&mut Self> {
                    match block {
                        Block::$variant(b) => Some(b),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_block_kind!(
    Actions(ActionsBlock),
    Call(CallBlock),
    Context(ContextBlock),
    Divider(DividerBlock),
    File(FileBlock),
    Header(HeaderBlock),
    Image(ImageBlock),
    Input(InputBlock),
    RichText(RichTextBlock),
    Section(SectionBlock),
    Video(VideoBlock),
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_id_accessors() {
        let mut block = Block::from(DividerBlock::default());
        assert_eq!(block.block_id(), None);

        block.set_block_id(Some("div-1".to_string()));
        assert_eq!(block.block_id(), Some("div-1"));

        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json, serde_json::json!({"type": "divider", "block_id": "div-1"}));
    }

    #[test]
    fn test_rich_text_discriminant() {
        let block = Block::from(RichTextBlock::default());
        assert_eq!(block.type_name(), "rich_text");
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "rich_text");
    }

    #[test]
    fn test_file_block_defaults_to_remote_source() {
        let block: Block =
            serde_json::from_str(r#"{"type":"file","external_id":"ABCD1"}"#).unwrap();
        match block {
            Block::File(file) => {
                assert_eq!(file.source, "remote");
                assert_eq!(file.external_id, "ABCD1");
            }
            other => panic!("unexpected block: {other:?}"),
        }
        assert_eq!(FileBlock::default().source, "remote");
    }

    #[test]
    fn test_block_kind_downcast() {
        let mut block = Block::from(HeaderBlock {
            block_id: None,
            text: PlainText::new("Title"),
        });
        assert!(SectionBlock::from_block(&block).is_none());

        let header = HeaderBlock::from_block_mut(&mut block).unwrap();
        header.text = PlainText::new("Renamed");

        match &block {
            Block::Header(h) => assert_eq!(h.text.text, "Renamed"),
            other => panic!("unexpected block: {other:?}"),
        }
        assert!(Block::from_block(&block).is_some());
    }

    #[test]
    fn test_section_omits_empty_fields() {
        let block = Block::from(SectionBlock {
            text: Some(Text::markdown("*hello*")),
            ..Default::default()
        });
        let json = serde_json::to_value(&block).unwrap();
        assert!(json.get("fields").is_none());
        assert_eq!(json["text"]["type"], "mrkdwn");
    }
}
