//! Rich text sub-elements.
//!
//! A rich text block owns a list of `RichTextElement`s; sections, preformatted
//! text and quotes own inline leaves, lists own sections.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strike: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BroadcastRange {
    Here,
    Channel,
    Everyone,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    #[default]
    Bullet,
    Ordered,
}

/// Inline leaf of a rich text section, preformatted block or quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextInline {
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<RichTextStyle>,
    },
    Link {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<RichTextStyle>,
    },
    Emoji {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unicode: Option<String>,
    },
    User {
        user_id: String,
    },
    Channel {
        channel_id: String,
    },
    #[serde(rename = "usergroup")]
    UserGroup {
        usergroup_id: String,
    },
    Broadcast {
        range: BroadcastRange,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextSection {
    pub elements: Vec<RichTextInline>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextList {
    pub style: ListStyle,
    pub elements: Vec<RichTextSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextPreformatted {
    pub elements: Vec<RichTextInline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextQuote {
    pub elements: Vec<RichTextInline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextElement {
    RichTextSection(RichTextSection),
    RichTextList(RichTextList),
    RichTextPreformatted(RichTextPreformatted),
    RichTextQuote(RichTextQuote),
}
