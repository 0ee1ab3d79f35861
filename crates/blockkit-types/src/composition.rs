//! Composition objects shared by blocks and elements.
//!
//! Text objects, options, option groups, confirmation dialogs, conversation
//! filters and dispatch configuration. Field names follow Slack's wire names.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

// ---------------------------------------------------------------------------
// Text objects
// ---------------------------------------------------------------------------

/// A `plain_text` text object.
///
/// Text objects always carry their `type` on the wire, whether they sit in a
/// `Text` slot or in a field that only accepts plain text, so `Serialize` is
/// written by hand. Deserialization ignores the `type` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlainText {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<bool>,
}

impl PlainText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emoji: None,
        }
    }
}

impl From<&str> for PlainText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for PlainText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// A `mrkdwn` text object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Markdown {
    pub text: String,
    /// When true, URLs and mentions are not auto-converted by the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbatim: Option<bool>,
}

impl Markdown {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            verbatim: None,
        }
    }
}

/// Either kind of text object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum Text {
    #[serde(rename = "plain_text")]
    PlainText(PlainText),
    #[serde(rename = "mrkdwn")]
    Markdown(Markdown),
}

impl Text {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText(PlainText::new(text))
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self::Markdown(Markdown::new(text))
    }

    /// The raw text content regardless of formatting kind.
    pub fn text(&self) -> &str {
        match self {
            Text::PlainText(t) => &t.text,
            Text::Markdown(t) => &t.text,
        }
    }
}

impl Serialize for PlainText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PlainText", 3)?;
        state.serialize_field("type", "plain_text")?;
        state.serialize_field("text", &self.text)?;
        match self.emoji {
            Some(emoji) => state.serialize_field("emoji", &emoji)?,
            None => state.skip_field("emoji")?,
        }
        state.end()
    }
}

impl Serialize for Markdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Markdown", 3)?;
        state.serialize_field("type", "mrkdwn")?;
        state.serialize_field("text", &self.text)?;
        match self.verbatim {
            Some(verbatim) => state.serialize_field("verbatim", &verbatim)?,
            None => state.skip_field("verbatim")?,
        }
        state.end()
    }
}

impl Serialize for Text {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Text::PlainText(text) => text.serialize(serializer),
            Text::Markdown(text) => text.serialize(serializer),
        }
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::PlainText(PlainText::default())
    }
}

impl From<PlainText> for Text {
    fn from(text: PlainText) -> Self {
        Self::PlainText(text)
    }
}

impl From<Markdown> for Text {
    fn from(text: Markdown) -> Self {
        Self::Markdown(text)
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// A single selectable option (label + value + optional description).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub text: Text,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<PlainText>,
    /// Only honoured by overflow menus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl SelectOption {
    pub fn new(text: impl Into<Text>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
            description: None,
            url: None,
        }
    }
}

/// A labelled collection of options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup {
    pub label: PlainText,
    pub options: Vec<SelectOption>,
}

// ---------------------------------------------------------------------------
// Confirmation dialog
// ---------------------------------------------------------------------------

/// Visual style of buttons and confirmation dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Primary,
    Danger,
}

/// Dialog shown before an element's action is dispatched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationDialog {
    pub title: PlainText,
    pub text: Text,
    pub confirm: PlainText,
    pub deny: PlainText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ButtonStyle>,
}

// ---------------------------------------------------------------------------
// Conversation filter
// ---------------------------------------------------------------------------

/// Conversation kinds a conversations select may list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationType {
    Im,
    Mpim,
    Private,
    Public,
}

/// Filter applied to the conversations offered by a conversations select.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationFilter {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<ConversationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_external_shared_channels: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_bot_users: Option<bool>,
}

// ---------------------------------------------------------------------------
// Dispatch configuration
// ---------------------------------------------------------------------------

/// Interaction that makes a text input dispatch a `block_actions` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchTrigger {
    OnEnterPressed,
    OnCharacterEntered,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchActionConfig {
    pub trigger_actions_on: Vec<DispatchTrigger>,
}

/// Reference to a file hosted by Slack, by URL or by file id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}
