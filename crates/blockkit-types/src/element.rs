//! Interactive and display elements.
//!
//! Each element kind is a plain record. The closed sum types
//! (`ActionElement`, `InputElement`, `Accessory`, `ContextElement`) encode
//! where an element may be placed; the `type` discriminant is carried by the
//! enum tag so the records themselves stay free of it.

use serde::{Deserialize, Serialize};

use crate::capability::{ElementKind, FocusOnLoad};
use crate::composition::{
    ButtonStyle, ConfirmationDialog, ConversationFilter, DispatchActionConfig, Markdown,
    OptionGroup, PlainText, SelectOption, SlackFile,
};

// ---------------------------------------------------------------------------
// Buttons and menus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    pub text: PlainText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ButtonStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility_label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overflow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkboxes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub initial_options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioButtons {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_option: Option<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

// ---------------------------------------------------------------------------
// Pickers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePicker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlainText>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatetimePicker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    /// Unix timestamp in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_date_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePicker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    /// `HH:mm`, 24-hour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlainText>,
    /// IANA timezone name, e.g. `America/Los_Angeles`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

// ---------------------------------------------------------------------------
// Select menus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticSelect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlainText>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub option_groups: Vec<OptionGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_option: Option<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiStaticSelect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlainText>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub option_groups: Vec<OptionGroup>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub initial_options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_selected_items: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalSelect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlainText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_option: Option<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_query_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiExternalSelect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlainText>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub initial_options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_query_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_selected_items: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersSelect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlainText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiUsersSelect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlainText>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub initial_users: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_selected_items: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationsSelect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlainText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_conversation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_to_current_conversation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_url_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<ConversationFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiConversationsSelect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlainText>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub initial_conversations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_to_current_conversation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_selected_items: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<ConversationFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelsSelect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlainText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_channel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_url_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiChannelsSelect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlainText>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub initial_channels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_selected_items: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

// ---------------------------------------------------------------------------
// Text-style inputs (input blocks only)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainTextInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlainText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispatch_action_config: Option<DispatchActionConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispatch_action_config: Option<DispatchActionConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlainText>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispatch_action_config: Option<DispatchActionConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlainText>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(default)]
    pub is_decimal_allowed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispatch_action_config: Option<DispatchActionConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlainText>,
}

// ---------------------------------------------------------------------------
// Display elements
// ---------------------------------------------------------------------------

/// Image element, used in context blocks and as a section accessory.
///
/// Exactly one of `image_url` and `slack_file` is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack_file: Option<SlackFile>,
    pub alt_text: String,
}

// ---------------------------------------------------------------------------
// Placement sum types
// ---------------------------------------------------------------------------

/// Elements allowed inside an actions block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionElement {
    Button(Button),
    Checkboxes(Checkboxes),
    #[serde(rename = "datepicker")]
    DatePicker(DatePicker),
    #[serde(rename = "datetimepicker")]
    DatetimePicker(DatetimePicker),
    #[serde(rename = "timepicker")]
    TimePicker(TimePicker),
    StaticSelect(StaticSelect),
    MultiStaticSelect(MultiStaticSelect),
    ExternalSelect(ExternalSelect),
    MultiExternalSelect(MultiExternalSelect),
    UsersSelect(UsersSelect),
    MultiUsersSelect(MultiUsersSelect),
    ConversationsSelect(ConversationsSelect),
    MultiConversationsSelect(MultiConversationsSelect),
    ChannelsSelect(ChannelsSelect),
    MultiChannelsSelect(MultiChannelsSelect),
    Overflow(Overflow),
    RadioButtons(RadioButtons),
}

impl ActionElement {
    pub fn action_id(&self) -> Option<&str> {
        match self {
            ActionElement::Button(e) => e.action_id(),
            ActionElement::Checkboxes(e) => e.action_id(),
            ActionElement::DatePicker(e) => e.action_id(),
            ActionElement::DatetimePicker(e) => e.action_id(),
            ActionElement::TimePicker(e) => e.action_id(),
            ActionElement::StaticSelect(e) => e.action_id(),
            ActionElement::MultiStaticSelect(e) => e.action_id(),
            ActionElement::ExternalSelect(e) => e.action_id(),
            ActionElement::MultiExternalSelect(e) => e.action_id(),
            ActionElement::UsersSelect(e) => e.action_id(),
            ActionElement::MultiUsersSelect(e) => e.action_id(),
            ActionElement::ConversationsSelect(e) => e.action_id(),
            ActionElement::MultiConversationsSelect(e) => e.action_id(),
            ActionElement::ChannelsSelect(e) => e.action_id(),
            ActionElement::MultiChannelsSelect(e) => e.action_id(),
            ActionElement::Overflow(e) => e.action_id(),
            ActionElement::RadioButtons(e) => e.action_id(),
        }
    }

    /// Whether this element asks for focus when the view opens.
    ///
    /// Buttons and overflow menus cannot take focus and always report `false`.
    pub fn focus_on_load(&self) -> bool {
        match self {
            ActionElement::Button(_) | ActionElement::Overflow(_) => false,
            ActionElement::Checkboxes(e) => e.focus_on_load(),
            ActionElement::DatePicker(e) => e.focus_on_load(),
            ActionElement::DatetimePicker(e) => e.focus_on_load(),
            ActionElement::TimePicker(e) => e.focus_on_load(),
            ActionElement::StaticSelect(e) => e.focus_on_load(),
            ActionElement::MultiStaticSelect(e) => e.focus_on_load(),
            ActionElement::ExternalSelect(e) => e.focus_on_load(),
            ActionElement::MultiExternalSelect(e) => e.focus_on_load(),
            ActionElement::UsersSelect(e) => e.focus_on_load(),
            ActionElement::MultiUsersSelect(e) => e.focus_on_load(),
            ActionElement::ConversationsSelect(e) => e.focus_on_load(),
            ActionElement::MultiConversationsSelect(e) => e.focus_on_load(),
            ActionElement::ChannelsSelect(e) => e.focus_on_load(),
            ActionElement::MultiChannelsSelect(e) => e.focus_on_load(),
            ActionElement::RadioButtons(e) => e.focus_on_load(),
        }
    }
}

/// Elements allowed as the single element of an input block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputElement {
    Checkboxes(Checkboxes),
    #[serde(rename = "datepicker")]
    DatePicker(DatePicker),
    #[serde(rename = "datetimepicker")]
    DatetimePicker(DatetimePicker),
    #[serde(rename = "timepicker")]
    TimePicker(TimePicker),
    StaticSelect(StaticSelect),
    MultiStaticSelect(MultiStaticSelect),
    ExternalSelect(ExternalSelect),
    MultiExternalSelect(MultiExternalSelect),
    UsersSelect(UsersSelect),
    MultiUsersSelect(MultiUsersSelect),
    ConversationsSelect(ConversationsSelect),
    MultiConversationsSelect(MultiConversationsSelect),
    ChannelsSelect(ChannelsSelect),
    MultiChannelsSelect(MultiChannelsSelect),
    RadioButtons(RadioButtons),
    PlainTextInput(PlainTextInput),
    #[serde(rename = "email_text_input")]
    EmailInput(EmailInput),
    #[serde(rename = "url_text_input")]
    UrlInput(UrlInput),
    NumberInput(NumberInput),
}

macro_rules! input_element_dispatch {
    ($self:ident, $e:ident => $body:expr) => {
        match $self {
            InputElement::Checkboxes($e) => $body,
            InputElement::DatePicker($e) => $body,
            InputElement::DatetimePicker($e) => $body,
            InputElement::TimePicker($e) => $body,
            InputElement::StaticSelect($e) => $body,
            InputElement::MultiStaticSelect($e) => $body,
            InputElement::ExternalSelect($e) => $body,
            InputElement::MultiExternalSelect($e) => $body,
            InputElement::UsersSelect($e) => $body,
            InputElement::MultiUsersSelect($e) => $body,
            InputElement::ConversationsSelect($e) => $body,
            InputElement::MultiConversationsSelect($e) => $body,
            InputElement::ChannelsSelect($e) => $body,
            InputElement::MultiChannelsSelect($e) => $body,
            InputElement::RadioButtons($e) => $body,
            InputElement::PlainTextInput($e) => $body,
            InputElement::EmailInput($e) => $body,
            InputElement::UrlInput($e) => $body,
            InputElement::NumberInput($e) => $body,
        }
    };
}

impl InputElement {
    pub fn action_id(&self) -> Option<&str> {
        input_element_dispatch!(self, e => e.action_id())
    }

    pub fn focus_on_load(&self) -> bool {
        input_element_dispatch!(self, e => e.focus_on_load())
    }
}

impl Default for InputElement {
    fn default() -> Self {
        InputElement::PlainTextInput(PlainTextInput::default())
    }
}

/// Elements allowed as a section block's accessory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Accessory {
    Button(Button),
    Checkboxes(Checkboxes),
    #[serde(rename = "datepicker")]
    DatePicker(DatePicker),
    #[serde(rename = "timepicker")]
    TimePicker(TimePicker),
    Image(ImageElement),
    StaticSelect(StaticSelect),
    MultiStaticSelect(MultiStaticSelect),
    ExternalSelect(ExternalSelect),
    MultiExternalSelect(MultiExternalSelect),
    UsersSelect(UsersSelect),
    MultiUsersSelect(MultiUsersSelect),
    ConversationsSelect(ConversationsSelect),
    MultiConversationsSelect(MultiConversationsSelect),
    ChannelsSelect(ChannelsSelect),
    MultiChannelsSelect(MultiChannelsSelect),
    Overflow(Overflow),
    RadioButtons(RadioButtons),
}

/// Items allowed inside a context block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum ContextElement {
    #[serde(rename = "plain_text")]
    PlainText(PlainText),
    #[serde(rename = "mrkdwn")]
    Markdown(Markdown),
    #[serde(rename = "image")]
    Image(ImageElement),
}

/// Text objects write their own `type`; only the image needs tagging here.
impl Serialize for ContextElement {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(tag = "type", rename_all = "snake_case")]
        enum Tagged<'a> {
            Image(&'a ImageElement),
        }

        match self {
            ContextElement::PlainText(text) => text.serialize(serializer),
            ContextElement::Markdown(text) => text.serialize(serializer),
            ContextElement::Image(image) => Tagged::Image(image).serialize(serializer),
        }
    }
}

macro_rules! impl_from_element {
    ($target:ident: $($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for $target {
                fn from(element: $ty) -> Self {
                    $target::$variant(element)
                }
            }
        )*
    };
}

impl_from_element!(ActionElement:
    Button(Button),
    Checkboxes(Checkboxes),
    DatePicker(DatePicker),
    DatetimePicker(DatetimePicker),
    TimePicker(TimePicker),
    StaticSelect(StaticSelect),
    MultiStaticSelect(MultiStaticSelect),
    ExternalSelect(ExternalSelect),
    MultiExternalSelect(MultiExternalSelect),
    UsersSelect(UsersSelect),
    MultiUsersSelect(MultiUsersSelect),
    ConversationsSelect(ConversationsSelect),
    MultiConversationsSelect(MultiConversationsSelect),
    ChannelsSelect(ChannelsSelect),
    MultiChannelsSelect(MultiChannelsSelect),
    Overflow(Overflow),
    RadioButtons(RadioButtons),
);

impl_from_element!(InputElement:
    Checkboxes(Checkboxes),
    DatePicker(DatePicker),
    DatetimePicker(DatetimePicker),
    TimePicker(TimePicker),
    StaticSelect(StaticSelect),
    MultiStaticSelect(MultiStaticSelect),
    ExternalSelect(ExternalSelect),
    MultiExternalSelect(MultiExternalSelect),
    UsersSelect(UsersSelect),
    MultiUsersSelect(MultiUsersSelect),
    ConversationsSelect(ConversationsSelect),
    MultiConversationsSelect(MultiConversationsSelect),
    ChannelsSelect(ChannelsSelect),
    MultiChannelsSelect(MultiChannelsSelect),
    RadioButtons(RadioButtons),
    PlainTextInput(PlainTextInput),
    EmailInput(EmailInput),
    UrlInput(UrlInput),
    NumberInput(NumberInput),
);

impl_from_element!(Accessory:
    Button(Button),
    Checkboxes(Checkboxes),
    DatePicker(DatePicker),
    TimePicker(TimePicker),
    Image(ImageElement),
    StaticSelect(StaticSelect),
    MultiStaticSelect(MultiStaticSelect),
    ExternalSelect(ExternalSelect),
    MultiExternalSelect(MultiExternalSelect),
    UsersSelect(UsersSelect),
    MultiUsersSelect(MultiUsersSelect),
    ConversationsSelect(ConversationsSelect),
    MultiConversationsSelect(MultiConversationsSelect),
    ChannelsSelect(ChannelsSelect),
    MultiChannelsSelect(MultiChannelsSelect),
    Overflow(Overflow),
    RadioButtons(RadioButtons),
);

impl_from_element!(ContextElement:
    PlainText(PlainText),
    Markdown(Markdown),
    Image(ImageElement),
);
