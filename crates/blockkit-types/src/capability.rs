//! Capability traits over element records.
//!
//! Builders never touch concrete fields directly; they go through these
//! traits so one generic setter serves every element kind that carries the
//! field. `ActionsElementKind` and `InputElementKind` mark where an element
//! may be placed.

use crate::composition::{
    ConfirmationDialog, ConversationFilter, DispatchActionConfig, OptionGroup, PlainText,
    SelectOption,
};
use crate::element::{
    ActionElement, Button, ChannelsSelect, Checkboxes, ConversationsSelect, DatePicker,
    DatetimePicker, EmailInput, ExternalSelect, InputElement, MultiChannelsSelect,
    MultiConversationsSelect, MultiExternalSelect, MultiStaticSelect, MultiUsersSelect,
    NumberInput, Overflow, PlainTextInput, RadioButtons, StaticSelect, TimePicker, UrlInput,
    UsersSelect,
};

/// An interactive element: zero-arg constructible and identified by an action id.
pub trait ElementKind: Default + Clone {
    fn action_id(&self) -> Option<&str>;
    fn set_action_id(&mut self, action_id: String);
}

/// Elements that carry a `focus_on_load` flag.
pub trait FocusOnLoad {
    fn focus_on_load(&self) -> bool;
    fn set_focus_on_load(&mut self, focus: bool);
}

/// Elements that may be placed in an actions block.
pub trait ActionsElementKind: ElementKind + Into<ActionElement> {}

impl<T: ElementKind + Into<ActionElement>> ActionsElementKind for T {}

/// Elements that may additionally be the sole element of an input block.
pub trait InputElementKind: ElementKind + FocusOnLoad + Into<InputElement> {}

impl<T: ElementKind + FocusOnLoad + Into<InputElement>> InputElementKind for T {}

pub trait Confirmable {
    fn confirm(&self) -> Option<&ConfirmationDialog>;
    fn set_confirm(&mut self, dialog: ConfirmationDialog);
}

pub trait HasPlaceholder {
    fn set_placeholder(&mut self, placeholder: PlainText);
}

/// Elements holding a flat option list, optionally complemented by groups.
pub trait HasOptions {
    fn options(&self) -> &[SelectOption];
    fn options_mut(&mut self) -> &mut Vec<SelectOption>;

    fn option_groups(&self) -> &[OptionGroup] {
        &[]
    }

    /// Every option in declaration order: flat options first, then grouped ones.
    fn all_options(&self) -> Vec<&SelectOption> {
        self.options()
            .iter()
            .chain(self.option_groups().iter().flat_map(|g| g.options.iter()))
            .collect()
    }
}

pub trait HasOptionGroups: HasOptions {
    fn option_groups_mut(&mut self) -> &mut Vec<OptionGroup>;
}

pub trait SingleOptionSelect {
    fn initial_option(&self) -> Option<&SelectOption>;
    fn set_initial_option(&mut self, option: Option<SelectOption>);
}

pub trait MultiOptionSelect {
    fn initial_options(&self) -> &[SelectOption];
    fn set_initial_options(&mut self, options: Vec<SelectOption>);
}

pub trait HasMaxSelectedItems {
    fn set_max_selected_items(&mut self, max: u32);
}

pub trait HasConversationFilter {
    fn filter_mut(&mut self) -> &mut Option<ConversationFilter>;
}

/// Text-style inputs with a free-form initial value and dispatch config.
pub trait TextInputKind {
    fn set_initial_value(&mut self, value: String);
    fn set_dispatch_action_config(&mut self, config: DispatchActionConfig);
}

// ---------------------------------------------------------------------------
// Implementations
// ---------------------------------------------------------------------------

macro_rules! impl_element_kind {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ElementKind for $ty {
                fn action_id(&self) -> Option<&str> {
                    self.action_id.as_deref()
                }

                fn set_action_id(&mut self, action_id: String) {
                    self.action_id = Some(action_id);
                }
            }
        )*
    };
}

macro_rules! impl_focus_on_load {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FocusOnLoad for $ty {
                fn focus_on_load(&self) -> bool {
                    self.focus_on_load.unwrap_or(false)
                }

                fn set_focus_on_load(&mut self, focus: bool) {
                    self.focus_on_load = Some(focus);
                }
            }
        )*
    };
}

macro_rules! impl_confirmable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Confirmable for $ty {
                fn confirm(&self) -> Option<&ConfirmationDialog> {
                    self.confirm.as_ref()
                }

                fn set_confirm(&mut self, dialog: ConfirmationDialog) {
                    self.confirm = Some(dialog);
                }
            }
        )*
    };
}

macro_rules! impl_placeholder {
    ($($ty:ty),* $(,)?) => {
        $(
            impl HasPlaceholder for $ty {
                fn set_placeholder(&mut self, placeholder: PlainText) {
                    self.placeholder = Some(placeholder);
                }
            }
        )*
    };
}

macro_rules! impl_has_options {
    (grouped: $($ty:ty),* $(,)?) => {
        $(
            impl HasOptions for $ty {
                fn options(&self) -> &[SelectOption] {
                    &self.options
                }

                fn options_mut(&mut self) -> &mut Vec<SelectOption> {
                    &mut self.options
                }

                fn option_groups(&self) -> &[OptionGroup] {
                    &self.option_groups
                }
            }

            impl HasOptionGroups for $ty {
                fn option_groups_mut(&mut self) -> &mut Vec<OptionGroup> {
                    &mut self.option_groups
                }
            }
        )*
    };
    ($($ty:ty),* $(,)?) => {
        $(
            impl HasOptions for $ty {
                fn options(&self) -> &[SelectOption] {
                    &self.options
                }

                fn options_mut(&mut self) -> &mut Vec<SelectOption> {
                    &mut self.options
                }
            }
        )*
    };
}

macro_rules! impl_single_select {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SingleOptionSelect for $ty {
                fn initial_option(&self) -> Option<&SelectOption> {
                    self.initial_option.as_ref()
                }

                fn set_initial_option(&mut self, option: Option<SelectOption>) {
                    self.initial_option = option;
                }
            }
        )*
    };
}

macro_rules! impl_multi_select {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MultiOptionSelect for $ty {
                fn initial_options(&self) -> &[SelectOption] {
                    &self.initial_options
                }

                fn set_initial_options(&mut self, options: Vec<SelectOption>) {
                    self.initial_options = options;
                }
            }
        )*
    };
}

macro_rules! impl_max_selected {
    ($($ty:ty),* $(,)?) => {
        $(
            impl HasMaxSelectedItems for $ty {
                fn set_max_selected_items(&mut self, max: u32) {
                    self.max_selected_items = Some(max);
                }
            }
        )*
    };
}

macro_rules! impl_conversation_filter {
    ($($ty:ty),* $(,)?) => {
        $(
            impl HasConversationFilter for $ty {
                fn filter_mut(&mut self) -> &mut Option<ConversationFilter> {
                    &mut self.filter
                }
            }
        )*
    };
}

macro_rules! impl_text_input {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TextInputKind for $ty {
                fn set_initial_value(&mut self, value: String) {
                    self.initial_value = Some(value);
                }

                fn set_dispatch_action_config(&mut self, config: DispatchActionConfig) {
                    self.dispatch_action_config = Some(config);
                }
            }
        )*
    };
}

impl_element_kind!(
    Button,
    Overflow,
    Checkboxes,
    RadioButtons,
    DatePicker,
    DatetimePicker,
    TimePicker,
    StaticSelect,
    MultiStaticSelect,
    ExternalSelect,
    MultiExternalSelect,
    UsersSelect,
    MultiUsersSelect,
    ConversationsSelect,
    MultiConversationsSelect,
    ChannelsSelect,
    MultiChannelsSelect,
    PlainTextInput,
    EmailInput,
    UrlInput,
    NumberInput,
);

impl_focus_on_load!(
    Checkboxes,
    RadioButtons,
    DatePicker,
    DatetimePicker,
    TimePicker,
    StaticSelect,
    MultiStaticSelect,
    ExternalSelect,
    MultiExternalSelect,
    UsersSelect,
    MultiUsersSelect,
    ConversationsSelect,
    MultiConversationsSelect,
    ChannelsSelect,
    MultiChannelsSelect,
    PlainTextInput,
    EmailInput,
    UrlInput,
    NumberInput,
);

impl_confirmable!(
    Button,
    Overflow,
    Checkboxes,
    RadioButtons,
    DatePicker,
    DatetimePicker,
    TimePicker,
    StaticSelect,
    MultiStaticSelect,
    ExternalSelect,
    MultiExternalSelect,
    UsersSelect,
    MultiUsersSelect,
    ConversationsSelect,
    MultiConversationsSelect,
    ChannelsSelect,
    MultiChannelsSelect,
);

impl_placeholder!(
    DatePicker,
    TimePicker,
    StaticSelect,
    MultiStaticSelect,
    ExternalSelect,
    MultiExternalSelect,
    UsersSelect,
    MultiUsersSelect,
    ConversationsSelect,
    MultiConversationsSelect,
    ChannelsSelect,
    MultiChannelsSelect,
    PlainTextInput,
    EmailInput,
    UrlInput,
    NumberInput,
);

impl_has_options!(grouped: StaticSelect, MultiStaticSelect);
impl_has_options!(Overflow, Checkboxes, RadioButtons);

impl_single_select!(StaticSelect, ExternalSelect, RadioButtons);
impl_multi_select!(MultiStaticSelect, MultiExternalSelect, Checkboxes);

impl_max_selected!(
    MultiStaticSelect,
    MultiExternalSelect,
    MultiUsersSelect,
    MultiConversationsSelect,
    MultiChannelsSelect,
);

impl_conversation_filter!(ConversationsSelect, MultiConversationsSelect);

impl_text_input!(PlainTextInput, EmailInput, UrlInput, NumberInput);
