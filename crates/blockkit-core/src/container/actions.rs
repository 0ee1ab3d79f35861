//! Actions block builder.

use blockkit_types::block::ActionsBlock;
use blockkit_types::capability::ActionsElementKind;
use blockkit_types::composition::PlainText;
use blockkit_types::element::{
    ActionElement, Button, ChannelsSelect, Checkboxes, ConversationsSelect, DatePicker,
    DatetimePicker, ExternalSelect, MultiChannelsSelect, MultiConversationsSelect,
    MultiExternalSelect, MultiStaticSelect, MultiUsersSelect, Overflow, RadioButtons,
    StaticSelect, TimePicker, UsersSelect,
};
use blockkit_types::limits::ACTIONS_MAX_ELEMENTS;

use crate::element::ElementBuilder;
use crate::error::{check_block_id, check_limit, BlockKitError, StructuralLimit};

/// Collects the interactive elements of one actions block.
#[derive(Debug, Clone, Default)]
pub struct ActionsBlockBuilder {
    block_id: Option<String>,
    elements: Vec<ActionElement>,
}

impl ActionsBlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_id(&mut self, block_id: impl Into<String>) -> &mut Self {
        self.block_id = Some(block_id.into());
        self
    }

    /// Elements added so far, in call order.
    pub fn elements(&self) -> &[ActionElement] {
        &self.elements
    }

    /// Append a fresh `T` with the given action id, configured by `configure`.
    pub fn add_element<T: ActionsElementKind>(
        &mut self,
        action_id: impl Into<String>,
        configure: impl FnOnce(&mut ElementBuilder<T>),
    ) -> &mut Self {
        let action_id = action_id.into();
        self.add_existing(T::default(), |builder| {
            builder.action_id(action_id);
            configure(builder);
        })
    }

    /// Append an already constructed element, configured by `configure`.
    pub fn add_existing<T: ActionsElementKind>(
        &mut self,
        element: T,
        configure: impl FnOnce(&mut ElementBuilder<T>),
    ) -> &mut Self {
        let mut builder = ElementBuilder::new(element);
        configure(&mut builder);
        self.elements.push(builder.into_inner().into());
        self
    }

    pub fn add_button(
        &mut self,
        action_id: impl Into<String>,
        text: impl Into<PlainText>,
        configure: impl FnOnce(&mut ElementBuilder<Button>),
    ) -> &mut Self {
        let text = text.into();
        self.add_element(action_id, |button: &mut ElementBuilder<Button>| {
            button.text(text);
            configure(button);
        })
    }

    pub fn add_checkboxes(
        &mut self,
        action_id: impl Into<String>,
        configure: impl FnOnce(&mut ElementBuilder<Checkboxes>),
    ) -> &mut Self {
        self.add_element(action_id, configure)
    }

    pub fn add_radio_buttons(
        &mut self,
        action_id: impl Into<String>,
        configure: impl FnOnce(&mut ElementBuilder<RadioButtons>),
    ) -> &mut Self {
        self.add_element(action_id, configure)
    }

    pub fn add_overflow(
        &mut self,
        action_id: impl Into<String>,
        configure: impl FnOnce(&mut ElementBuilder<Overflow>),
    ) -> &mut Self {
        self.add_element(action_id, configure)
    }

    pub fn add_date_picker(
        &mut self,
        action_id: impl Into<String>,
        configure: impl FnOnce(&mut ElementBuilder<DatePicker>),
    ) -> &mut Self {
        self.add_element(action_id, configure)
    }

    pub fn add_datetime_picker(
        &mut self,
        action_id: impl Into<String>,
        configure: impl FnOnce(&mut ElementBuilder<DatetimePicker>),
    ) -> &mut Self {
        self.add_element(action_id, configure)
    }

    pub fn add_time_picker(
        &mut self,
        action_id: impl Into<String>,
        configure: impl FnOnce(&mut ElementBuilder<TimePicker>),
    ) -> &mut Self {
        self.add_element(action_id, configure)
    }

    pub fn add_static_select(
        &mut self,
        action_id: impl Into<String>,
        configure: impl FnOnce(&mut ElementBuilder<StaticSelect>),
    ) -> &mut Self {
        self.add_element(action_id, configure)
    }

    pub fn add_multi_static_select(
        &mut self,
        action_id: impl Into<String>,
        configure: impl FnOnce(&mut ElementBuilder<MultiStaticSelect>),
    ) -> &mut Self {
        self.add_element(action_id, configure)
    }

    pub fn add_external_select(
        &mut self,
        action_id: impl Into<String>,
        configure: impl FnOnce(&mut ElementBuilder<ExternalSelect>),
    ) -> &mut Self {
        self.add_element(action_id, configure)
    }

    pub fn add_multi_external_select(
        &mut self,
        action_id: impl Into<String>,
        configure: impl FnOnce(&mut ElementBuilder<MultiExternalSelect>),
    ) -> &mut Self {
        self.add_element(action_id, configure)
    }

    pub fn add_users_select(
        &mut self,
        action_id: impl Into<String>,
        configure: impl FnOnce(&mut ElementBuilder<UsersSelect>),
    ) -> &mut Self {
        self.add_element(action_id, configure)
    }

    pub fn add_multi_users_select(
        &mut self,
        action_id: impl Into<String>,
        configure: impl FnOnce(&mut ElementBuilder<MultiUsersSelect>),
    ) -> &mut Self {
        self.add_element(action_id, configure)
    }

    pub fn add_conversations_select(
        &mut self,
        action_id: impl Into<String>,
        configure: impl FnOnce(&mut ElementBuilder<ConversationsSelect>),
    ) -> &mut Self {
        self.add_element(action_id, configure)
    }

    pub fn add_multi_conversations_select(
        &mut self,
        action_id: impl Into<String>,
        configure: impl FnOnce(&mut ElementBuilder<MultiConversationsSelect>),
    ) -> &mut Self {
        self.add_element(action_id, configure)
    }

    pub fn add_channels_select(
        &mut self,
        action_id: impl Into<String>,
        configure: impl FnOnce(&mut ElementBuilder<ChannelsSelect>),
    ) -> &mut Self {
        self.add_element(action_id, configure)
    }

    pub fn add_multi_channels_select(
        &mut self,
        action_id: impl Into<String>,
        configure: impl FnOnce(&mut ElementBuilder<MultiChannelsSelect>),
    ) -> &mut Self {
        self.add_element(action_id, configure)
    }

    /// Check the block id and element count, then produce the block.
    pub fn build(self) -> Result<ActionsBlock, BlockKitError> {
        check_block_id(self.block_id.as_deref())?;
        check_limit(
            StructuralLimit::ActionsElements,
            ACTIONS_MAX_ELEMENTS,
            self.elements.len(),
        )?;
        Ok(ActionsBlock {
            block_id: self.block_id,
            elements: self.elements,
        })
    }
}

#[cfg(test)]
mod tests {
    use blockkit_types::composition::ButtonStyle;

    use super::*;

    fn with_buttons(count: usize) -> ActionsBlockBuilder {
        let mut builder = ActionsBlockBuilder::new();
        for i in 0..count {
            builder.add_button(format!("b{i}"), "Click", |_| {});
        }
        builder
    }

    #[test]
    fn test_add_element_assigns_action_id_before_configure() {
        let mut builder = ActionsBlockBuilder::new();
        builder.add_element::<Button>("go", |b| {
            assert_eq!(b.element().action_id.as_deref(), Some("go"));
            b.text("Go").style(ButtonStyle::Primary);
        });

        let block = builder.build().unwrap();
        match &block.elements[0] {
            ActionElement::Button(button) => {
                assert_eq!(button.action_id.as_deref(), Some("go"));
                assert_eq!(button.text.text, "Go");
            }
            other => panic!("unexpected element: {other:?}"),
        }
    }

    #[test]
    fn test_configure_may_override_action_id() {
        let mut builder = ActionsBlockBuilder::new();
        builder.add_static_select("first", |s| {
            s.action_id("second");
        });
        let block = builder.build().unwrap();
        assert_eq!(block.elements[0].action_id(), Some("second"));
    }

    #[test]
    fn test_add_existing_keeps_prebuilt_fields() {
        let prebuilt = Button {
            value: Some("v".to_string()),
            ..Default::default()
        };
        let mut builder = ActionsBlockBuilder::new();
        builder.add_existing(prebuilt, |b| {
            b.action_id("prebuilt");
        });

        match &builder.elements()[0] {
            ActionElement::Button(button) => {
                assert_eq!(button.value.as_deref(), Some("v"));
                assert_eq!(button.action_id.as_deref(), Some("prebuilt"));
            }
            other => panic!("unexpected element: {other:?}"),
        }
    }

    #[test]
    fn test_elements_keep_call_order_across_kinds() {
        let mut builder = ActionsBlockBuilder::new();
        builder
            .add_button("a", "A", |_| {})
            .add_date_picker("b", |p| {
                p.focus_on_load(true);
            })
            .add_overflow("c", |o| {
                o.add_option("Edit", "edit");
            });

        let ids: Vec<Option<&str>> = builder.elements().iter().map(|e| e.action_id()).collect();
        assert_eq!(ids, vec![Some("a"), Some("b"), Some("c")]);
        assert!(builder.elements()[1].focus_on_load());
    }

    #[test]
    fn test_twenty_five_elements_allowed() {
        let block = with_buttons(25).build().unwrap();
        assert_eq!(block.elements.len(), 25);
    }

    #[test]
    fn test_twenty_six_elements_rejected() {
        let err = with_buttons(26).build().unwrap_err();
        assert_eq!(
            err,
            BlockKitError::StructuralLimitExceeded {
                limit: StructuralLimit::ActionsElements,
                max: 25,
                actual: 26,
            }
        );
    }

    #[test]
    fn test_block_id_checked_before_element_count() {
        let mut builder = with_buttons(30);
        builder.block_id("x".repeat(256));
        let err = builder.build().unwrap_err();
        assert!(matches!(
            err,
            BlockKitError::StructuralLimitExceeded {
                limit: StructuralLimit::BlockIdLength,
                ..
            }
        ));
    }

    #[test]
    fn test_block_id_of_exactly_255_chars_allowed() {
        let mut builder = with_buttons(1);
        builder.block_id("x".repeat(255));
        let block = builder.build().unwrap();
        assert_eq!(block.block_id.map(|id| id.len()), Some(255));
    }
}
