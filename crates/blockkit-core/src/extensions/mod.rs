//! Typed setters layered on `ElementBuilder::set`.
//!
//! Setters shared by several element kinds are written once against the
//! capability traits in `blockkit_types::capability`; setters unique to one
//! kind live in the per-kind submodules. Every setter is a thin `set` call.

pub mod button;
pub mod pickers;
pub mod selects;
pub mod text_inputs;

use std::collections::HashSet;

use blockkit_types::capability::{
    ElementKind, HasConversationFilter, HasMaxSelectedItems, HasOptionGroups, HasOptions,
    HasPlaceholder, MultiOptionSelect, SingleOptionSelect, TextInputKind,
};
use blockkit_types::composition::{
    ConversationType, DispatchActionConfig, DispatchTrigger, OptionGroup, PlainText,
    SelectOption, Text,
};

use crate::element::ElementBuilder;

// ---------------------------------------------------------------------------
// Option groups
// ---------------------------------------------------------------------------

/// Collects the options of one option group.
#[derive(Debug, Default)]
pub struct OptionGroupBuilder {
    options: Vec<SelectOption>,
}

impl OptionGroupBuilder {
    pub fn add_option(&mut self, text: impl Into<Text>, value: impl Into<String>) -> &mut Self {
        self.options.push(SelectOption::new(text, value));
        self
    }

    pub fn add_option_with_description(
        &mut self,
        text: impl Into<Text>,
        value: impl Into<String>,
        description: impl Into<PlainText>,
    ) -> &mut Self {
        let mut option = SelectOption::new(text, value);
        option.description = Some(description.into());
        self.options.push(option);
        self
    }

    fn into_group(self, label: PlainText) -> OptionGroup {
        OptionGroup {
            label,
            options: self.options,
        }
    }
}

// ---------------------------------------------------------------------------
// Capability-generic setters
// ---------------------------------------------------------------------------

impl<T: ElementKind + HasPlaceholder> ElementBuilder<T> {
    pub fn placeholder(&mut self, placeholder: impl Into<PlainText>) -> &mut Self {
        let placeholder = placeholder.into();
        self.set(|e| e.set_placeholder(placeholder))
    }
}

impl<T: ElementKind + HasOptions> ElementBuilder<T> {
    pub fn add_option(&mut self, text: impl Into<Text>, value: impl Into<String>) -> &mut Self {
        let option = SelectOption::new(text, value);
        self.set(|e| e.options_mut().push(option))
    }

    pub fn add_option_with_description(
        &mut self,
        text: impl Into<Text>,
        value: impl Into<String>,
        description: impl Into<PlainText>,
    ) -> &mut Self {
        let mut option = SelectOption::new(text, value);
        option.description = Some(description.into());
        self.set(|e| e.options_mut().push(option))
    }
}

impl<T: ElementKind + HasOptionGroups> ElementBuilder<T> {
    pub fn add_option_group(
        &mut self,
        label: impl Into<PlainText>,
        configure: impl FnOnce(&mut OptionGroupBuilder),
    ) -> &mut Self {
        let mut group = OptionGroupBuilder::default();
        configure(&mut group);
        let group = group.into_group(label.into());
        self.set(|e| e.option_groups_mut().push(group))
    }
}

impl<T: ElementKind + HasOptions + SingleOptionSelect> ElementBuilder<T> {
    /// Select the first already-added option whose value equals `value`.
    ///
    /// Options are searched before option groups. When nothing matches the
    /// initial option is cleared rather than reported as an error.
    pub fn initial_option(&mut self, value: &str) -> &mut Self {
        self.set(|e| {
            let selected = e
                .all_options()
                .into_iter()
                .find(|o| o.value == value)
                .cloned();
            e.set_initial_option(selected);
        })
    }
}

impl<T: ElementKind + HasOptions + MultiOptionSelect> ElementBuilder<T> {
    /// Select every already-added option whose value is in `values`.
    ///
    /// The selection keeps the order the options were added in, not the
    /// order of `values`. Unknown values are ignored.
    pub fn initial_options<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let wanted: Vec<S> = values.into_iter().collect();
        let wanted: HashSet<&str> = wanted.iter().map(|s| s.as_ref()).collect();
        self.set(|e| {
            let selected: Vec<SelectOption> = e
                .all_options()
                .into_iter()
                .filter(|o| wanted.contains(o.value.as_str()))
                .cloned()
                .collect();
            e.set_initial_options(selected);
        })
    }
}

impl<T: ElementKind + HasMaxSelectedItems> ElementBuilder<T> {
    pub fn max_selected_items(&mut self, max: u32) -> &mut Self {
        self.set(|e| e.set_max_selected_items(max))
    }
}

impl<T: ElementKind + HasConversationFilter> ElementBuilder<T> {
    /// Restrict the listed conversations to the given kinds.
    pub fn include(&mut self, types: impl IntoIterator<Item = ConversationType>) -> &mut Self {
        let types: Vec<ConversationType> = types.into_iter().collect();
        self.set(|e| e.filter_mut().get_or_insert_with(Default::default).include = types)
    }

    pub fn exclude_bot_users(&mut self, exclude: bool) -> &mut Self {
        self.set(|e| {
            e.filter_mut()
                .get_or_insert_with(Default::default)
                .exclude_bot_users = Some(exclude);
        })
    }

    pub fn exclude_external_shared_channels(&mut self, exclude: bool) -> &mut Self {
        self.set(|e| {
            e.filter_mut()
                .get_or_insert_with(Default::default)
                .exclude_external_shared_channels = Some(exclude);
        })
    }
}

impl<T: ElementKind + TextInputKind> ElementBuilder<T> {
    pub fn initial_value(&mut self, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        self.set(|e| e.set_initial_value(value))
    }

    /// Dispatch a `block_actions` payload on the given interactions.
    pub fn dispatch_action_on(
        &mut self,
        triggers: impl IntoIterator<Item = DispatchTrigger>,
    ) -> &mut Self {
        let config = DispatchActionConfig {
            trigger_actions_on: triggers.into_iter().collect(),
        };
        self.set(|e| e.set_dispatch_action_config(config))
    }
}

#[cfg(test)]
mod tests {
    use blockkit_types::element::{
        Checkboxes, ConversationsSelect, MultiStaticSelect, PlainTextInput, RadioButtons,
        StaticSelect,
    };

    use super::*;

    fn values(options: &[SelectOption]) -> Vec<&str> {
        options.iter().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn test_add_option_preserves_call_order() {
        let mut builder = ElementBuilder::new(StaticSelect::default());
        builder.add_option("One", "1").add_option("Two", "2");
        assert_eq!(values(&builder.element().options), vec!["1", "2"]);
    }

    #[test]
    fn test_initial_option_selects_matching_value() {
        let mut builder = ElementBuilder::new(RadioButtons::default());
        builder
            .add_option("Small", "s")
            .add_option("Large", "l")
            .initial_option("l");

        let selected = builder.element().initial_option().unwrap();
        assert_eq!(selected.value, "l");
        assert_eq!(selected.text.text(), "Large");
    }

    #[test]
    fn test_initial_option_unknown_value_clears_selection() {
        let mut builder = ElementBuilder::new(StaticSelect::default());
        builder
            .add_option("One", "1")
            .initial_option("1")
            .initial_option("missing");
        assert!(builder.element().initial_option.is_none());
    }

    #[test]
    fn test_initial_option_before_options_is_empty() {
        let mut builder = ElementBuilder::new(StaticSelect::default());
        builder.initial_option("1").add_option("One", "1");
        assert!(builder.element().initial_option.is_none());
    }

    #[test]
    fn test_initial_option_found_in_group() {
        let mut builder = ElementBuilder::new(StaticSelect::default());
        builder
            .add_option_group("Fruit", |g| {
                g.add_option("Apple", "apple").add_option("Pear", "pear");
            })
            .initial_option("pear");
        assert_eq!(builder.element().initial_option().unwrap().value, "pear");
        assert_eq!(builder.element().option_groups[0].label.text, "Fruit");
    }

    #[test]
    fn test_initial_options_keep_option_order() {
        let mut builder = ElementBuilder::new(MultiStaticSelect::default());
        builder
            .add_option("B", "B")
            .add_option("A", "A")
            .add_option("C", "C")
            .initial_options(["A", "B"]);

        assert_eq!(values(builder.element().initial_options()), vec!["B", "A"]);
    }

    #[test]
    fn test_initial_options_on_checkboxes_ignores_unknown() {
        let mut builder = ElementBuilder::new(Checkboxes::default());
        builder
            .add_option_with_description("Email", "email", "Daily digest")
            .add_option("SMS", "sms")
            .initial_options(vec!["sms".to_string(), "fax".to_string()]);

        assert_eq!(values(&builder.element().initial_options), vec!["sms"]);
        assert_eq!(
            builder.element().options[0].description.as_ref().unwrap().text,
            "Daily digest"
        );
    }

    #[test]
    fn test_filter_created_lazily_and_mutated_in_place() {
        let mut builder = ElementBuilder::new(ConversationsSelect::default());
        assert!(builder.element().filter.is_none());

        builder
            .exclude_bot_users(true)
            .include([ConversationType::Public, ConversationType::Private])
            .exclude_external_shared_channels(false);

        let filter = builder.element().filter.clone().unwrap();
        assert_eq!(filter.exclude_bot_users, Some(true));
        assert_eq!(filter.exclude_external_shared_channels, Some(false));
        assert_eq!(
            filter.include,
            vec![ConversationType::Public, ConversationType::Private]
        );
    }

    #[test]
    fn test_max_selected_items_and_placeholder() {
        let mut builder = ElementBuilder::new(MultiStaticSelect::default());
        builder.placeholder("Pick some").max_selected_items(3);
        assert_eq!(builder.element().max_selected_items, Some(3));
        assert_eq!(
            builder.element().placeholder.as_ref().unwrap().text,
            "Pick some"
        );
    }

    #[test]
    fn test_text_input_initial_value_and_dispatch() {
        let mut builder = ElementBuilder::new(PlainTextInput::default());
        builder
            .initial_value("draft")
            .dispatch_action_on([DispatchTrigger::OnEnterPressed]);

        let input = builder.element();
        assert_eq!(input.initial_value.as_deref(), Some("draft"));
        assert_eq!(
            input.dispatch_action_config.as_ref().unwrap().trigger_actions_on,
            vec![DispatchTrigger::OnEnterPressed]
        );
    }
}
