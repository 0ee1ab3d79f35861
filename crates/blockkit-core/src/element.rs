//! Generic element builder.
//!
//! `ElementBuilder<T>` owns one element record and exposes `set`, the single
//! mutation primitive every typed setter in `extensions` is written on top of.
//! No validation happens here; the owning container validates in `build()`.
//!
//! Whether an element may also sit in an input block is a property of `T`
//! (`InputElementKind`), so input-only operations such as `focus_on_load`
//! are simply unavailable for buttons and overflow menus.

use blockkit_types::capability::{Confirmable, ElementKind, InputElementKind};
use blockkit_types::composition::ConfirmationDialog;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementBuilder<T> {
    element: T,
}

impl<T: ElementKind> ElementBuilder<T> {
    /// Wrap an already constructed element.
    pub fn new(element: T) -> Self {
        Self { element }
    }

    /// Read access to the element being configured.
    pub fn element(&self) -> &T {
        &self.element
    }

    pub fn into_inner(self) -> T {
        self.element
    }

    /// Run `modifier` over the wrapped element.
    pub fn set(&mut self, modifier: impl FnOnce(&mut T)) -> &mut Self {
        modifier(&mut self.element);
        self
    }

    pub fn action_id(&mut self, action_id: impl Into<String>) -> &mut Self {
        let action_id = action_id.into();
        self.set(|e| e.set_action_id(action_id))
    }
}

impl<T: ElementKind + Confirmable> ElementBuilder<T> {
    /// Attach a confirmation dialog, configured from a fresh empty one.
    pub fn confirmation_dialog(
        &mut self,
        configure: impl FnOnce(&mut ConfirmationDialog),
    ) -> &mut Self {
        let mut dialog = ConfirmationDialog::default();
        configure(&mut dialog);
        self.set(|e| e.set_confirm(dialog))
    }
}

impl<T: InputElementKind> ElementBuilder<T> {
    pub fn focus_on_load(&mut self, focus: bool) -> &mut Self {
        self.set(|e| e.set_focus_on_load(focus))
    }
}

#[cfg(test)]
mod tests {
    use blockkit_types::capability::FocusOnLoad;
    use blockkit_types::composition::{ButtonStyle, PlainText, Text};
    use blockkit_types::element::{Button, DatePicker};

    use super::*;

    #[test]
    fn test_set_and_action_id_chain() {
        let mut builder = ElementBuilder::new(Button::default());
        builder
            .action_id("approve")
            .set(|b| b.value = Some("yes".to_string()));

        let button = builder.into_inner();
        assert_eq!(button.action_id.as_deref(), Some("approve"));
        assert_eq!(button.value.as_deref(), Some("yes"));
    }

    #[test]
    fn test_action_id_last_call_wins() {
        let mut builder = ElementBuilder::new(Button::default());
        builder.action_id("a").action_id("b");
        assert_eq!(builder.element().action_id(), Some("b"));
    }

    #[test]
    fn test_confirmation_dialog_replaces_slot() {
        let mut builder = ElementBuilder::new(Button::default());
        builder.confirmation_dialog(|c| {
            c.title = PlainText::new("Sure?");
            c.text = Text::plain("This cannot be undone");
            c.confirm = PlainText::new("Do it");
            c.deny = PlainText::new("Cancel");
            c.style = Some(ButtonStyle::Danger);
        });

        let confirm = builder.element().confirm.clone().unwrap();
        assert_eq!(confirm.title.text, "Sure?");
        assert_eq!(confirm.deny.text, "Cancel");
        assert_eq!(confirm.style, Some(ButtonStyle::Danger));
    }

    #[test]
    fn test_focus_on_load_on_input_capable_element() {
        let mut builder = ElementBuilder::new(DatePicker::default());
        builder.focus_on_load(true);
        assert!(builder.element().focus_on_load());
    }
}
