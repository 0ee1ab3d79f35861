//! Button and overflow menu setters.

use blockkit_types::composition::{ButtonStyle, PlainText, SelectOption, Text};
use blockkit_types::element::{Button, Overflow};

use crate::element::ElementBuilder;

impl ElementBuilder<Button> {
    pub fn text(&mut self, text: impl Into<PlainText>) -> &mut Self {
        let text = text.into();
        self.set(|b| b.text = text)
    }

    /// Open `url` in the user's browser when clicked.
    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        let url = url.into();
        self.set(|b| b.url = Some(url))
    }

    pub fn value(&mut self, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        self.set(|b| b.value = Some(value))
    }

    pub fn style(&mut self, style: ButtonStyle) -> &mut Self {
        self.set(|b| b.style = Some(style))
    }

    pub fn accessibility_label(&mut self, label: impl Into<String>) -> &mut Self {
        let label = label.into();
        self.set(|b| b.accessibility_label = Some(label))
    }
}

impl ElementBuilder<Overflow> {
    /// Add an option that opens `url` when chosen.
    pub fn add_url_option(
        &mut self,
        text: impl Into<Text>,
        value: impl Into<String>,
        url: impl Into<String>,
    ) -> &mut Self {
        let mut option = SelectOption::new(text, value);
        option.url = Some(url.into());
        self.set(|o| o.options.push(option))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_setters() {
        let mut builder = ElementBuilder::new(Button::default());
        builder
            .text("Approve")
            .value("req-42")
            .style(ButtonStyle::Primary)
            .accessibility_label("Approve request 42");

        let button = builder.into_inner();
        assert_eq!(button.text.text, "Approve");
        assert_eq!(button.value.as_deref(), Some("req-42"));
        assert_eq!(button.style, Some(ButtonStyle::Primary));
        assert_eq!(
            button.accessibility_label.as_deref(),
            Some("Approve request 42")
        );
        assert!(button.url.is_none());
    }

    #[test]
    fn test_overflow_mixes_plain_and_url_options() {
        let mut builder = ElementBuilder::new(Overflow::default());
        builder
            .add_option("Edit", "edit")
            .add_url_option("Docs", "docs", "https://example.com/docs");

        let overflow = builder.into_inner();
        assert_eq!(overflow.options.len(), 2);
        assert!(overflow.options[0].url.is_none());
        assert_eq!(
            overflow.options[1].url.as_deref(),
            Some("https://example.com/docs")
        );
    }
}
