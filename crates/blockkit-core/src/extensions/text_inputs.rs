//! Setters specific to the text-style inputs.

use blockkit_types::element::{NumberInput, PlainTextInput};

use crate::element::ElementBuilder;

impl ElementBuilder<PlainTextInput> {
    pub fn multiline(&mut self, multiline: bool) -> &mut Self {
        self.set(|i| i.multiline = Some(multiline))
    }

    pub fn min_length(&mut self, length: u32) -> &mut Self {
        self.set(|i| i.min_length = Some(length))
    }

    pub fn max_length(&mut self, length: u32) -> &mut Self {
        self.set(|i| i.max_length = Some(length))
    }
}

impl ElementBuilder<NumberInput> {
    pub fn decimal_allowed(&mut self, allowed: bool) -> &mut Self {
        self.set(|i| i.is_decimal_allowed = allowed)
    }

    pub fn min_value(&mut self, value: impl ToString) -> &mut Self {
        let value = value.to_string();
        self.set(|i| i.min_value = Some(value))
    }

    pub fn max_value(&mut self, value: impl ToString) -> &mut Self {
        let value = value.to_string();
        self.set(|i| i.max_value = Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_input_setters() {
        let mut builder = ElementBuilder::new(PlainTextInput::default());
        builder
            .multiline(true)
            .min_length(10)
            .max_length(500)
            .placeholder("Describe the issue");

        let input = builder.into_inner();
        assert_eq!(input.multiline, Some(true));
        assert_eq!(input.min_length, Some(10));
        assert_eq!(input.max_length, Some(500));
        assert_eq!(input.placeholder.unwrap().text, "Describe the issue");
    }

    #[test]
    fn test_number_input_bounds_are_strings() {
        let mut builder = ElementBuilder::new(NumberInput::default());
        builder
            .decimal_allowed(true)
            .min_value(0.5)
            .max_value(10)
            .initial_value("2.5");

        let input = builder.into_inner();
        assert!(input.is_decimal_allowed);
        assert_eq!(input.min_value.as_deref(), Some("0.5"));
        assert_eq!(input.max_value.as_deref(), Some("10"));
        assert_eq!(input.initial_value.as_deref(), Some("2.5"));
    }
}
