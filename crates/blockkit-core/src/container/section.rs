//! Section block builder.
//!
//! The body text and the accessory are single slots: a later `text`,
//! `markdown` or `accessory` call replaces what an earlier one set.

use blockkit_types::block::SectionBlock;
use blockkit_types::capability::ElementKind;
use blockkit_types::composition::Text;
use blockkit_types::element::Accessory;
use blockkit_types::limits::{SECTION_FIELD_MAX_LEN, SECTION_MAX_FIELDS};

use crate::element::ElementBuilder;
use crate::error::{check_block_id, check_limit, BlockKitError, StructuralLimit};

#[derive(Debug, Clone, Default)]
pub struct SectionBuilder {
    block_id: Option<String>,
    text: Option<Text>,
    fields: Vec<Text>,
    accessory: Option<Accessory>,
}

impl SectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_id(&mut self, block_id: impl Into<String>) -> &mut Self {
        self.block_id = Some(block_id.into());
        self
    }

    /// Set the body as plain text.
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(Text::plain(text));
        self
    }

    /// Set the body as mrkdwn.
    pub fn markdown(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(Text::markdown(text));
        self
    }

    pub fn add_text_field(&mut self, text: impl Into<String>) -> &mut Self {
        self.fields.push(Text::plain(text));
        self
    }

    pub fn add_markdown_field(&mut self, text: impl Into<String>) -> &mut Self {
        self.fields.push(Text::markdown(text));
        self
    }

    pub fn accessory(&mut self, accessory: impl Into<Accessory>) -> &mut Self {
        self.accessory = Some(accessory.into());
        self
    }

    /// Build an accessory element in place, starting from `T::default()`.
    pub fn accessory_element<T>(
        &mut self,
        action_id: impl Into<String>,
        configure: impl FnOnce(&mut ElementBuilder<T>),
    ) -> &mut Self
    where
        T: ElementKind + Into<Accessory>,
    {
        let mut builder = ElementBuilder::new(T::default());
        builder.action_id(action_id);
        configure(&mut builder);
        self.accessory(builder.into_inner())
    }

    pub fn build(self) -> Result<SectionBlock, BlockKitError> {
        check_block_id(self.block_id.as_deref())?;
        check_limit(
            StructuralLimit::SectionFields,
            SECTION_MAX_FIELDS,
            self.fields.len(),
        )?;
        for field in &self.fields {
            check_limit(
                StructuralLimit::SectionFieldLength,
                SECTION_FIELD_MAX_LEN,
                field.text().chars().count(),
            )?;
        }
        Ok(SectionBlock {
            block_id: self.block_id,
            text: self.text,
            fields: self.fields,
            accessory: self.accessory,
        })
    }
}
