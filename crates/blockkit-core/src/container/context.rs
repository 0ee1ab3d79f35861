//! Context block builder.

use blockkit_types::block::ContextBlock;
use blockkit_types::composition::{Markdown, PlainText, SlackFile};
use blockkit_types::element::{ContextElement, ImageElement};
use blockkit_types::limits::CONTEXT_MAX_ELEMENTS;

use crate::error::{check_block_id, check_limit, BlockKitError, StructuralLimit};

#[derive(Debug, Clone, Default)]
pub struct ContextBlockBuilder {
    block_id: Option<String>,
    elements: Vec<ContextElement>,
}

impl ContextBlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_id(&mut self, block_id: impl Into<String>) -> &mut Self {
        self.block_id = Some(block_id.into());
        self
    }

    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.elements
            .push(ContextElement::PlainText(PlainText::new(text)));
        self
    }

    pub fn add_markdown(&mut self, text: impl Into<String>) -> &mut Self {
        self.elements.push(ContextElement::Markdown(Markdown::new(text)));
        self
    }

    pub fn add_image_from_url(
        &mut self,
        image_url: impl Into<String>,
        alt_text: impl Into<String>,
    ) -> &mut Self {
        self.elements.push(ContextElement::Image(ImageElement {
            image_url: Some(image_url.into()),
            slack_file: None,
            alt_text: alt_text.into(),
        }));
        self
    }

    pub fn add_image_from_slack_file(
        &mut self,
        file: SlackFile,
        alt_text: impl Into<String>,
    ) -> &mut Self {
        self.elements.push(ContextElement::Image(ImageElement {
            image_url: None,
            slack_file: Some(file),
            alt_text: alt_text.into(),
        }));
        self
    }

    pub fn build(self) -> Result<ContextBlock, BlockKitError> {
        check_block_id(self.block_id.as_deref())?;
        check_limit(
            StructuralLimit::ContextElements,
            CONTEXT_MAX_ELEMENTS,
            self.elements.len(),
        )?;
        Ok(ContextBlock {
            block_id: self.block_id,
            elements: self.elements,
        })
    }
}
