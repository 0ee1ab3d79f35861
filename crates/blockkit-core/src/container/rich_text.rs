//! Rich text block builder and its sub-builders.

use std::ops::{Deref, DerefMut};

use blockkit_types::block::RichTextBlock;
use blockkit_types::rich_text::{
    BroadcastRange, ListStyle, RichTextElement, RichTextInline, RichTextList,
    RichTextPreformatted, RichTextQuote, RichTextSection, RichTextStyle,
};

use crate::error::{check_block_id, BlockKitError};

#[derive(Debug, Clone, Default)]
pub struct RichTextBuilder {
    block_id: Option<String>,
    elements: Vec<RichTextElement>,
}

impl RichTextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_id(&mut self, block_id: impl Into<String>) -> &mut Self {
        self.block_id = Some(block_id.into());
        self
    }

    pub fn add_section(&mut self, configure: impl FnOnce(&mut RichTextSectionBuilder)) -> &mut Self {
        let mut section = RichTextSectionBuilder::default();
        configure(&mut section);
        self.elements
            .push(RichTextElement::RichTextSection(section.into_section()));
        self
    }

    pub fn add_text_list(&mut self, configure: impl FnOnce(&mut RichTextListBuilder)) -> &mut Self {
        let mut list = RichTextListBuilder::default();
        configure(&mut list);
        self.elements.push(RichTextElement::RichTextList(list.list));
        self
    }

    pub fn add_preformatted_text(
        &mut self,
        configure: impl FnOnce(&mut RichTextBorderedBuilder),
    ) -> &mut Self {
        let mut bordered = RichTextBorderedBuilder::default();
        configure(&mut bordered);
        self.elements
            .push(RichTextElement::RichTextPreformatted(RichTextPreformatted {
                elements: bordered.section.elements,
                border: bordered.border,
            }));
        self
    }

    pub fn add_quote(&mut self, configure: impl FnOnce(&mut RichTextBorderedBuilder)) -> &mut Self {
        let mut bordered = RichTextBorderedBuilder::default();
        configure(&mut bordered);
        self.elements.push(RichTextElement::RichTextQuote(RichTextQuote {
            elements: bordered.section.elements,
            border: bordered.border,
        }));
        self
    }

    pub fn build(self) -> Result<RichTextBlock, BlockKitError> {
        check_block_id(self.block_id.as_deref())?;
        Ok(RichTextBlock {
            block_id: self.block_id,
            elements: self.elements,
        })
    }
}

/// Ordered inline leaves of one rich text section.
#[derive(Debug, Clone, Default)]
pub struct RichTextSectionBuilder {
    elements: Vec<RichTextInline>,
}

impl RichTextSectionBuilder {
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(RichTextInline::Text {
            text: text.into(),
            style: None,
        })
    }

    pub fn add_styled_text(&mut self, text: impl Into<String>, style: RichTextStyle) -> &mut Self {
        self.push(RichTextInline::Text {
            text: text.into(),
            style: Some(style),
        })
    }

    /// Link with optional display text. Without text the client shows the URL.
    pub fn add_link(&mut self, url: impl Into<String>, text: Option<String>) -> &mut Self {
        self.push(RichTextInline::Link {
            url: url.into(),
            text,
            style: None,
        })
    }

    pub fn add_emoji(&mut self, name: impl Into<String>) -> &mut Self {
        self.push(RichTextInline::Emoji {
            name: name.into(),
            unicode: None,
        })
    }

    pub fn add_user(&mut self, user_id: impl Into<String>) -> &mut Self {
        self.push(RichTextInline::User {
            user_id: user_id.into(),
        })
    }

    pub fn add_channel(&mut self, channel_id: impl Into<String>) -> &mut Self {
        self.push(RichTextInline::Channel {
            channel_id: channel_id.into(),
        })
    }

    pub fn add_user_group(&mut self, usergroup_id: impl Into<String>) -> &mut Self {
        self.push(RichTextInline::UserGroup {
            usergroup_id: usergroup_id.into(),
        })
    }

    pub fn add_broadcast(&mut self, range: BroadcastRange) -> &mut Self {
        self.push(RichTextInline::Broadcast { range })
    }

    fn push(&mut self, inline: RichTextInline) -> &mut Self {
        self.elements.push(inline);
        self
    }

    fn into_section(self) -> RichTextSection {
        RichTextSection {
            elements: self.elements,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RichTextListBuilder {
    list: RichTextList,
}

impl RichTextListBuilder {
    pub fn style(&mut self, style: ListStyle) -> &mut Self {
        self.list.style = style;
        self
    }

    pub fn indent(&mut self, indent: u32) -> &mut Self {
        self.list.indent = Some(indent);
        self
    }

    pub fn offset(&mut self, offset: u32) -> &mut Self {
        self.list.offset = Some(offset);
        self
    }

    pub fn border(&mut self, border: u32) -> &mut Self {
        self.list.border = Some(border);
        self
    }

    /// Append one list item.
    pub fn add_section(&mut self, configure: impl FnOnce(&mut RichTextSectionBuilder)) -> &mut Self {
        let mut section = RichTextSectionBuilder::default();
        configure(&mut section);
        self.list.elements.push(section.into_section());
        self
    }
}

/// Preformatted text or quote: inline leaves plus a border width.
///
/// Inline leaf methods are reached through `Deref` to the section builder.
#[derive(Debug, Clone, Default)]
pub struct RichTextBorderedBuilder {
    section: RichTextSectionBuilder,
    border: Option<u32>,
}

impl RichTextBorderedBuilder {
    pub fn border(&mut self, border: u32) -> &mut Self {
        self.border = Some(border);
        self
    }
}

impl Deref for RichTextBorderedBuilder {
    type Target = RichTextSectionBuilder;

    fn deref(&self) -> &Self::Target {
        &self.section
    }
}

impl DerefMut for RichTextBorderedBuilder {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.section
    }
}
