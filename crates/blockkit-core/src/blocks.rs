//! Root layout builder.
//!
//! `BlocksBuilder` owns the ordered block sequence of one message or view.
//! It appends blocks, edits them in place, and runs the whole-layout focus
//! check in `build()`. It can be seeded from a previously rendered layout so
//! an application can update a message incrementally.

use blockkit_types::block::{
    ActionsBlock, Block, BlockKind, DividerBlock, FileBlock, HeaderBlock, ImageBlock,
};
use blockkit_types::capability::InputElementKind;
use blockkit_types::composition::PlainText;
use blockkit_types::config::RenderConfig;
use blockkit_types::element::ActionElement;
use blockkit_types::limits::MAX_FOCUSED_ELEMENTS;
use serde_json::Value;
use tracing::{debug, trace};

use crate::container::{
    ActionsBlockBuilder, ContextBlockBuilder, InputBlockBuilder, RichTextBuilder, SectionBuilder,
};
use crate::error::{check_block_id, BlockKitError};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlocksBuilder {
    blocks: Vec<Block>,
}

impl BlocksBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an empty layout.
    pub fn create() -> Self {
        Self::default()
    }

    /// Seed from existing blocks. The builder keeps its own copy.
    pub fn from_blocks(blocks: &[Block]) -> Self {
        Self {
            blocks: blocks.to_vec(),
        }
    }

    /// Seed from a rendered layout: either a JSON array of blocks or a
    /// message payload object carrying a `blocks` array.
    pub fn from_json(json: &Value) -> Result<Self, BlockKitError> {
        let blocks = match json {
            Value::Array(_) => json,
            Value::Object(payload) => payload.get("blocks").ok_or_else(|| {
                BlockKitError::invalid_argument("json", "payload object has no `blocks` field")
            })?,
            other => {
                return Err(BlockKitError::invalid_argument(
                    "json",
                    format!("expected an array of blocks, got {}", json_kind(other)),
                ));
            }
        };
        let blocks: Vec<Block> = serde_json::from_value(blocks.clone())
            .map_err(|e| BlockKitError::invalid_argument("json", e.to_string()))?;
        debug!(blocks = blocks.len(), "seeded layout from json");
        Ok(Self { blocks })
    }

    pub fn from_json_str(json: &str) -> Result<Self, BlockKitError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| BlockKitError::invalid_argument("json", e.to_string()))?;
        Self::from_json(&value)
    }

    // -----------------------------------------------------------------------
    // Appending
    // -----------------------------------------------------------------------

    /// Append an already built block. No structural checks are run.
    pub fn add_block(&mut self, block: impl Into<Block>) -> &mut Self {
        let block = block.into();
        trace!(kind = block.type_name(), "appending block");
        self.blocks.push(block);
        self
    }

    pub fn add_blocks<I, B>(&mut self, blocks: I) -> &mut Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Block>,
    {
        for block in blocks {
            self.add_block(block);
        }
        self
    }

    /// Append a `T::default()` block after running `configure` over it.
    pub fn add<T: BlockKind>(&mut self, configure: impl FnOnce(&mut T)) -> &mut Self {
        let mut block = T::default();
        configure(&mut block);
        self.add_block(block)
    }

    pub fn add_header(&mut self, text: impl Into<PlainText>) -> &mut Self {
        self.add_block(HeaderBlock {
            block_id: None,
            text: text.into(),
        })
    }

    pub fn add_divider(&mut self) -> &mut Self {
        self.add_block(DividerBlock::default())
    }

    pub fn add_image(
        &mut self,
        image_url: impl Into<String>,
        alt_text: impl Into<String>,
        configure: impl FnOnce(&mut ImageBlock),
    ) -> &mut Self {
        let mut image = ImageBlock {
            image_url: Some(image_url.into()),
            alt_text: alt_text.into(),
            ..Default::default()
        };
        configure(&mut image);
        self.add_block(image)
    }

    /// Append a remote file block for a file added through the remote files API.
    pub fn add_file(&mut self, external_id: impl Into<String>) -> &mut Self {
        self.add_block(FileBlock {
            external_id: external_id.into(),
            ..Default::default()
        })
    }

    pub fn add_section(
        &mut self,
        configure: impl FnOnce(&mut SectionBuilder),
    ) -> Result<&mut Self, BlockKitError> {
        let mut section = SectionBuilder::new();
        configure(&mut section);
        Ok(self.add_block(section.build()?))
    }

    pub fn add_actions(
        &mut self,
        configure: impl FnOnce(&mut ActionsBlockBuilder),
    ) -> Result<&mut Self, BlockKitError> {
        let mut actions = ActionsBlockBuilder::new();
        configure(&mut actions);
        Ok(self.add_block(actions.build()?))
    }

    pub fn add_context(
        &mut self,
        configure: impl FnOnce(&mut ContextBlockBuilder),
    ) -> Result<&mut Self, BlockKitError> {
        let mut context = ContextBlockBuilder::new();
        configure(&mut context);
        Ok(self.add_block(context.build()?))
    }

    pub fn add_rich_text(
        &mut self,
        configure: impl FnOnce(&mut RichTextBuilder),
    ) -> Result<&mut Self, BlockKitError> {
        let mut rich_text = RichTextBuilder::new();
        configure(&mut rich_text);
        Ok(self.add_block(rich_text.build()?))
    }

    /// Append an input block wrapping a fresh `T`.
    pub fn add_input<T: InputElementKind>(
        &mut self,
        label: impl Into<PlainText>,
        configure: impl FnOnce(&mut InputBlockBuilder<T>),
    ) -> Result<&mut Self, BlockKitError> {
        let mut input = InputBlockBuilder::new(label, T::default());
        configure(&mut input);
        let block = input.into_block();
        check_block_id(block.block_id.as_deref())?;
        Ok(self.add_block(block))
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Remove every block matching `predicate`; returns how many were removed.
    pub fn remove(&mut self, mut predicate: impl FnMut(&Block) -> bool) -> usize {
        let before = self.blocks.len();
        self.blocks.retain(|block| !predicate(block));
        let removed = before - self.blocks.len();
        debug!(removed, remaining = self.blocks.len(), "removed blocks");
        removed
    }

    /// Chaining form of [`BlocksBuilder::remove`].
    pub fn without(&mut self, predicate: impl FnMut(&Block) -> bool) -> &mut Self {
        self.remove(predicate);
        self
    }

    /// Remove blocks whose id equals `block_id`; true if any were removed.
    pub fn remove_by_id(&mut self, block_id: &str) -> bool {
        self.remove(|block| block.block_id() == Some(block_id)) > 0
    }

    /// Remove the first element matching `predicate` from the first actions block.
    ///
    /// Later actions blocks are never searched, even when the first one has
    /// no match. The actions block itself is kept when it becomes empty.
    pub fn remove_action(&mut self, predicate: impl FnMut(&ActionElement) -> bool) -> bool {
        let Some(actions) = self
            .blocks
            .iter_mut()
            .find_map(|block| ActionsBlock::from_block_mut(block))
        else {
            return false;
        };
        match actions.elements.iter().position(predicate) {
            Some(index) => {
                let removed = actions.elements.remove(index);
                debug!(action_id = removed.action_id(), "removed action element");
                true
            }
            None => false,
        }
    }

    pub fn remove_action_by_id(&mut self, action_id: &str) -> bool {
        self.remove_action(|element| element.action_id() == Some(action_id))
    }

    /// Run `modifier` over every block of kind `T` matching `predicate`, in order.
    pub fn modify<T: BlockKind>(
        &mut self,
        mut predicate: impl FnMut(&T) -> bool,
        mut modifier: impl FnMut(&mut T),
    ) -> &mut Self {
        for block in &mut self.blocks {
            if let Some(typed) = T::from_block_mut(block) {
                if predicate(typed) {
                    modifier(typed);
                }
            }
        }
        self
    }

    /// Run `modifier` over every block of kind `T` whose id equals `block_id`.
    pub fn modify_by_id<T: BlockKind>(
        &mut self,
        block_id: &str,
        mut modifier: impl FnMut(&mut T),
    ) -> &mut Self {
        for block in &mut self.blocks {
            if block.block_id() != Some(block_id) {
                continue;
            }
            if let Some(typed) = T::from_block_mut(block) {
                modifier(typed);
            }
        }
        self
    }

    // -----------------------------------------------------------------------
    // Reading
    // -----------------------------------------------------------------------

    pub fn find_by_id(&self, block_id: &str) -> Option<&Block> {
        self.blocks
            .iter()
            .find(|block| block.block_id() == Some(block_id))
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Check the whole-layout focus rule and return a copy of the blocks.
    pub fn build(&self) -> Result<Vec<Block>, BlockKitError> {
        let focused = focused_element_count(&self.blocks);
        if focused > MAX_FOCUSED_ELEMENTS {
            return Err(BlockKitError::TooManyFocusedElements {
                count: focused,
                max: MAX_FOCUSED_ELEMENTS,
            });
        }
        debug!(blocks = self.blocks.len(), focused, "built layout");
        Ok(self.blocks.clone())
    }

    pub fn to_json(&self) -> Result<Value, BlockKitError> {
        Ok(serde_json::to_value(self.build()?)?)
    }

    pub fn to_json_string(&self, render: &RenderConfig) -> Result<String, BlockKitError> {
        let blocks = self.build()?;
        let json = if render.pretty {
            serde_json::to_string_pretty(&blocks)?
        } else {
            serde_json::to_string(&blocks)?
        };
        Ok(json)
    }
}

/// Input-capable elements with `focus_on_load` set, in input and actions blocks.
fn focused_element_count(blocks: &[Block]) -> usize {
    blocks
        .iter()
        .map(|block| match block {
            Block::Input(input) => usize::from(input.element.focus_on_load()),
            Block::Actions(actions) => actions
                .elements
                .iter()
                .filter(|element| element.focus_on_load())
                .count(),
            _ => 0,
        })
        .sum()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use blockkit_types::block::{InputBlock, SectionBlock, VideoBlock};
    use blockkit_types::composition::Text;
    use blockkit_types::element::{Button, DatePicker, PlainTextInput, StaticSelect};
    use serde_json::json;

    use super::*;
    use crate::error::StructuralLimit;

    fn section(block_id: &str) -> Block {
        SectionBlock {
            block_id: Some(block_id.to_string()),
            text: Some(Text::plain(block_id)),
            ..Default::default()
        }
        .into()
    }

    fn ids(blocks: &[Block]) -> Vec<Option<&str>> {
        blocks.iter().map(|b| b.block_id()).collect()
    }

    #[test]
    fn test_header_section_divider_scenario() {
        let blocks = BlocksBuilder::create()
            .add_header("Title")
            .add_section(|s| {
                s.text("Hi");
            })
            .unwrap()
            .add_divider()
            .build()
            .unwrap();

        assert_eq!(blocks.len(), 3);
        assert!(matches!(&blocks[0], Block::Header(h) if h.text.text == "Title"));
        assert!(
            matches!(&blocks[1], Block::Section(s) if s.text == Some(Text::plain("Hi")))
        );
        assert!(matches!(&blocks[2], Block::Divider(_)));
        assert!(blocks.iter().all(|b| b.block_id().is_none()));
    }

    #[test]
    fn test_from_blocks_round_trip() {
        let source = vec![section("a"), Block::from(DividerBlock::default()), section("b")];
        let built = BlocksBuilder::from_blocks(&source).build().unwrap();
        assert_eq!(built, source);
    }

    #[test]
    fn test_build_returns_independent_copy() {
        let mut source = vec![section("a")];
        let builder = BlocksBuilder::from_blocks(&source);
        source.push(section("b"));
        assert_eq!(builder.len(), 1);

        let mut first = builder.build().unwrap();
        first.clear();
        let second = builder.build().unwrap();
        assert_eq!(ids(&second), vec![Some("a")]);
    }

    #[test]
    fn test_add_blocks_and_generic_add_keep_order() {
        let mut builder = BlocksBuilder::new();
        builder
            .add_blocks([section("a"), section("b")])
            .add::<VideoBlock>(|v| {
                v.block_id = Some("video".to_string());
                v.video_url = "https://example.com/v.mp4".to_string();
            })
            .add_file("ext-1")
            .add_image("https://example.com/i.png", "image", |i| {
                i.block_id = Some("img".to_string());
            });

        assert_eq!(
            ids(builder.blocks()),
            vec![Some("a"), Some("b"), Some("video"), None, Some("img")]
        );
        match &builder.blocks()[3] {
            Block::File(file) => {
                assert_eq!(file.external_id, "ext-1");
                assert_eq!(file.source, "remote");
            }
            other => panic!("unexpected block: {other:?}"),
        }
    }

    #[test]
    fn test_container_shortcut_propagates_limit_error() {
        let mut builder = BlocksBuilder::new();
        let err = builder
            .add_actions(|a| {
                for i in 0..26 {
                    a.add_button(format!("b{i}"), "Click", |_| {});
                }
            })
            .unwrap_err();
        assert_eq!(
            err,
            BlockKitError::StructuralLimitExceeded {
                limit: StructuralLimit::ActionsElements,
                max: 25,
                actual: 26,
            }
        );
        assert!(builder.is_empty());
    }

    #[test]
    fn test_input_block_id_limit() {
        let mut builder = BlocksBuilder::new();
        builder
            .add_input::<PlainTextInput>("Name", |i| {
                i.block_id("n".repeat(255));
            })
            .unwrap();
        let err = builder
            .add_input::<PlainTextInput>("Name", |i| {
                i.block_id("n".repeat(256));
            })
            .unwrap_err();
        assert!(matches!(
            err,
            BlockKitError::StructuralLimitExceeded {
                limit: StructuralLimit::BlockIdLength,
                max: 255,
                actual: 256,
            }
        ));
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_no_focused_elements_builds() {
        let mut builder = BlocksBuilder::new();
        builder
            .add_input::<PlainTextInput>("Name", |_| {})
            .unwrap()
            .add_actions(|a| {
                a.add_date_picker("when", |_| {});
            })
            .unwrap();
        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_one_focused_element_builds() {
        let mut builder = BlocksBuilder::new();
        builder
            .add_input::<PlainTextInput>("Name", |i| {
                i.focus_on_load(true);
            })
            .unwrap()
            .add_actions(|a| {
                a.add_date_picker("when", |p| {
                    p.focus_on_load(false);
                });
            })
            .unwrap();
        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_two_focused_inputs_rejected() {
        let mut builder = BlocksBuilder::new();
        builder
            .add_input::<PlainTextInput>("First", |i| {
                i.focus_on_load(true);
            })
            .unwrap()
            .add_input::<StaticSelect>("Second", |i| {
                i.focus_on_load(true);
            })
            .unwrap();
        assert_eq!(
            builder.build().unwrap_err(),
            BlockKitError::TooManyFocusedElements { count: 2, max: 1 }
        );
    }

    #[test]
    fn test_focus_counted_across_input_and_actions_blocks() {
        let mut builder = BlocksBuilder::new();
        builder
            .add_actions(|a| {
                a.add_button("noop", "No focus here", |_| {})
                    .add_date_picker("when", |p| {
                        p.focus_on_load(true);
                    });
            })
            .unwrap()
            .add_input::<DatePicker>("Due", |i| {
                i.focus_on_load(true);
            })
            .unwrap();
        assert!(matches!(
            builder.build(),
            Err(BlockKitError::TooManyFocusedElements { count: 2, .. })
        ));
        assert!(matches!(builder.to_json(), Err(BlockKitError::TooManyFocusedElements { .. })));
    }

    #[test]
    fn test_two_focused_elements_in_one_actions_block_rejected() {
        let mut builder = BlocksBuilder::new();
        builder
            .add_actions(|a| {
                a.add_static_select("a", |s| {
                    s.focus_on_load(true);
                })
                .add_time_picker("b", |t| {
                    t.focus_on_load(true);
                });
            })
            .unwrap();
        assert!(builder.build().is_err());
    }

    #[test]
    fn test_remove_preserves_order_of_remaining() {
        let mut builder =
            BlocksBuilder::from_blocks(&[section("a"), section("x1"), section("b"), section("x2"), section("c")]);
        let removed = builder.remove(|b| b.block_id().is_some_and(|id| id.starts_with('x')));
        assert_eq!(removed, 2);
        assert_eq!(ids(builder.blocks()), vec![Some("a"), Some("b"), Some("c")]);
    }

    #[test]
    fn test_without_and_remove_by_id() {
        let mut builder = BlocksBuilder::from_blocks(&[section("a"), section("b"), section("c")]);
        builder.without(|b| b.block_id() == Some("a"));
        assert!(builder.remove_by_id("c"));
        assert!(!builder.remove_by_id("missing"));
        assert_eq!(ids(builder.blocks()), vec![Some("b")]);
    }

    #[test]
    fn test_remove_action_keeps_empty_actions_block() {
        let built = BlocksBuilder::create()
            .add_actions(|a| {
                a.add_button("b1", "Click", |_| {});
            })
            .unwrap()
            .build()
            .unwrap();

        let mut editor = BlocksBuilder::from_blocks(&built);
        assert!(editor.remove_action_by_id("b1"));
        let edited = editor.build().unwrap();

        assert_eq!(edited.len(), 1);
        match &edited[0] {
            Block::Actions(actions) => assert!(actions.elements.is_empty()),
            other => panic!("unexpected block: {other:?}"),
        }
    }

    #[test]
    fn test_remove_action_searches_first_actions_block_only() {
        let mut builder = BlocksBuilder::new();
        builder
            .add_actions(|a| {
                a.add_button("first", "One", |_| {});
            })
            .unwrap()
            .add_actions(|a| {
                a.add_button("second", "Two", |_| {});
            })
            .unwrap();

        assert!(!builder.remove_action_by_id("second"));
        let Block::Actions(later) = &builder.blocks()[1] else {
            panic!("expected actions block");
        };
        assert_eq!(later.elements.len(), 1);
    }

    #[test]
    fn test_remove_action_removes_only_first_match() {
        let mut builder = BlocksBuilder::new();
        builder
            .add_divider()
            .add_actions(|a| {
                a.add_button("dup", "One", |b| {
                    b.value("1");
                })
                .add_button("dup", "Two", |b| {
                    b.value("2");
                });
            })
            .unwrap();

        assert!(builder.remove_action(|e| matches!(e, ActionElement::Button(b) if b.action_id.as_deref() == Some("dup"))));
        let Block::Actions(actions) = &builder.blocks()[1] else {
            panic!("expected actions block");
        };
        assert_eq!(actions.elements.len(), 1);
        assert!(matches!(&actions.elements[0], ActionElement::Button(Button { value: Some(v), .. }) if v == "2"));
    }

    #[test]
    fn test_remove_action_without_actions_block() {
        let mut builder = BlocksBuilder::from_blocks(&[section("a")]);
        assert!(!builder.remove_action(|_| true));
    }

    #[test]
    fn test_modify_only_touches_matching_kind() {
        let mut builder = BlocksBuilder::new();
        builder
            .add_block(section("a"))
            .add_header("Title")
            .add_block(section("b"));

        builder.modify::<SectionBlock>(
            |s| s.block_id.as_deref() != Some("b"),
            |s| s.text = Some(Text::markdown("*edited*")),
        );

        match builder.blocks() {
            [Block::Section(a), Block::Header(_), Block::Section(b)] => {
                assert_eq!(a.text, Some(Text::markdown("*edited*")));
                assert_eq!(b.text, Some(Text::plain("b")));
            }
            other => panic!("unexpected blocks: {other:?}"),
        }
    }

    #[test]
    fn test_modify_untyped_blocks_in_order() {
        let mut builder = BlocksBuilder::from_blocks(&[section("a"), section("b")]);
        let mut seen = Vec::new();
        builder.modify::<Block>(
            |_| true,
            |block| {
                seen.push(block.block_id().map(str::to_string));
                block.set_block_id(None);
            },
        );
        assert_eq!(seen, vec![Some("a".to_string()), Some("b".to_string())]);
        assert!(builder.blocks().iter().all(|b| b.block_id().is_none()));
    }

    #[test]
    fn test_modify_by_id_and_find_by_id() {
        let mut builder = BlocksBuilder::new();
        builder
            .add_input::<PlainTextInput>("Name", |i| {
                i.block_id("name");
            })
            .unwrap();

        builder.modify_by_id::<InputBlock>("name", |input| input.optional = Some(true));
        builder.modify_by_id::<SectionBlock>("name", |_| panic!("kind mismatch must be skipped"));

        match builder.find_by_id("name") {
            Some(Block::Input(input)) => assert_eq!(input.optional, Some(true)),
            other => panic!("unexpected block: {other:?}"),
        }
        assert!(builder.find_by_id("absent").is_none());
    }

    #[test]
    fn test_from_json_accepts_array_and_payload() {
        let blocks = json!([
            {"type": "header", "text": {"type": "plain_text", "text": "Hi"}},
            {"type": "divider", "block_id": "d1"}
        ]);
        let from_array = BlocksBuilder::from_json(&blocks).unwrap();
        let from_payload = BlocksBuilder::from_json(&json!({"text": "fallback", "blocks": blocks})).unwrap();

        assert_eq!(from_array, from_payload);
        assert_eq!(from_array.len(), 2);
        assert!(from_array.find_by_id("d1").is_some());
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let not_array = BlocksBuilder::from_json(&json!("blocks")).unwrap_err();
        assert!(matches!(
            not_array,
            BlockKitError::InvalidArgument { name: "json", ref reason } if reason.contains("a string")
        ));

        assert!(matches!(
            BlocksBuilder::from_json(&json!({"text": "no blocks"})),
            Err(BlockKitError::InvalidArgument { .. })
        ));
        assert!(matches!(
            BlocksBuilder::from_json(&json!([{"type": "carousel"}])),
            Err(BlockKitError::InvalidArgument { .. })
        ));
        assert!(matches!(
            BlocksBuilder::from_json_str("[{"),
            Err(BlockKitError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_json_rendering_round_trips() {
        let mut builder = BlocksBuilder::new();
        builder
            .add_section(|s| {
                s.block_id("intro").markdown("*Hello*").add_text_field("f1");
            })
            .unwrap()
            .add_divider();

        let compact = builder.to_json_string(&RenderConfig::default()).unwrap();
        let pretty = builder.to_json_string(&RenderConfig { pretty: true }).unwrap();
        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));

        let value = builder.to_json().unwrap();
        assert_eq!(value[0]["type"], "section");
        assert_eq!(value[0]["text"]["type"], "mrkdwn");
        assert_eq!(value[1]["type"], "divider");

        let reparsed = BlocksBuilder::from_json_str(&compact).unwrap();
        assert_eq!(reparsed, builder);
    }
}
