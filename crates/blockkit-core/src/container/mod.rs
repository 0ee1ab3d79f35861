//! Builders for composite blocks.
//!
//! Each container collects its children through `add_*` calls and checks its
//! structural limits only in `build()`, in a fixed order: block id length,
//! then element/field count, then per-field length. Intermediate state may
//! exceed a limit and still be edited before `build()` runs.

pub mod actions;
pub mod context;
pub mod input;
pub mod rich_text;
pub mod section;

pub use actions::ActionsBlockBuilder;
pub use context::ContextBlockBuilder;
pub use input::InputBlockBuilder;
pub use rich_text::{
    RichTextBorderedBuilder, RichTextBuilder, RichTextListBuilder, RichTextSectionBuilder,
};
pub use section::SectionBuilder;
