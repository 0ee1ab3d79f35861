//! Structural limits Slack enforces on Block Kit payloads.
//!
//! Lengths are counted in characters, not bytes.

/// Maximum length of any `block_id`.
pub const BLOCK_ID_MAX_LEN: usize = 255;

/// Maximum number of elements in an actions block.
pub const ACTIONS_MAX_ELEMENTS: usize = 25;

/// Maximum number of items in a context block.
pub const CONTEXT_MAX_ELEMENTS: usize = 10;

/// Maximum number of fields in a section block.
pub const SECTION_MAX_FIELDS: usize = 10;

/// Maximum length of a single section field's text.
pub const SECTION_FIELD_MAX_LEN: usize = 2000;

/// Maximum number of elements across a whole layout with `focus_on_load` set.
pub const MAX_FOCUSED_ELEMENTS: usize = 1;
