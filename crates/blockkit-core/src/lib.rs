//! Fluent builders and edit operations for Block Kit layouts.
//!
//! Layering, leaf first:
//! - `element`: `ElementBuilder<T>`, one owned element plus its `set` primitive.
//! - `extensions`: typed setters over `set`, grouped by capability.
//! - `container`: per-block builders that enforce Slack's structural limits.
//! - `blocks`: `BlocksBuilder`, the ordered layout with whole-layout checks
//!   and in-place editing.
//!
//! Record types live in `blockkit-types`; this crate never does I/O.

pub mod blocks;
pub mod container;
pub mod element;
pub mod error;
pub mod extensions;

pub use blocks::BlocksBuilder;
pub use element::ElementBuilder;
pub use error::{BlockKitError, StructuralLimit};
