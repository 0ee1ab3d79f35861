//! Block Kit layout records for Slack messages, modals and home tabs.
//!
//! This crate contains the plain data types the builders in `blockkit-core`
//! populate: blocks, elements, composition objects and rich text, plus the
//! capability traits builders are generic over. Field names and `type`
//! discriminants match Slack's wire format, so the records serialize with
//! serde as-is.
//!
//! Zero behaviour beyond field access -- only serde, thiserror, toml.

pub mod block;
pub mod capability;
pub mod composition;
pub mod config;
pub mod element;
pub mod error;
pub mod limits;
pub mod rich_text;
