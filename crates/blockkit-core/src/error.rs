//! Builder error type.
//!
//! Every error is returned synchronously from the call that detects it.
//! Structural limits are only checked by a container's `build()`, and the
//! whole-tree focus rule only by `BlocksBuilder::build()`.

use std::fmt;

use thiserror::Error;

/// Which structural limit a container violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralLimit {
    BlockIdLength,
    ActionsElements,
    ContextElements,
    SectionFields,
    SectionFieldLength,
}

impl fmt::Display for StructuralLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralLimit::BlockIdLength => write!(f, "block_id length"),
            StructuralLimit::ActionsElements => write!(f, "actions block element count"),
            StructuralLimit::ContextElements => write!(f, "context block element count"),
            StructuralLimit::SectionFields => write!(f, "section field count"),
            StructuralLimit::SectionFieldLength => write!(f, "section field text length"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlockKitError {
    /// An argument was rejected before any state was changed.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("{limit} exceeds maximum of {max} (got {actual})")]
    StructuralLimitExceeded {
        limit: StructuralLimit,
        max: usize,
        actual: usize,
    },

    #[error("{count} elements have focus_on_load set, at most {max} allowed")]
    TooManyFocusedElements { count: usize, max: usize },

    #[error("failed to render blocks: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for BlockKitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl BlockKitError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Fail when `actual` exceeds `max` for the given limit.
pub(crate) fn check_limit(
    limit: StructuralLimit,
    max: usize,
    actual: usize,
) -> Result<(), BlockKitError> {
    if actual > max {
        return Err(BlockKitError::StructuralLimitExceeded { limit, max, actual });
    }
    Ok(())
}

/// Fail when a block id is longer than `limits::BLOCK_ID_MAX_LEN` characters.
pub(crate) fn check_block_id(block_id: Option<&str>) -> Result<(), BlockKitError> {
    match block_id {
        Some(id) => check_limit(
            StructuralLimit::BlockIdLength,
            blockkit_types::limits::BLOCK_ID_MAX_LEN,
            id.chars().count(),
        ),
        None => Ok(()),
    }
}
