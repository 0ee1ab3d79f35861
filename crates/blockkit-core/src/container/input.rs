//! Input block builder.
//!
//! An input block wraps exactly one input-capable element. The builder keeps
//! the element typed so its setters stay reachable through `Deref`, and only
//! erases it into `InputElement` when the block is read out.

use std::ops::{Deref, DerefMut};

use blockkit_types::block::InputBlock;
use blockkit_types::capability::InputElementKind;
use blockkit_types::composition::PlainText;

use crate::element::ElementBuilder;

#[derive(Debug, Clone)]
pub struct InputBlockBuilder<T: InputElementKind> {
    block_id: Option<String>,
    label: PlainText,
    dispatch_action: Option<bool>,
    hint: Option<PlainText>,
    optional: Option<bool>,
    element: ElementBuilder<T>,
}

impl<T: InputElementKind> InputBlockBuilder<T> {
    pub fn new(label: impl Into<PlainText>, element: T) -> Self {
        Self {
            block_id: None,
            label: label.into(),
            dispatch_action: None,
            hint: None,
            optional: None,
            element: ElementBuilder::new(element),
        }
    }

    pub fn block_id(&mut self, block_id: impl Into<String>) -> &mut Self {
        self.block_id = Some(block_id.into());
        self
    }

    pub fn label(&mut self, label: impl Into<PlainText>) -> &mut Self {
        self.label = label.into();
        self
    }

    /// Whether interacting with the element dispatches a `block_actions` payload.
    pub fn dispatch_action(&mut self, dispatch: bool) -> &mut Self {
        self.dispatch_action = Some(dispatch);
        self
    }

    pub fn hint(&mut self, hint: impl Into<PlainText>) -> &mut Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn optional(&mut self, optional: bool) -> &mut Self {
        self.optional = Some(optional);
        self
    }

    /// Copy of the block as configured so far.
    ///
    /// The returned block is detached: setter calls made after `block()`
    /// do not show up in it. Call again, or use `into_block`, to read them.
    pub fn block(&self) -> InputBlock {
        self.clone().into_block()
    }

    pub fn into_block(self) -> InputBlock {
        InputBlock {
            block_id: self.block_id,
            label: self.label,
            element: self.element.into_inner().into(),
            dispatch_action: self.dispatch_action,
            hint: self.hint,
            optional: self.optional,
        }
    }
}

impl<T: InputElementKind> Deref for InputBlockBuilder<T> {
    type Target = ElementBuilder<T>;

    fn deref(&self) -> &Self::Target {
        &self.element
    }
}

impl<T: InputElementKind> DerefMut for InputBlockBuilder<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.element
    }
}
