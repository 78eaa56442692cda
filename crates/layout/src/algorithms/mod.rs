//! Formatting contexts.
//!
//! Each submodule adds the `begin_*`/`end_*` pair for one context to
//! [`LayoutEngine`](crate::LayoutEngine). `begin_*` receives the style of the
//! node being opened and returns its preset result together with the
//! containing block its children will see. `end_*` receives the finished
//! child record and completes the result.

mod absolute;
mod block;
mod inline;

use boxflow_style::{Display, Style};

/// How a node takes part in its parent's flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormattingContext {
    Block,
    Inline,
    /// Out of flow, placed against the containing block's origin.
    Absolute,
    Flex,
    Grid,
    /// `display: none`.
    Suppressed,
}

impl FormattingContext {
    pub fn of(style: &Style) -> Self {
        if style.display == Display::None {
            return Self::Suppressed;
        }
        if style.is_absolute() {
            return Self::Absolute;
        }
        match style.display {
            Display::Inline => Self::Inline,
            Display::Flex | Display::InlineFlex => Self::Flex,
            Display::Grid | Display::InlineGrid => Self::Grid,
            Display::Block | Display::InlineBlock | Display::None => Self::Block,
        }
    }

    /// Contexts that stack their margin box in the parent's block flow.
    pub fn is_block_level(self) -> bool {
        matches!(self, Self::Block | Self::Flex | Self::Grid)
    }
}
