//! Output types from the layout engine.
//!
//! One [`LayoutResult`] is delivered per node, in post-order, through the
//! engine's `on_configured` callback.

use crate::style::ComputedStyle;
use boxflow_types::{LineBox, Rect};

/// Variant-specific part of a result.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragments {
    /// Block-level and out-of-flow boxes: the rect says it all.
    Box,
    /// An inline box, one rect per line it touches.
    Inline(Vec<Rect>),
    /// A text leaf, one line box per wrapped line.
    Text(Vec<LineBox>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Position of the border box and size of the content box. For inline
    /// boxes, the bounding box of their fragments; for text, of their lines.
    pub rect: Rect,
    pub computed: ComputedStyle,
    pub fragments: Fragments,
}

impl LayoutResult {
    pub fn boxed(rect: Rect, computed: ComputedStyle) -> Self {
        Self {
            rect,
            computed,
            fragments: Fragments::Box,
        }
    }

    pub fn inline(rect: Rect, computed: ComputedStyle) -> Self {
        Self {
            rect,
            computed,
            fragments: Fragments::Inline(Vec::new()),
        }
    }

    pub fn text(rect: Rect, computed: ComputedStyle, lines: Vec<LineBox>) -> Self {
        Self {
            rect,
            computed,
            fragments: Fragments::Text(lines),
        }
    }

    /// Line boxes of a text leaf; empty for any other node.
    pub fn lines(&self) -> &[LineBox] {
        match &self.fragments {
            Fragments::Text(lines) => lines,
            _ => &[],
        }
    }

    /// Per-line fragments of an inline box; empty for any other node.
    pub fn inline_fragments(&self) -> &[Rect] {
        match &self.fragments {
            Fragments::Inline(fragments) => fragments,
            _ => &[],
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.fragments, Fragments::Text(_))
    }

    /// Width of the box from border edge to border edge.
    pub fn border_box_width(&self) -> f64 {
        self.rect.w
            + self.computed.padding.horizontal()
            + self.computed.border.horizontal()
    }
}
