//! Box-model presetting: everything about a box that can be known before
//! any of its children are seen.

use crate::constraints::Constraints;
use crate::units::UnitContext;
use boxflow_style::{BoxSizing, Style};
use boxflow_types::{Edges, Rect};

/// The resolved, pixel-valued subset of a node's style.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ComputedStyle {
    pub margin: Edges,
    pub padding: Edges,
    pub border: Edges,
    pub font_size: f64,
    pub line_height: f64,
    pub letter_spacing: f64,
}

impl ComputedStyle {
    /// Margin + padding + border on the left side.
    pub fn inset_left(&self) -> f64 {
        self.margin.left + self.padding.left + self.border.left
    }

    pub fn inset_right(&self) -> f64 {
        self.margin.right + self.padding.right + self.border.right
    }

    pub fn inset_top(&self) -> f64 {
        self.margin.top + self.padding.top + self.border.top
    }

    pub fn inset_bottom(&self) -> f64 {
        self.margin.bottom + self.padding.bottom + self.border.bottom
    }

    pub fn horizontal_insets(&self) -> f64 {
        self.inset_left() + self.inset_right()
    }

    pub fn vertical_insets(&self) -> f64 {
        self.inset_top() + self.inset_bottom()
    }
}

/// A box with its position and insets resolved. `rect.w`/`rect.h` are the
/// content size, left at 0 for `auto` until the formatting context fills them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub rect: Rect,
    pub computed: ComputedStyle,
}

/// Resolves font metrics only. Used for text leaves, which have no box insets.
pub fn resolve_font(style: &Style, units: UnitContext) -> ComputedStyle {
    let first = units.font_size(style.font_size).unwrap_or(units.rem);
    let units = units.with_font_size(first);
    let font_size = units.font_size_relative(style.font_size).unwrap_or(first);
    let units = units.with_font_size(font_size);
    ComputedStyle {
        font_size,
        line_height: units.line_height(style.line_height),
        letter_spacing: units.letter_spacing(style.letter_spacing),
        ..Default::default()
    }
}

/// Resolves the box model of `style` against the containing block `cb`, with
/// the margin box's top-left corner at `origin`.
///
/// The order matters: the font size comes first so that `em` insets can use
/// it, and margins come before position.
pub fn preset(style: &Style, cb: &Constraints, origin: (f64, f64), units: UnitContext) -> Preset {
    let font_size = units.font_size(style.font_size).unwrap_or(units.rem);
    let units = units.with_font_size(font_size);
    let mut computed = ComputedStyle::default();

    computed.margin = Edges::new(
        units.margin(style.margin_top, cb.pbw),
        units.margin(style.margin_right, cb.pbw),
        units.margin(style.margin_bottom, cb.pbw),
        units.margin(style.margin_left, cb.pbw),
    );

    let mut rect = Rect::new(
        origin.0 + computed.margin.left,
        origin.1 + computed.margin.top,
        0.0,
        0.0,
    );

    computed.padding = Edges::new(
        units.padding(style.padding_top, cb.pbw),
        units.padding(style.padding_right, cb.pbw),
        units.padding(style.padding_bottom, cb.pbw),
        units.padding(style.padding_left, cb.pbw),
    );

    computed.border = Edges::new(
        units.border(style.border_top_width),
        units.border(style.border_right_width),
        units.border(style.border_bottom_width),
        units.border(style.border_left_width),
    );

    let font = resolve_font(style, units);
    computed.font_size = font.font_size;
    computed.line_height = font.line_height;
    computed.letter_spacing = font.letter_spacing;
    let units = units.with_font_size(computed.font_size);

    rect.w = units.size(style.width, cb.pbw).unwrap_or(0.0);
    rect.h = units.size(style.height, cb.pbh).unwrap_or(0.0);
    if style.box_sizing == BoxSizing::BorderBox {
        rect.w = (rect.w - (computed.border.horizontal() + computed.padding.horizontal())).max(0.0);
        rect.h = (rect.h - (computed.border.vertical() + computed.padding.vertical())).max(0.0);
    }

    Preset { rect, computed }
}
