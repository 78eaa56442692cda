//! Boxes that do not take part in their parent's flow.

use crate::constraints::Constraints;
use crate::engine::LayoutEngine;
use crate::output::LayoutResult;
use crate::style::preset;
use boxflow_style::Style;
use boxflow_types::Rect;

impl<'a, N: PartialEq> LayoutEngine<'a, N> {
    /// Places the box at the containing block's origin. The parent cursor is
    /// left alone, so following siblings flow as if the box were absent.
    pub(crate) fn begin_absolute(&mut self, style: &Style) -> (LayoutResult, Constraints) {
        let cb = self.containing_block();
        let mut preset = preset(style, &cb, (cb.ox, cb.oy), self.units);
        let computed = preset.computed;
        if style.width.is_auto() {
            preset.rect.w = (cb.aw - computed.horizontal_insets()).max(0.0);
        }

        let child = Constraints::new(
            preset.rect.x + computed.padding.left + computed.border.left,
            preset.rect.y + computed.padding.top + computed.border.top,
            preset.rect.w,
            preset.rect.h,
        );
        (LayoutResult::boxed(preset.rect, computed), child)
    }

    pub(crate) fn end_absolute(&mut self, style: &Style, result: &mut LayoutResult, child: &Constraints) {
        if style.height.is_auto() {
            result.rect.h = child.content_extent().max(0.0);
        }
    }

    /// `display: none`. Descendants are still laid out and reported, in a
    /// copy of the containing block that is thrown away at `end`.
    pub(crate) fn begin_suppressed(&mut self, style: &Style) -> (LayoutResult, Constraints) {
        let cb = self.containing_block();
        let computed = preset(style, &cb, (cb.cx, cb.cy), self.units).computed;
        let rect = Rect::new(cb.cx, cb.cy, 0.0, 0.0);
        (LayoutResult::boxed(rect, computed), cb)
    }
}
