use crate::constraints::Constraints;
use crate::engine::LayoutEngine;
use crate::output::LayoutResult;
use crate::style::preset;
use boxflow_style::Style;

impl<'a, N: PartialEq> LayoutEngine<'a, N> {
    /// Places a block-level box below whatever its parent has laid out so far.
    pub(crate) fn begin_block(&mut self, style: &Style) -> (LayoutResult, Constraints) {
        let units = self.units;
        let parent = self.containing_block_mut();
        parent.close_line();
        let cb = *parent;

        let mut preset = preset(style, &cb, (cb.ox, cb.cy), units);
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

    /// Resolves an `auto` height from the children and stacks the box in the
    /// parent's flow.
    pub(crate) fn end_block(&mut self, style: &Style, result: &mut LayoutResult, child: &Constraints) {
        if style.height.is_auto() {
            result.rect.h = child.content_extent().max(0.0);
        }
        let advance = result.computed.vertical_insets() + result.rect.h;
        let parent = self.containing_block_mut();
        parent.cy += advance;
        parent.cx = parent.ox;
        parent.lh = 0.0;
    }

    pub(crate) fn begin_flex(&mut self, style: &Style) -> (LayoutResult, Constraints) {
        log::debug!("Flex layout is not implemented; laying out as block");
        self.begin_block(style)
    }

    pub(crate) fn begin_grid(&mut self, style: &Style) -> (LayoutResult, Constraints) {
        log::debug!("Grid layout is not implemented; laying out as block");
        self.begin_block(style)
    }
}
