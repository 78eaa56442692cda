//! Inline boxes and fragment accumulation.
//!
//! An inline box does not get a coordinate frame of its own. Its children
//! flow in the parent's frame, and the box itself is known only through the
//! per-line fragments its descendants produce. A box's left inset belongs
//! to its first fragment and its right inset to its last.

use super::FormattingContext;
use crate::constraints::Constraints;
use crate::engine::LayoutEngine;
use crate::output::{Fragments, LayoutResult};
use crate::style::preset;
use boxflow_style::Style;
use boxflow_types::Rect;

impl<'a, N: PartialEq> LayoutEngine<'a, N> {
    pub(crate) fn begin_inline(&mut self, style: &Style) -> (LayoutResult, Constraints) {
        let cb = self.containing_block();
        let mut preset = preset(style, &cb, (cb.cx, cb.cy), self.units);

        // Vertical margins take no space on a line, and width/height do not
        // apply to inline boxes.
        preset.computed.margin.top = 0.0;
        preset.computed.margin.bottom = 0.0;
        preset.rect.y = cb.cy;
        preset.rect.w = 0.0;
        preset.rect.h = 0.0;

        let mut child = cb;
        child.cx += preset.computed.inset_left();
        (LayoutResult::inline(preset.rect, preset.computed), child)
    }

    pub(crate) fn end_inline(&mut self, result: &mut LayoutResult, child: &Constraints) {
        let right = result.computed.inset_right();
        let start = inline_start(result);

        let mut edges = Vec::new();
        if let Fragments::Inline(fragments) = &mut result.fragments {
            match fragments.last_mut() {
                Some(last) => last.w += right,
                // Nothing inside produced a line; the insets still occupy one.
                None if child.cy == start.1 && child.cx + right > start.0 => {
                    fragments.push(Rect::new(start.0, start.1, child.cx + right - start.0, child.lh));
                }
                None => {}
            }
            // The leading fragment may be inset-only, so ancestors have not
            // seen it yet.
            edges.extend(fragments.first().copied());
            if fragments.len() > 1 {
                edges.extend(fragments.last().copied());
            }
            if let Some(bounds) = fragments.iter().copied().reduce(|acc, r| acc.union(&r)) {
                result.rect = bounds;
            }
        }
        if !edges.is_empty() {
            self.fold_into_inline_ancestors(&edges);
        }

        let parent = self.containing_block_mut();
        parent.cx = child.cx + right;
        parent.cy = child.cy;
        parent.lh = child.lh;
    }

    /// Adds `rects` (one per line) to every open inline ancestor, innermost
    /// first, stopping at the first ancestor that is not inline.
    pub(crate) fn fold_into_inline_ancestors(&mut self, rects: &[Rect]) {
        for (style, result) in self.styles.iter().zip(self.results.iter_mut()).rev() {
            if FormattingContext::of(style) != FormattingContext::Inline {
                break;
            }
            let start = inline_start(result);
            let lead = result.computed.inset_left();
            if let Fragments::Inline(fragments) = &mut result.fragments {
                for rect in rects {
                    push_fragment(fragments, *rect, start, lead);
                }
            }
        }
    }
}

/// Where the margin box of an open inline box begins.
fn inline_start(result: &LayoutResult) -> (f64, f64) {
    (result.rect.x - result.computed.margin.left, result.rect.y)
}

/// Adds `rect` to the fragment of its line. `lead` is the box's left inset,
/// which always lands on the line the box was opened on.
fn push_fragment(fragments: &mut Vec<Rect>, rect: Rect, start: (f64, f64), lead: f64) {
    if let Some(line) = fragments.iter_mut().rev().find(|f| f.y == rect.y) {
        *line = line.union(&rect);
        return;
    }
    if fragments.is_empty() {
        if rect.y == start.1 {
            // First line of the box: reach back over its leading inset.
            let x = start.0.min(rect.x);
            fragments.push(Rect::new(x, rect.y, rect.right() - x, rect.h));
            return;
        }
        // Content wrapped before anything landed on the opening line.
        if lead > 0.0 {
            fragments.push(Rect::new(start.0, start.1, lead, rect.h));
        }
    }
    fragments.push(rect);
}
