//! The traversal engine.
//!
//! The host walks its own tree and calls [`LayoutEngine::begin`] on the way
//! down and [`LayoutEngine::end`] on the way up. The engine keeps one entry
//! per open node on four parallel stacks (node, style, constraint slot,
//! result) and hands every finished result to the `on_configured` callback,
//! children strictly before their parents.

use crate::algorithms::FormattingContext;
use crate::config::LayoutConfig;
use crate::constraints::{ConstraintPool, Constraints, InputConstraints};
use crate::output::LayoutResult;
use crate::style::resolve_font;
use crate::text::{layout_text, TextCursor};
use crate::units::UnitContext;
use crate::LayoutError;
use boxflow_style::Style;
use boxflow_traits::{FontQuery, TextMeasurer};
use boxflow_types::{LineBox, Rect};

pub struct LayoutEngine<'a, N> {
    config: LayoutConfig,
    pub(crate) units: UnitContext,
    measurer: Option<&'a dyn TextMeasurer>,
    on_configured: Box<dyn FnMut(N, LayoutResult) + 'a>,
    /// Containing block of top-level nodes.
    root: Constraints,
    initial: Constraints,
    pool: ConstraintPool,
    nodes: Vec<N>,
    pub(crate) styles: Vec<&'a Style>,
    /// Pool slot pushed by each open node. Text leaves push none.
    slots: Vec<Option<usize>>,
    pub(crate) results: Vec<LayoutResult>,
    measure_calls: usize,
}

impl<'a, N: PartialEq> LayoutEngine<'a, N> {
    pub fn new<F>(config: LayoutConfig, input: InputConstraints, on_configured: F) -> Self
    where
        F: FnMut(N, LayoutResult) + 'a,
    {
        let initial = Constraints::from(input);
        let viewport = config.viewport.unwrap_or((initial.aw, initial.ah));
        Self {
            config,
            units: UnitContext::new(config.rem, viewport, config.pixel_box_insets),
            measurer: None,
            on_configured: Box::new(on_configured),
            root: initial,
            initial,
            pool: ConstraintPool::new(),
            nodes: Vec::new(),
            styles: Vec::new(),
            slots: Vec::new(),
            results: Vec::new(),
            measure_calls: 0,
        }
    }

    pub fn with_measurer(mut self, measurer: &'a dyn TextMeasurer) -> Self {
        self.measurer = Some(measurer);
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Number of open nodes.
    pub fn depth(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_idle(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn pool(&self) -> &ConstraintPool {
        &self.pool
    }

    /// Total measurement requests made so far by text leaves.
    pub fn measure_calls(&self) -> usize {
        self.measure_calls
    }

    /// The containing block for the next node to begin.
    pub fn containing_block(&self) -> Constraints {
        self.pool.top().copied().unwrap_or(self.root)
    }

    pub(crate) fn containing_block_mut(&mut self) -> &mut Constraints {
        match self.pool.top_mut() {
            Some(record) => record,
            None => &mut self.root,
        }
    }

    /// Opens an element node.
    pub fn begin(&mut self, node: N, style: &'a Style) -> Result<(), LayoutError> {
        self.ensure_open_parent_is_element()?;
        let context = FormattingContext::of(style);
        log::trace!("begin depth={} context={:?}", self.depth(), context);

        let (result, child) = match context {
            FormattingContext::Block => self.begin_block(style),
            FormattingContext::Inline => self.begin_inline(style),
            FormattingContext::Absolute => self.begin_absolute(style),
            FormattingContext::Flex => self.begin_flex(style),
            FormattingContext::Grid => self.begin_grid(style),
            FormattingContext::Suppressed => self.begin_suppressed(style),
        };
        let slot = self.pool.acquire(child);
        self.push(node, style, Some(slot), result);
        Ok(())
    }

    /// Opens a text leaf and lays out `content` at the current cursor.
    ///
    /// The leaf still has to be closed with [`LayoutEngine::end`].
    pub fn begin_text(&mut self, node: N, style: &'a Style, content: &str) -> Result<(), LayoutError> {
        self.ensure_open_parent_is_element()?;
        let measurer = self.measurer.ok_or(LayoutError::MissingMeasurer)?;
        log::trace!("begin depth={} text chars={}", self.depth(), content.chars().count());

        let computed = resolve_font(style, self.units);
        let font = FontQuery {
            family: &style.font_family,
            size: computed.font_size,
            line_height: computed.line_height,
            weight: style.font_weight,
            style: style.font_style,
            letter_spacing: computed.letter_spacing,
        };
        let ignore_line_breaks = self.config.ignore_line_breaks;
        let cb = self.containing_block_mut();
        let cursor = TextCursor {
            line_start: cb.ox,
            available: cb.aw,
            x: cb.cx,
            y: cb.cy,
            line_extent: cb.lh,
        };

        let layout = layout_text(measurer, font, content, cursor, ignore_line_breaks);
        cb.cx = layout.cursor.x;
        cb.cy = layout.cursor.y;
        cb.lh = layout.cursor.line_extent;
        self.measure_calls += layout.measure_calls;

        let result = LayoutResult::text(layout.rect, computed, layout.lines);
        self.push(node, style, None, result);
        Ok(())
    }

    /// Closes the innermost open node, which must be `node`, and delivers its
    /// result.
    pub fn end(&mut self, node: &N) -> Result<(), LayoutError> {
        match self.nodes.last() {
            None => return Err(LayoutError::EmptyStack),
            Some(top) if top != node => {
                return Err(LayoutError::NodeMismatch { depth: self.nodes.len() });
            }
            Some(_) => {}
        }
        let (Some(node), Some(style), Some(slot), Some(mut result)) =
            (self.nodes.pop(), self.styles.pop(), self.slots.pop(), self.results.pop())
        else {
            return Err(LayoutError::EmptyStack);
        };

        if result.is_text() {
            let lines: Vec<Rect> = result.lines().iter().map(LineBox::rect).collect();
            self.fold_into_inline_ancestors(&lines);
        } else {
            let child = match slot {
                Some(_) => self.pool.release(),
                None => None,
            }
            .ok_or(LayoutError::EmptyStack)?;

            match FormattingContext::of(style) {
                context if context.is_block_level() => self.end_block(style, &mut result, &child),
                FormattingContext::Inline => self.end_inline(&mut result, &child),
                FormattingContext::Absolute => self.end_absolute(style, &mut result, &child),
                _ => {}
            }
        }
        log::trace!("end depth={} rect={:?}", self.depth(), result.rect);

        if self.nodes.is_empty() {
            log::debug!(
                "Layout pass finished; releasing {} constraint records",
                self.pool.allocated()
            );
            self.pool.reset();
            self.root = self.initial;
        }

        (self.on_configured)(node, result);
        Ok(())
    }

    /// Consumes the engine, failing if the host left nodes open.
    pub fn finish(self) -> Result<(), LayoutError> {
        if self.nodes.is_empty() {
            Ok(())
        } else {
            Err(LayoutError::UnclosedNodes(self.nodes.len()))
        }
    }

    fn ensure_open_parent_is_element(&self) -> Result<(), LayoutError> {
        match self.results.last() {
            Some(parent) if parent.is_text() => Err(LayoutError::ChildOfTextLeaf { depth: self.depth() }),
            _ => Ok(()),
        }
    }

    fn push(&mut self, node: N, style: &'a Style, slot: Option<usize>, result: LayoutResult) {
        self.nodes.push(node);
        self.styles.push(style);
        self.slots.push(slot);
        self.results.push(result);
    }
}
