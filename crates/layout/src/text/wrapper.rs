use super::measure::{Fit, PrefixMeasurer};
use boxflow_traits::{FontQuery, TextMeasurer};
use boxflow_types::{LineBox, Rect, TextRun};

/// Where text flow starts (or ended) inside its containing block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextCursor {
    /// Left edge that wrapped lines return to.
    pub line_start: f64,
    /// Full line width of the containing block.
    pub available: f64,
    pub x: f64,
    pub y: f64,
    /// Height already claimed on the current line by earlier content.
    pub line_extent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub rect: Rect,
    pub lines: Vec<LineBox>,
    /// Cursor after the last run.
    pub cursor: TextCursor,
    pub measure_calls: usize,
}

/// Breaks `content` into line boxes, starting at `cursor`.
pub fn layout_text(
    measurer: &dyn TextMeasurer,
    font: FontQuery<'_>,
    content: &str,
    cursor: TextCursor,
    ignore_line_breaks: bool,
) -> TextLayout {
    let prefix = PrefixMeasurer::new(measurer, font, content, ignore_line_breaks);
    LineBuilder::new(prefix, cursor).run()
}

struct LineBuilder<'t> {
    prefix: PrefixMeasurer<'t>,
    start: TextCursor,
    cursor: TextCursor,
    line: LineBox,
    lines: Vec<LineBox>,
    line_height: f64,
}

impl<'t> LineBuilder<'t> {
    fn new(prefix: PrefixMeasurer<'t>, cursor: TextCursor) -> Self {
        let line_height = prefix.font().line_height;
        Self {
            prefix,
            start: cursor,
            cursor,
            line: LineBox::new(cursor.x, cursor.y),
            lines: Vec::new(),
            line_height,
        }
    }

    fn run(mut self) -> TextLayout {
        let len = self.prefix.len();
        let mut pos = 0;
        while pos < len {
            if self.prefix.is_break_at(pos) {
                self.break_line(true);
                pos += 1;
                continue;
            }

            let has_content_before = self.cursor.x > self.cursor.line_start;
            let available = self.cursor.available - (self.cursor.x - self.cursor.line_start);
            if available <= 0.0 && has_content_before {
                self.break_line(false);
                continue;
            }

            let fit = self.prefix.fit(pos, available);
            if has_content_before && (fit.overflowed || fit.split_word) {
                // Retry on a fresh line rather than splitting here.
                self.break_line(false);
                continue;
            }

            self.push_run(pos, &fit);
            pos += fit.count;
            if fit.new_line && pos < len {
                self.break_line(false);
            }
        }

        if !self.line.is_empty() {
            let mut line = std::mem::take(&mut self.line);
            line.finish(self.line_height);
            self.cursor.line_extent = self.cursor.line_extent.max(line.h);
            self.lines.push(line);
        }
        self.into_layout()
    }

    fn push_run(&mut self, start: usize, fit: &Fit) {
        self.line.runs.push(TextRun {
            x: self.cursor.x,
            y: self.cursor.y,
            w: fit.width,
            h: self.line_height,
            baseline: fit.baseline,
            text: self.prefix.slice(start, start + fit.count).to_string(),
        });
        self.cursor.x += fit.width;
        self.cursor.line_extent = self.cursor.line_extent.max(self.line_height);
    }

    /// Closes the current line and moves the cursor to the start of the next.
    /// Soft wraps drop an empty line; explicit breaks keep it.
    fn break_line(&mut self, explicit: bool) {
        let mut line = std::mem::take(&mut self.line);
        if explicit || !line.is_empty() {
            line.finish(self.line_height);
            self.cursor.line_extent = self.cursor.line_extent.max(line.h);
            self.lines.push(line);
        }
        self.cursor.y += self.cursor.line_extent.max(self.line_height);
        self.cursor.x = self.cursor.line_start;
        self.cursor.line_extent = 0.0;
        self.line = LineBox::new(self.cursor.x, self.cursor.y);
    }

    fn into_layout(self) -> TextLayout {
        let rect = match self.lines.last() {
            Some(last) => {
                let x = self.lines.iter().fold(f64::MAX, |acc, l| acc.min(l.x));
                let w = self.lines.iter().fold(0.0_f64, |acc, l| acc.max(l.w));
                Rect::new(x, self.start.y, w, last.y + last.h - self.start.y)
            }
            None => Rect::new(self.start.x, self.start.y, 0.0, 0.0),
        };
        TextLayout {
            rect,
            lines: self.lines,
            cursor: self.cursor,
            measure_calls: self.prefix.calls(),
        }
    }
}
