use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in pixels. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect {
            x,
            y,
            w: self.right().max(other.right()) - x,
            h: self.bottom().max(other.bottom()) - y,
        }
    }
}

/// Per-side quantities (margins, paddings, border widths).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Edges {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn all(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Sum of the left and right sides.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of the top and bottom sides.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// A measured, positioned piece of text on a single line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    /// Distance from the run's top edge to its baseline.
    pub baseline: f64,
    pub text: String,
}

/// One wrapped line of a text leaf.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub baseline: f64,
    pub runs: Vec<TextRun>,
}

impl LineBox {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    /// Aligns every run on the tallest baseline and recomputes the line extent.
    ///
    /// An empty line keeps its position and takes `empty_height`, which is how
    /// explicit blank lines still occupy vertical space.
    pub fn finish(&mut self, empty_height: f64) {
        if self.runs.is_empty() {
            self.w = 0.0;
            self.h = empty_height;
            self.baseline = 0.0;
            return;
        }
        let baseline = self
            .runs
            .iter()
            .fold(f64::MIN, |acc, run| acc.max(run.baseline));
        let mut right = self.x;
        let mut height: f64 = 0.0;
        for run in &mut self.runs {
            run.y += baseline - run.baseline;
            right = right.max(run.x + run.w);
            height = height.max(run.y - self.y + run.h);
        }
        self.baseline = baseline;
        self.w = right - self.x;
        self.h = height;
    }
}
